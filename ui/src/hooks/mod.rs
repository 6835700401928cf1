pub mod use_wallet;
