//! The browser wallet provider capability.
//!
//! Wallet extensions inject an EIP-1193 style `window.ethereum` object into
//! the page; this crate wraps its `request({ method })` API behind plain
//! async functions. On native targets there is no extension, so an env-gated
//! mock provider stands in (`mock.rs`) to keep the desktop build usable.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WalletError {
    /// No provider object is present. Detectable synchronously, before any
    /// request is made.
    #[error("no wallet provider is installed")]
    ProviderAbsent,
    /// The provider rejected the request (user denied, extension locked, ...).
    #[error("wallet request rejected: {0}")]
    Rejected(String),
    #[error("wallet returned no accounts")]
    NoAccounts,
}

#[cfg(target_arch = "wasm32")]
mod eip1193;
#[cfg(not(target_arch = "wasm32"))]
mod mock;

#[cfg(target_arch = "wasm32")]
pub use eip1193::{provider_detected, request_account_permission, request_accounts};
#[cfg(not(target_arch = "wasm32"))]
pub use mock::{provider_detected, request_account_permission, request_accounts};
