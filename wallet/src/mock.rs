//! Stand-in provider for native targets.
//!
//! Desktop builds have no browser extension to inject a provider. Setting
//! `TERRAFUND_MOCK_WALLET=1` at build time enables a single hard-coded dev
//! account so the flows stay exercisable; otherwise the provider is absent.

use crate::WalletError;

const MOCK_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

fn mock_enabled() -> bool {
    option_env!("TERRAFUND_MOCK_WALLET") == Some("1")
}

pub fn provider_detected() -> bool {
    mock_enabled()
}

pub async fn request_accounts() -> Result<Vec<String>, WalletError> {
    if mock_enabled() {
        Ok(vec![MOCK_ACCOUNT.to_string()])
    } else {
        Err(WalletError::ProviderAbsent)
    }
}

pub async fn request_account_permission() -> Result<(), WalletError> {
    if mock_enabled() {
        dioxus_logger::tracing::info!("mock wallet: account permission granted");
        Ok(())
    } else {
        Err(WalletError::ProviderAbsent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WalletError;

    #[tokio::test]
    async fn absent_provider_is_reported() {
        // TERRAFUND_MOCK_WALLET is not set in test builds.
        assert!(!provider_detected());
        assert_eq!(request_accounts().await, Err(WalletError::ProviderAbsent));
        assert_eq!(
            request_account_permission().await,
            Err(WalletError::ProviderAbsent)
        );
    }
}
