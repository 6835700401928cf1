use dioxus::prelude::*;
use wallet::WalletError;

use crate::app_state_mut::AppStateMut;
use crate::compat;

/// Wallet connection state. The address is the first account returned by the
/// provider; it is replaced whenever the user re-selects an account.
#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connected(String),
}

impl WalletStatus {
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(address) => Some(address),
            WalletStatus::Disconnected => None,
        }
    }
}

/// Gate in front of every mutating action.
///
/// Wraps the shared wallet status signal and funnels all provider traffic
/// through one place so failure handling stays uniform: absent provider and
/// disconnected-precondition failures alert the user, rejected requests are
/// logged and surfaced to the caller.
#[derive(Clone, Copy)]
pub struct WalletGate {
    status: Signal<WalletStatus>,
}

impl WalletGate {
    pub fn new(status: Signal<WalletStatus>) -> Self {
        Self { status }
    }

    pub fn is_connected(&self) -> bool {
        self.status.peek().is_connected()
    }

    /// Initial connection. An absent provider prompts the user to install
    /// one; a rejected request is logged and leaves the state untouched.
    pub async fn connect(&mut self) {
        if !wallet::provider_detected() {
            compat::alert("Please install MetaMask to use this feature!").await;
            return;
        }
        match wallet::request_accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(address) => self.status.set(WalletStatus::Connected(address)),
                None => {
                    dioxus_logger::tracing::warn!("wallet returned no accounts");
                }
            },
            Err(error) => {
                dioxus_logger::tracing::warn!("Error connecting wallet: {error}");
            }
        }
    }

    /// Precondition check for mutating actions. Alerts and returns `false`
    /// while disconnected, with no other side effect.
    pub async fn require_connected(&self) -> bool {
        if self.is_connected() {
            true
        } else {
            compat::alert("Please connect your wallet first!").await;
            false
        }
    }

    /// The extra permission round-trip performed before committing a
    /// donation, distinct from the initial connect. The freshly selected
    /// account becomes the active address.
    pub async fn reselect_account(&mut self) -> Result<String, WalletError> {
        wallet::request_account_permission().await?;
        let accounts = wallet::request_accounts().await?;
        let address = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
        self.status.set(WalletStatus::Connected(address.clone()));
        Ok(address)
    }
}

/// Handle to the shared wallet gate from any component under `App`.
pub fn use_wallet() -> WalletGate {
    let app_state_mut = use_context::<AppStateMut>();
    WalletGate::new(app_state_mut.wallet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_exposes_the_active_address() {
        let connected = WalletStatus::Connected("0xabc".to_string());
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some("0xabc"));

        let disconnected = WalletStatus::default();
        assert!(disconnected.is_disconnected());
        assert_eq!(disconnected.address(), None);
    }
}
