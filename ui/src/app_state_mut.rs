//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::hooks::use_wallet::WalletStatus;
use crate::registry::CampaignRegistry;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any state that needs to change and
/// trigger automatic re-renders in the view. It is separate from the
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The campaign registry, mutated by the creation and donation flows.
    pub registry: Signal<CampaignRegistry>,
    /// Wallet connection state shared by every gated action.
    pub wallet: Signal<WalletStatus>,
}
