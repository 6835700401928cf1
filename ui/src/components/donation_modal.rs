//! The support/donation modal.
//!
//! Open carries the selected campaign. Submit performs the extra
//! account-selection round-trip before the donation is applied; a provider
//! failure drops back to the open form with nothing mutated.

use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::campaign::Campaign;
use crate::compat;
use crate::components::pico::{Button, ButtonType, Input, NoTitleModal, TextArea};
use crate::hooks::use_wallet::use_wallet;

#[component]
pub fn DonationModal(is_open: Signal<bool>, selected: Signal<Option<Campaign>>) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut registry = app_state_mut.registry;
    let mut wallet_gate = use_wallet();

    let mut amount_str = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Clear the selection and transient input whenever the modal closes.
    use_effect(move || {
        if !is_open() {
            amount_str.set(String::new());
            message.set(String::new());
            submitting.set(false);
            selected.set(None);
        }
    });

    let amount_valid = use_memo(move || {
        matches!(amount_str.read().trim().parse::<f64>(), Ok(amount) if amount > 0.0)
    });

    let mut submit = move || {
        if submitting() || !amount_valid() {
            return;
        }
        let campaign_id = match &*selected.peek() {
            Some(campaign) => campaign.id,
            None => return,
        };
        spawn(async move {
            if !wallet_gate.require_connected().await {
                return;
            }
            submitting.set(true);
            if let Err(error) = wallet_gate.reselect_account().await {
                dioxus_logger::tracing::warn!("Error processing donation: {error}");
                submitting.set(false);
                compat::alert("There was an error processing your donation. Please try again.")
                    .await;
                return;
            }
            let amount = amount_str.peek().trim().parse::<f64>().unwrap_or_default();
            let outcome = registry
                .write()
                .donate(campaign_id, amount)
                .map(|campaign| campaign.clone());
            match outcome {
                Ok(updated) => {
                    dioxus_logger::tracing::info!(
                        "donation applied: campaign {} now at ₹{}",
                        updated.id,
                        updated.raised
                    );
                    is_open.set(false);
                    compat::alert("Thank you for your contribution!").await;
                }
                Err(error) => {
                    submitting.set(false);
                    compat::alert(&error.to_string()).await;
                }
            }
        });
    };

    let campaign = selected.read().clone();
    let min_donation = app_state.min_donation;

    rsx! {
        NoTitleModal {
            is_open: is_open,
            if let Some(campaign) = campaign {
                h3 { "Support {campaign.business}" }
                p {
                    class: "donation-lede",
                    "Your contribution will help {campaign.name} achieve their goals."
                }
                form {
                    onsubmit: move |event: FormEvent| {
                        event.prevent_default();
                        submit();
                    },
                    Input {
                        label: "Contribution Amount (₹)".to_string(),
                        name: "amount",
                        input_type: "number".to_string(),
                        min: "{min_donation}",
                        value: "{amount_str}",
                        required: true,
                        on_input: move |event: FormEvent| amount_str.set(event.value()),
                    }
                    TextArea {
                        label: "Message of Support (Optional)".to_string(),
                        name: "message",
                        rows: 3,
                        value: "{message}",
                        on_input: move |event: FormEvent| message.set(event.value()),
                    }
                    footer {
                        class: "form-actions",
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| is_open.set(false),
                            "Cancel"
                        }
                        Button {
                            native_type: "submit".to_string(),
                            disabled: !amount_valid() || submitting(),
                            "Contribute"
                        }
                    }
                }
            }
        }
    }
}
