//=============================================================================
// File: src/screens/landing.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::campaign::Campaign;
use crate::components::campaign_card::CampaignCard;
use crate::components::contributor_board::ContributorBoard;
use crate::components::create_campaign_modal::CreateCampaignModal;
use crate::components::donation_modal::DonationModal;
use crate::components::impact_stats::ImpactStats;
use crate::components::pico::{Button, Container};
use crate::currency::abbreviate_address;
use crate::hooks::use_wallet::{use_wallet, WalletStatus};

#[component]
pub fn LandingScreen() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut wallet_gate = use_wallet();
    let registry = app_state_mut.registry;
    let wallet = app_state_mut.wallet;

    let mut show_create_form = use_signal(|| false);
    let mut show_donation_modal = use_signal(|| false);
    let mut selected_campaign = use_signal::<Option<Campaign>>(|| None);

    // Both openers are gated: disconnected attempts alert and change nothing.
    let open_create_form = move |_: MouseEvent| {
        spawn(async move {
            if wallet_gate.require_connected().await {
                show_create_form.set(true);
            }
        });
    };
    let mut open_donation_modal = move |campaign: Campaign| {
        spawn(async move {
            if wallet_gate.require_connected().await {
                selected_campaign.set(Some(campaign));
                show_donation_modal.set(true);
            }
        });
    };

    rsx! {
        Container {
            header {
                class: "hero",
                h1 { span { class: "hero-title", "Fund the Future of Our Planet" } }
                p {
                    class: "hero-lede",
                    "Join the movement to combat climate change. Support innovative projects that make a real impact on our environment."
                }
                match wallet() {
                    WalletStatus::Connected(address) => {
                        let abbreviated = abbreviate_address(&address);
                        rsx! {
                            div { class: "wallet-badge", "Connected: {abbreviated}" }
                        }
                    }
                    WalletStatus::Disconnected => rsx! {
                        Button {
                            on_click: move |_| {
                                spawn(async move {
                                    wallet_gate.connect().await;
                                });
                            },
                            "Connect Wallet"
                        }
                    },
                }
            }
            div {
                class: "landing-columns",
                section {
                    class: "campaign-column",
                    div {
                        class: "campaign-column-header",
                        h2 { "Manage your campaigns and track their progress" }
                        Button {
                            on_click: open_create_form,
                            "Create Request"
                        }
                    }
                    div {
                        class: "campaign-list",
                        {registry.read().campaigns().iter().cloned().map(|campaign| {
                            let key = campaign.id;
                            rsx! {
                                CampaignCard {
                                    key: "{key}",
                                    campaign,
                                    on_support: move |campaign: Campaign| open_donation_modal(campaign),
                                }
                            }
                        })}
                    }
                }
                aside {
                    class: "side-column",
                    ContributorBoard {
                        contributors: app_state.contributors.clone(),
                    }
                    ImpactStats {}
                }
            }
            CreateCampaignModal {
                is_open: show_create_form,
            }
            DonationModal {
                is_open: show_donation_modal,
                selected: selected_campaign,
            }
        }
    }
}
