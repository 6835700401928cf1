//! The create-campaign form modal.
//!
//! Collects a [`CampaignDraft`] and commits it to the registry on submit.
//! The draft is discarded whenever the modal closes, on any close path.

use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::campaign::{unix_millis, CampaignDraft};
use crate::compat;
use crate::components::pico::{Button, ButtonType, Input, Modal, TextArea};

#[component]
pub fn CreateCampaignModal(is_open: Signal<bool>) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut registry = app_state_mut.registry;
    let mut draft = use_signal(CampaignDraft::default);

    use_effect(move || {
        if !is_open() {
            draft.set(CampaignDraft::default());
        }
    });

    let is_complete = use_memo(move || draft.read().is_complete());
    let today = chrono::Local::now().date_naive().to_string();
    let min_goal = app_state.min_goal;

    let mut submit = move || {
        if !is_complete() {
            return;
        }
        let snapshot = (*draft.peek()).clone();
        let now = chrono::Local::now().naive_local();
        let created = registry
            .write()
            .create(&snapshot, unix_millis(), now)
            .map(|campaign| campaign.clone());
        match created {
            Ok(campaign) => {
                if let Ok(json) = serde_json::to_string(&campaign) {
                    dioxus_logger::tracing::info!("created campaign: {json}");
                }
                is_open.set(false);
            }
            Err(error) => {
                spawn(async move {
                    compat::alert(&error.to_string()).await;
                });
            }
        }
    };

    rsx! {
        Modal {
            is_open: is_open,
            title: "Create Funding Request".to_string(),
            form {
                class: "create-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    submit();
                },
                Input {
                    label: "Your Name".to_string(),
                    name: "owner",
                    value: "{draft.read().name}",
                    required: true,
                    on_input: move |event: FormEvent| draft.with_mut(|d| d.name = event.value()),
                }
                Input {
                    label: "Business Name".to_string(),
                    name: "business",
                    value: "{draft.read().business}",
                    required: true,
                    on_input: move |event: FormEvent| draft.with_mut(|d| d.business = event.value()),
                }
                TextArea {
                    label: "Business Story".to_string(),
                    name: "story",
                    rows: 4,
                    value: "{draft.read().story}",
                    required: true,
                    on_input: move |event: FormEvent| draft.with_mut(|d| d.story = event.value()),
                }
                Input {
                    label: "Funding Amount (₹)".to_string(),
                    name: "goal",
                    input_type: "number".to_string(),
                    min: "{min_goal}",
                    value: "{draft.read().goal}",
                    required: true,
                    on_input: move |event: FormEvent| draft.with_mut(|d| d.goal = event.value()),
                }
                Input {
                    label: "Campaign Deadline".to_string(),
                    name: "deadline",
                    input_type: "date".to_string(),
                    min: "{today}",
                    value: "{draft.read().deadline}",
                    required: true,
                    on_input: move |event: FormEvent| draft.with_mut(|d| d.deadline = event.value()),
                }
                Input {
                    label: "Tags (comma-separated)".to_string(),
                    name: "tags",
                    placeholder: "e.g., Handicrafts, Traditional, Artisan",
                    value: "{draft.read().tags}",
                    required: true,
                    on_input: move |event: FormEvent| draft.with_mut(|d| d.tags = event.value()),
                }
                div {
                    class: "image-field",
                    label { "Business Image" }
                    div {
                        class: "image-picker",
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| {
                                spawn(async move {
                                    match compat::pick_image_file().await {
                                        Ok(Some(reference)) => {
                                            draft.with_mut(|d| d.image = Some(reference));
                                        }
                                        Ok(None) => {}
                                        Err(error) => {
                                            dioxus_logger::tracing::warn!(
                                                "image selection failed: {error}"
                                            );
                                        }
                                    }
                                });
                            },
                            "Choose Image"
                        }
                        if let Some(image) = draft.read().image.clone() {
                            img {
                                class: "image-preview",
                                src: "{image}",
                                alt: "Campaign cover preview",
                            }
                        } else {
                            small { "A placeholder image is used if none is chosen." }
                        }
                    }
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
                        disabled: !is_complete(),
                        "Create Campaign"
                    }
                }
            }
        }
    }
}
