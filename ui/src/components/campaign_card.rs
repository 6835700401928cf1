//! Card for a single campaign in the landing list.

use dioxus::prelude::*;

use crate::campaign::Campaign;
use crate::components::pico::Button;
use crate::currency::format_inr;

#[component]
pub fn CampaignCard(campaign: Campaign, on_support: EventHandler<Campaign>) -> Element {
    let raised = format_inr(campaign.raised);
    let goal = format_inr(campaign.goal);
    // Width is intentionally not capped at 100%; the track clips the overflow.
    let fill_style = format!("width: {:.2}%;", campaign.progress() * 100.0);
    let campaign_for_support = campaign.clone();

    rsx! {
        article {
            class: "campaign-card",
            div {
                class: "campaign-cover",
                img { src: "{campaign.image}", alt: "{campaign.business}" }
                span { class: "days-left-badge", "{campaign.days_left} days left" }
            }
            div {
                class: "campaign-body",
                div {
                    class: "campaign-headline",
                    div {
                        h3 { "{campaign.business}" }
                        p { class: "campaign-owner", "by {campaign.name}" }
                    }
                    div {
                        class: "campaign-figures",
                        p { class: "campaign-raised", "₹{raised}" }
                        p { class: "campaign-goal", "of ₹{goal}" }
                    }
                }
                p { class: "campaign-story", "{campaign.story}" }
                div {
                    class: "tag-row",
                    for (i, tag) in campaign.tags.iter().enumerate() {
                        span { key: "{i}", class: "tag-chip", "{tag}" }
                    }
                }
                div {
                    class: "progress-track",
                    div { class: "progress-fill", style: "{fill_style}" }
                }
                div {
                    class: "campaign-footer",
                    span { class: "supporter-count", "{campaign.supporters} supporters" }
                    Button {
                        on_click: move |_| on_support.call(campaign_for_support.clone()),
                        "Support Now"
                    }
                }
            }
        }
    }
}
