//! The static community impact card shown in the sidebar.

use dioxus::prelude::*;

const IMPACT_STATS: [(&str, &str); 3] = [
    ("₹12.5L+", "Total Funds Raised"),
    ("250+", "Businesses Supported"),
    ("1,500+", "Active Contributors"),
];

#[component]
pub fn ImpactStats() -> Element {
    rsx! {
        article {
            class: "impact-card",
            h3 { "Community Impact" }
            div {
                class: "impact-list",
                for (value, label) in IMPACT_STATS {
                    div { class: "impact-row",
                        p { class: "impact-value", "{value}" }
                        p { class: "impact-label", "{label}" }
                    }
                }
            }
        }
    }
}
