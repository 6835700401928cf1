//! The ranked top-contributors card.
//!
//! The board renders seed data only; session donations do not move it.

use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::contributor::Contributor;
use crate::currency::format_inr;

#[component]
pub fn ContributorBoard(contributors: Vec<Contributor>) -> Element {
    rsx! {
        Card {
            h3 { "Top Contributors" }
            div {
                class: "contributor-list",
                {contributors.iter().enumerate().map(|(rank, contributor)| {
                    let position = rank + 1;
                    let amount = format_inr(contributor.amount);
                    rsx! {
                        div { key: "{rank}", class: "contributor-row",
                            div { class: "contributor-rank", "{position}" }
                            div { class: "contributor-ident",
                                p { class: "contributor-name", "{contributor.name}" }
                                small { "{contributor.projects} projects supported" }
                            }
                            p { class: "contributor-amount", "₹{amount}" }
                        }
                    }
                })}
            }
        }
    }
}
