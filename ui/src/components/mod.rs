//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.
pub mod campaign_card;
pub mod contributor_board;
pub mod create_campaign_modal;
pub mod donation_modal;
pub mod impact_stats;
pub mod pico;
