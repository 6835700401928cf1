// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod campaign;
pub mod compat;
mod components;
mod contributor;
mod currency;
pub mod hooks;
pub mod registry;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use hooks::use_wallet::WalletStatus;
use registry::CampaignRegistry;
use screens::landing::LandingScreen;

const APP_CSS: &str = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    body {
        margin: 0;
        background-color: var(--pico-background-color);
    }

    /* --- HERO --- */
    .hero {
        text-align: center;
        margin: 3rem 0;
    }
    .hero-title { color: var(--pico-primary); }
    .hero-lede {
        color: var(--pico-muted-color);
        max-width: 44rem;
        margin: 0 auto 1.5rem;
    }
    .wallet-badge {
        display: inline-block;
        color: var(--pico-ins-color);
        font-weight: 600;
    }

    /* --- LAYOUT --- */
    .landing-columns {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    @media (min-width: 1024px) {
        .landing-columns { flex-direction: row; }
        .campaign-column { width: 66%; }
        .side-column { width: 34%; }
    }
    .campaign-column-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .campaign-column-header h2 {
        font-size: 1.4rem;
        margin: 0;
        color: var(--pico-primary);
    }
    .campaign-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .side-column {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    /* --- CAMPAIGN CARDS --- */
    .campaign-card {
        padding: 0;
        overflow: hidden;
    }
    .campaign-cover { position: relative; }
    .campaign-cover img {
        width: 100%;
        height: 12rem;
        object-fit: cover;
        display: block;
    }
    .days-left-badge {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: var(--pico-card-background-color);
        color: var(--pico-primary);
        border-radius: 999px;
        padding: 0.25rem 0.75rem;
        font-weight: 600;
        font-size: 0.85rem;
    }
    .campaign-body { padding: 1.25rem; }
    .campaign-headline {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        gap: 1rem;
    }
    .campaign-headline h3 { margin-bottom: 0.25rem; }
    .campaign-owner {
        color: var(--pico-muted-color);
        margin: 0;
    }
    .campaign-figures { text-align: right; }
    .campaign-raised {
        font-size: 1.4rem;
        font-weight: 700;
        color: var(--pico-primary);
        margin: 0;
    }
    .campaign-goal {
        color: var(--pico-muted-color);
        margin: 0;
    }
    .campaign-story { margin: 1rem 0; }
    .tag-row {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .tag-chip {
        background: var(--pico-primary-background);
        color: var(--pico-primary-inverse);
        border-radius: 999px;
        padding: 0.2rem 0.75rem;
        font-size: 0.85rem;
    }
    .progress-track {
        width: 100%;
        height: 0.5rem;
        border-radius: 999px;
        background: var(--pico-form-element-background-color);
        overflow: hidden;
        margin-bottom: 1rem;
    }
    .progress-fill {
        height: 100%;
        border-radius: 999px;
        background: var(--pico-primary);
    }
    .campaign-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .supporter-count { color: var(--pico-muted-color); }

    /* --- SIDEBAR --- */
    .contributor-list {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .contributor-row {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .contributor-rank {
        width: 2rem;
        height: 2rem;
        flex-shrink: 0;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        background: var(--pico-primary-background);
        color: var(--pico-primary-inverse);
        font-weight: 700;
    }
    .contributor-ident { flex: 1; }
    .contributor-ident p { margin: 0; }
    .contributor-amount {
        font-weight: 700;
        color: var(--pico-primary);
        margin: 0;
    }
    .impact-card {
        background: linear-gradient(135deg, var(--pico-primary) 0%, var(--pico-primary-hover) 100%);
        color: var(--pico-primary-inverse);
    }
    .impact-card h3 { color: var(--pico-primary-inverse); }
    .impact-list {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .impact-value {
        font-size: 1.4rem;
        font-weight: 700;
        margin: 0;
    }
    .impact-label { margin: 0; opacity: 0.85; }

    /* --- FORMS / MODALS --- */
    dialog article {
        width: 100%;
        max-width: 40rem;
        max-height: 90vh;
        overflow-y: auto;
    }
    .form-actions {
        display: flex;
        justify-content: flex-end;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .image-picker {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .image-preview {
        height: 3.5rem;
        border-radius: var(--pico-border-radius);
    }
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.min.css",
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(AppState::new);

    // Create signals for mutable state at the top level of the component,
    // then provide them as a single context.
    let registry_signal = use_signal(CampaignRegistry::seed);
    let wallet_signal = use_signal(WalletStatus::default);
    use_context_provider(|| AppStateMut {
        registry: registry_signal,
        wallet: wallet_signal,
    });

    rsx! {
        LandingScreen {}
    }
}
