#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::CardAction;

use crate::components::FleetRoiCalculator;
use crate::state::app_state::AppState;

// Entrance animations referenced by the card's inline styles.
const GLOBAL_STYLES: &str = r#"
body { margin: 0; font-family: ui-sans-serif, system-ui, sans-serif; }
@keyframes card-enter { from { opacity: 0; transform: scale(0.95); } }
@keyframes fill-grow { from { width: 0; } }
@keyframes bar-grow { from { height: 0; opacity: 0; } }
"#;

#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();
    let page_style = format!(
        "width: 100vw; height: 100vh; display: flex; align-items: center; justify-content: center; \
         box-sizing: border-box; padding: 16px; background: {}; color: #f1f5f9;",
        app_state.palette.page_background
    );

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            style: "{page_style}",
            FleetRoiCalculator {
                settings: app_state.calculator.clone(),
                palette: app_state.palette.clone(),
                tip: app_state.tip.clone(),
                on_action: move |action: CardAction| match action {
                    CardAction::Close => dioxus_desktop::window().close(),
                    // Report generation and contact belong to an embedding host.
                    CardAction::Report | CardAction::Call => {
                        tracing::debug!("[CARD ACTION] {} has no host handler", action.label());
                    }
                },
            }
        }
    }
}
