// Fleet ROI calculator card: inputs on the left, animated results on the right.
#![allow(non_snake_case)]
use calculator::{CalculatorSettings, InputState};
use dioxus::prelude::*;
use shared::models::CardAction;

use super::action_bar::emit_action;
use super::input_panel::InputPanel;
use super::results_panel::ResultsPanel;
use crate::config::theme::ThemePalette;
use crate::services::counter_driver::use_animated_counter;

#[component]
pub fn FleetRoiCalculator(
    settings: CalculatorSettings,
    palette: ThemePalette,
    tip: String,
    on_action: EventHandler<CardAction>,
) -> Element {
    let inputs = use_signal(|| InputState::from_settings(&settings));
    let savings = use_memo(move || inputs.read().savings());
    let counter = use_animated_counter(savings, settings.seed_display_savings, settings.animation);

    let savings_text = counter.read().displayed_text().to_string();
    let card_style = format!(
        "position: relative; width: 100%; height: 100%; max-width: 600px; max-height: 600px; \
         display: flex; border-radius: 12px; overflow: hidden; border: 1px solid rgba(255,255,255,0.1); \
         background: {}; backdrop-filter: blur(12px); box-shadow: 0 25px 50px -12px rgba(0,0,0,0.5); \
         animation: card-enter 500ms ease-out both;",
        palette.card_background
    );

    rsx! {
        div {
            class: "roi-card",
            style: "{card_style}",
            InputPanel {
                inputs: inputs,
                palette: palette.clone(),
                tip: tip.clone(),
            }
            ResultsPanel {
                savings_text: savings_text,
                palette: palette.clone(),
                on_action: on_action.clone(),
            }
            button {
                class: "roi-card-close",
                "aria-label": "Close",
                style: "position: absolute; top: 12px; right: 12px; background: none; border: none; color: rgba(255,255,255,0.4); font-size: 18px; cursor: pointer; z-index: 20;",
                onclick: move |_| emit_action(&on_action, CardAction::Close),
                "✕"
            }
        }
    }
}
