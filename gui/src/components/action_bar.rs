// Footer actions. The card only forwards them; the host decides what they do.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::CardAction;

use crate::config::theme::ThemePalette;

pub fn emit_action(handler: &EventHandler<CardAction>, action: CardAction) {
    tracing::info!("[CARD ACTION] {}", action.label());
    handler.call(action);
}

#[component]
pub fn ActionBar(palette: ThemePalette, on_action: EventHandler<CardAction>) -> Element {
    let accent = palette.accent.clone();
    let report_label = CardAction::Report.label();
    let call_label = CardAction::Call.label();

    rsx! {
        div {
            class: "roi-actions",
            style: "margin-top: auto; display: flex; gap: 12px; padding-top: 16px; border-top: 1px solid rgba(255,255,255,0.1);",
            button {
                style: "flex: 1; padding: 12px 0; border-radius: 6px; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); color: #fff; font-size: 12px; font-weight: 600; cursor: pointer;",
                onclick: {
                    let on_action = on_action.clone();
                    move |_| emit_action(&on_action, CardAction::Report)
                },
                "⭳ {report_label}"
            }
            button {
                style: "flex: 1; padding: 12px 0; border-radius: 6px; border: none; background: {accent}; color: #fff; font-size: 12px; font-weight: 700; cursor: pointer;",
                onclick: move |_| emit_action(&on_action, CardAction::Call),
                "{call_label} →"
            }
        }
    }
}
