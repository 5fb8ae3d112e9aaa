// Left column of the card: fleet size slider, fuel cost and maintenance inputs
#![allow(non_snake_case)]
use calculator::InputState;
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;

const FIELD_STYLE: &str = "width: 100%; height: 40px; box-sizing: border-box; border-radius: 6px; \
    border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); color: #fff; \
    padding: 0 12px 0 36px; font-size: 14px;";
const LABEL_STYLE: &str = "color: rgba(255,255,255,0.8); font-size: 14px; font-weight: 500; margin: 0 0 4px 0;";
const ICON_STYLE: &str = "position: absolute; left: 12px; top: 50%; transform: translateY(-50%); color: rgba(255,255,255,0.4);";

#[component]
pub fn InputPanel(inputs: Signal<InputState>, palette: ThemePalette, tip: String) -> Element {
    let mut inputs = inputs;
    // Raw text is kept separately so partial entries like "3." survive re-renders.
    let mut fuel_text = use_signal(|| inputs.peek().fuel_cost().to_string());
    let mut maintenance_text = use_signal(|| inputs.peek().maintenance().to_string());

    let state = inputs.read();
    let fleet_size = state.fleet_size();
    let bounds = state.bounds();
    let fill_percent = bounds.fill_percent(fleet_size);
    let fuel_error = state.errors().fuel_cost.as_ref().map(|e| e.to_string());
    let maintenance_error = state.errors().maintenance.as_ref().map(|e| e.to_string());
    drop(state);

    let accent = palette.accent.clone();
    let min_label = bounds.min;
    let max_label = bounds.max;

    rsx! {
        div {
            class: "roi-inputs",
            style: "width: 41.6%; padding: 20px; display: flex; flex-direction: column; gap: 16px; background: rgba(0,0,0,0.3); border-right: 1px solid rgba(255,255,255,0.05); overflow-y: auto;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "color: {accent}; font-size: 22px;", "▦" }
                h2 { style: "color: #fff; font-size: 18px; font-weight: 700; margin: 0;", "ROI Calculator" }
            }

            // Fleet size slider
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    p { style: LABEL_STYLE, "Fleet Size" }
                    p { style: "color: {accent}; font-weight: 700; margin: 0;", "{fleet_size}" }
                }
                div {
                    style: "position: relative; height: 20px; display: flex; align-items: center;",
                    div {
                        style: "flex: 1; height: 6px; border-radius: 9999px; background: rgba(255,255,255,0.1); overflow: hidden;",
                        div { style: "height: 100%; width: {fill_percent}%; background: {accent}; border-radius: 9999px; transition: width 150ms ease-out;" }
                    }
                    input {
                        r#type: "range",
                        min: "{min_label}",
                        max: "{max_label}",
                        value: "{fleet_size}",
                        "aria-label": "Fleet Size Slider",
                        style: "position: absolute; inset: 0; width: 100%; margin: 0; accent-color: {accent}; cursor: pointer;",
                        oninput: move |evt: FormEvent| {
                            let _ = inputs.write().set_fleet_size_text(&evt.value());
                        },
                    }
                }
                div {
                    style: "display: flex; justify-content: space-between; font-size: 9px; color: rgba(255,255,255,0.4); font-weight: 700; letter-spacing: 0.1em;",
                    span { "{min_label}" }
                    span { "{max_label}" }
                }
            }

            // Fuel cost
            label {
                style: "display: flex; flex-direction: column;",
                p { style: LABEL_STYLE, "Avg Fuel Cost ($/gal)" }
                div {
                    style: "position: relative;",
                    span { style: ICON_STYLE, "⛽" }
                    input {
                        r#type: "number",
                        step: "0.01",
                        "aria-label": "Average fuel cost in dollars per gallon",
                        style: FIELD_STYLE,
                        value: "{fuel_text}",
                        oninput: move |evt: FormEvent| {
                            let raw = evt.value();
                            let _ = inputs.write().set_fuel_cost_text(&raw);
                            fuel_text.set(raw);
                        },
                    }
                }
                if let Some(message) = fuel_error {
                    p { class: "roi-field-error", style: "color: #f87171; font-size: 11px; margin: 4px 0 0 0;", "{message}" }
                }
            }

            // Maintenance spend
            label {
                style: "display: flex; flex-direction: column;",
                p { style: LABEL_STYLE, "Monthly Maint. ($)" }
                div {
                    style: "position: relative;",
                    span { style: ICON_STYLE, "🔧" }
                    input {
                        r#type: "text",
                        "aria-label": "Monthly maintenance spend in dollars",
                        style: FIELD_STYLE,
                        value: "{maintenance_text}",
                        oninput: move |evt: FormEvent| {
                            let raw = evt.value();
                            let _ = inputs.write().set_maintenance_text(&raw);
                            maintenance_text.set(raw);
                        },
                    }
                }
                if let Some(message) = maintenance_error {
                    p { class: "roi-field-error", style: "color: #f87171; font-size: 11px; margin: 4px 0 0 0;", "{message}" }
                }
            }

            div {
                class: "roi-tip",
                style: "padding: 12px; border-radius: 8px; background: rgba(184,134,11,0.1); border: 1px solid rgba(184,134,11,0.2);",
                p {
                    style: "color: {accent}; font-size: 12px; line-height: 1.6; margin: 0;",
                    span { style: "font-weight: 700;", "Tip: " }
                    "{tip}"
                }
            }
        }
    }
}
