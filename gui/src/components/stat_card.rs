#![allow(non_snake_case)]
use calculator::Easing;
use dioxus::prelude::*;
use shared::models::{StatIcon, StatMetric};

use crate::config::theme::ThemePalette;

fn icon_and_color(icon: StatIcon, palette: &ThemePalette) -> (&'static str, String) {
    match icon {
        StatIcon::TrendingUp => ("↗", palette.positive.clone()),
        StatIcon::Clock => ("◷", palette.highlight.clone()),
    }
}

/// Inline style for the fill bar; the bar grows from zero width on mount.
pub fn fill_style(metric: &StatMetric, color: &str) -> String {
    format!(
        "height: 100%; width: {}%; background: {}; animation: fill-grow {}ms {} {}ms both;",
        metric.fill_percent,
        color,
        metric.reveal.duration_ms,
        Easing::EaseOut.css_timing_function(),
        metric.reveal.delay_ms
    )
}

#[component]
pub fn StatCard(metric: StatMetric, palette: ThemePalette) -> Element {
    let (glyph, color) = icon_and_color(metric.icon, &palette);
    let bar_style = fill_style(&metric, &color);
    let label = metric.label.clone();
    let change_label = metric.change_label.clone();

    rsx! {
        div {
            class: "roi-stat-card",
            style: "padding: 12px; border-radius: 8px; border: 1px solid rgba(255,255,255,0.05); background: rgba(0,0,0,0.1);",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                span { style: "color: rgba(255,255,255,0.7); font-size: 12px; font-weight: 500;", "{label}" }
                span { style: "color: {color}; font-size: 14px;", "{glyph}" }
            }
            div {
                style: "height: 6px; width: 100%; background: rgba(255,255,255,0.1); border-radius: 9999px; overflow: hidden;",
                div { style: "{bar_style}" }
            }
            p { style: "margin: 4px 0 0 0; color: #fff; font-weight: 700; font-size: 14px;", "{change_label}" }
        }
    }
}
