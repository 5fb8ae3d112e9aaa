// Decorative growth chart under the metric cards
#![allow(non_snake_case)]
use calculator::Easing;
use dioxus::prelude::*;
use shared::models::ChartBar;

pub fn bar_style(bar: &ChartBar, accent: &str) -> String {
    let color = if bar.primary { accent } else { "rgba(255,255,255,0.2)" };
    format!(
        "width: 6px; height: {}px; opacity: {}; background: {}; border-radius: 1px 1px 0 0; \
         animation: bar-grow {}ms {} {}ms both;",
        bar.height_px,
        bar.opacity,
        color,
        bar.reveal.duration_ms,
        Easing::EaseOut.css_timing_function(),
        bar.reveal.delay_ms
    )
}

#[component]
pub fn BarChart(bars: Vec<ChartBar>, accent: String) -> Element {
    let styles: Vec<String> = bars.iter().map(|bar| bar_style(bar, &accent)).collect();

    rsx! {
        div {
            class: "roi-chart",
            "aria-hidden": "true",
            style: "position: relative; width: 100%; height: 96px; border-radius: 8px; overflow: hidden; margin-bottom: 16px; border: 1px solid rgba(255,255,255,0.05); background: linear-gradient(to right, rgba(184,134,11,0.2), transparent);",
            div {
                style: "position: absolute; bottom: 12px; left: 12px; display: flex; gap: 4px; align-items: flex-end;",
                for (i, style) in styles.into_iter().enumerate() {
                    div { key: "{i}", style: "{style}" }
                }
            }
        }
    }
}
