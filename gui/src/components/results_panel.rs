// Right column of the card: animated savings, metric cards, chart and actions
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{chart_bars, CardAction, StatMetric, CHART_BAR_HEIGHTS};

use super::action_bar::ActionBar;
use super::bar_chart::BarChart;
use super::stat_card::StatCard;
use crate::config::theme::ThemePalette;

#[component]
pub fn ResultsPanel(
    savings_text: String,
    palette: ThemePalette,
    on_action: EventHandler<CardAction>,
) -> Element {
    let metrics = StatMetric::defaults();
    let bars = chart_bars(&CHART_BAR_HEIGHTS);
    let panel_style = format!(
        "width: 58.3%; padding: 20px; display: flex; flex-direction: column; position: relative; overflow: hidden; \
         background: linear-gradient(to bottom right, {}, {});",
        palette.results_gradient_from, palette.results_gradient_to
    );
    let accent = palette.accent.clone();

    rsx! {
        div {
            class: "roi-results",
            style: "{panel_style}",
            div {
                style: "flex: 1; display: flex; flex-direction: column;",
                p {
                    style: "color: {accent}; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; font-size: 10px; margin: 0 0 4px 0;",
                    "Projected Results"
                }
                h1 {
                    style: "color: #fff; font-size: 30px; font-weight: 700; line-height: 1; margin: 0 0 4px 0;",
                    span {
                        class: "roi-savings",
                        "aria-live": "polite",
                        style: "color: {accent}; font-variant-numeric: tabular-nums;",
                        "{savings_text}"
                    }
                }
                p { style: "color: rgba(255,255,255,0.6); font-size: 14px; margin: 0 0 24px 0;", "Annual Potential Savings" }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 24px;",
                    for (i, metric) in metrics.into_iter().enumerate() {
                        StatCard { key: "{i}", metric: metric, palette: palette.clone() }
                    }
                }

                BarChart { bars: bars, accent: accent.clone() }
            }
            ActionBar { palette: palette.clone(), on_action: on_action }
        }
    }
}
