use serde::{Deserialize, Serialize};

/// The three user-editable inputs of the ROI card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetInputs {
    pub fleet_size: u32,
    pub fuel_cost: f64,
    pub maintenance: i64,
}

impl Default for FleetInputs {
    fn default() -> Self {
        Self {
            fleet_size: 124,
            fuel_cost: 3.85,
            maintenance: 12_500,
        }
    }
}

/// Inclusive bounds of the fleet size slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSizeBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for FleetSizeBounds {
    fn default() -> Self {
        Self { min: 1, max: 500 }
    }
}

impl FleetSizeBounds {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Width of the slider fill, as a percentage of `max`.
    pub fn fill_percent(&self, value: u32) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(value) / f64::from(self.max) * 100.0
    }
}

/// Delayed reveal used by the decorative entrance animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub duration_ms: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatIcon {
    TrendingUp,
    Clock,
}

/// Illustrative metric shown in the results grid. Values are static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatMetric {
    pub label: String,
    pub icon: StatIcon,
    pub fill_percent: u8,
    pub change_label: String,
    pub reveal: Reveal,
}

impl StatMetric {
    pub fn efficiency() -> Self {
        Self {
            label: "Efficiency".to_string(),
            icon: StatIcon::TrendingUp,
            fill_percent: 72,
            change_label: "+14%".to_string(),
            reveal: Reveal { duration_ms: 1000, delay_ms: 200 },
        }
    }

    pub fn uptime() -> Self {
        Self {
            label: "Uptime".to_string(),
            icon: StatIcon::Clock,
            fill_percent: 88,
            change_label: "+22%".to_string(),
            reveal: Reveal { duration_ms: 1000, delay_ms: 400 },
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::efficiency(), Self::uptime()]
    }
}

pub const CHART_BAR_HEIGHTS: [u32; 6] = [6, 10, 14, 20, 16, 12];
const PRIMARY_BAR_COUNT: usize = 4;
const BAR_HEIGHT_SCALE: u32 = 3;

/// One bar of the decorative results chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub height_px: u32,
    pub primary: bool,
    pub opacity: f64,
    pub reveal: Reveal,
}

/// Lays out the chart bars: the leading bars are accented with rising
/// opacity, the trailing ones are muted. Each bar starts 100ms after the
/// previous one.
pub fn chart_bars(heights: &[u32]) -> Vec<ChartBar> {
    heights
        .iter()
        .enumerate()
        .map(|(i, &height)| {
            let primary = i < PRIMARY_BAR_COUNT;
            let opacity = if primary { (i as f64 + 1.0) * 0.2 + 0.2 } else { 1.0 };
            ChartBar {
                height_px: height * BAR_HEIGHT_SCALE,
                primary,
                opacity,
                reveal: Reveal {
                    duration_ms: 800,
                    delay_ms: 400 + i as u64 * 100,
                },
            }
        })
        .collect()
}

/// Actions exposed by the card footer. Their behavior belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardAction {
    Report,
    Call,
    Close,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Report => "Report",
            CardAction::Call => "Call",
            CardAction::Close => "Close",
        }
    }
}
