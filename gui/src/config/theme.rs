// Colors used by the ROI card
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub page_background: String,
    pub card_background: String,
    pub results_gradient_from: String,
    pub results_gradient_to: String,
    pub foreground: String,
    pub muted: String,
    pub accent: String, // gold, used for the savings figure and primary actions
    pub positive: String,
    pub highlight: String,
}

impl ThemePalette {
    pub fn fleet_dark() -> Self {
        Self {
            page_background: "#0f172a".to_string(),
            card_background: "rgba(26, 36, 30, 0.85)".to_string(),
            results_gradient_from: "#1a241e".to_string(),
            results_gradient_to: "#4a443d".to_string(),
            foreground: "#ffffff".to_string(),
            muted: "rgba(255, 255, 255, 0.6)".to_string(),
            accent: "#B8860B".to_string(),
            positive: "#4ade80".to_string(),
            highlight: "#E47A5F".to_string(),
        }
    }

    /// Resolves the `theme` entry of the app config.
    pub fn by_name(name: &str) -> Self {
        match name {
            "dark" => Self::fleet_dark(),
            other => {
                tracing::warn!("Unknown theme '{}', using dark", other);
                Self::fleet_dark()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(ThemePalette::by_name("neon"), ThemePalette::fleet_dark());
        assert_eq!(ThemePalette::by_name("dark").accent, "#B8860B");
    }
}
