// Application-wide state provided to the component tree as Dioxus context.
// Per-card input state lives inside the card itself so instances stay isolated.

use calculator::CalculatorSettings;

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub palette: ThemePalette,
    pub tip: String,
    pub calculator: CalculatorSettings,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            palette: ThemePalette::by_name(&config.theme),
            tip: config.tip.clone(),
            calculator: config.calculator.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_copies_card_settings() {
        let mut config = AppConfig::default();
        config.tip = "Idle less".to_string();
        config.calculator.seed_display_savings = 1;

        let state = AppState::from_config(&config);
        assert_eq!(state.tip, "Idle less");
        assert_eq!(state.calculator.seed_display_savings, 1);
        assert_eq!(state.palette, ThemePalette::fleet_dark());
    }
}
