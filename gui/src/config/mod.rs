// GUI configuration module
pub mod theme;

// Mirrors the structure of assets/config/default.json
use calculator::CalculatorSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub window: WindowSettings,
    pub theme: String, // only "dark" ships today
    pub tip: String,
    #[serde(default)]
    pub calculator: CalculatorSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Fleet ROI Calculator".to_string(),
            width: 640,
            height: 640,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            window: WindowSettings::default(),
            theme: "dark".to_string(),
            tip: "Route optimization could reduce fuel spend by 18%.".to_string(),
            calculator: CalculatorSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.calculator.validate()?;
        Ok(config)
    }

    // The default config is embedded so the binary runs from any directory.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json_str(config_str)
    }
}
