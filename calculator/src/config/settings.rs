// Calculator settings, embedded in the GUI config or loaded from a JSON file
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::models::{FleetInputs, FleetSizeBounds};

use crate::animation::easing::Easing;
use crate::error::{CalculatorError, Result};

/// What to do with text that does not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Invalid text silently becomes 0.
    #[default]
    Coerce,
    /// Invalid text is rejected and the field keeps its previous value.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaSettings {
    pub base_savings_per_unit: f64,
    pub fuel_savings_multiplier: f64,
    pub maintenance_savings_ratio: f64,
}

impl Default for FormulaSettings {
    fn default() -> Self {
        Self {
            base_savings_per_unit: 1500.0,
            fuel_savings_multiplier: 100.0,
            maintenance_savings_ratio: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub duration_ms: u64,
    pub easing: Easing,
    pub frame_interval_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: Easing::CircOut,
            frame_interval_ms: 16,
        }
    }
}

impl AnimationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub defaults: FleetInputs,
    /// Value shown before the first recompute. It is not derived from
    /// `defaults`, so the card animates away from it on mount.
    pub seed_display_savings: i64,
    pub fleet_size_range: FleetSizeBounds,
    pub formula: FormulaSettings,
    pub animation: AnimationSettings,
    pub input_policy: InputPolicy,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            defaults: FleetInputs::default(),
            seed_display_savings: 248_500,
            fleet_size_range: FleetSizeBounds::default(),
            formula: FormulaSettings::default(),
            animation: AnimationSettings::default(),
            input_policy: InputPolicy::default(),
        }
    }
}

impl CalculatorSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading calculator settings from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        let range = self.fleet_size_range;
        if range.min == 0 {
            return Err(CalculatorError::ConfigError(
                "fleet_size_range.min must be at least 1".to_string(),
            ));
        }
        if range.min > range.max {
            return Err(CalculatorError::ConfigError(format!(
                "fleet_size_range.min ({}) exceeds max ({})",
                range.min, range.max
            )));
        }
        if !range.contains(self.defaults.fleet_size) {
            return Err(CalculatorError::ConfigError(format!(
                "default fleet size {} is outside {}..={}",
                self.defaults.fleet_size, range.min, range.max
            )));
        }
        if self.animation.duration_ms == 0 {
            return Err(CalculatorError::ConfigError(
                "animation.duration_ms must be positive".to_string(),
            ));
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(CalculatorError::ConfigError(
                "animation.frame_interval_ms must be positive".to_string(),
            ));
        }
        let formula = self.formula;
        let coefficients = [
            formula.base_savings_per_unit,
            formula.fuel_savings_multiplier,
            formula.maintenance_savings_ratio,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(CalculatorError::ConfigError(
                "formula coefficients must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
