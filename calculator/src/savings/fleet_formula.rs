// Linear fleet savings formula:
// fleet * base + fleet * (fuel_cost * fuel_multiplier) + maintenance * maintenance_ratio
use super::{round_half_up, SavingsModel};
use crate::config::FormulaSettings;
use serde_json::Value;
use shared::models::FleetInputs;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetSavingsFormula {
    base_savings_per_unit: f64,
    fuel_savings_multiplier: f64,
    maintenance_savings_ratio: f64,
}

impl FleetSavingsFormula {
    pub fn new(settings: FormulaSettings) -> Self {
        Self {
            base_savings_per_unit: settings.base_savings_per_unit,
            fuel_savings_multiplier: settings.fuel_savings_multiplier,
            maintenance_savings_ratio: settings.maintenance_savings_ratio,
        }
    }
}

impl Default for FleetSavingsFormula {
    fn default() -> Self {
        Self::new(FormulaSettings::default())
    }
}

impl SavingsModel for FleetSavingsFormula {
    fn name(&self) -> &str {
        "fleet_linear"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "base_savings_per_unit": self.base_savings_per_unit,
            "fuel_savings_multiplier": self.fuel_savings_multiplier,
            "maintenance_savings_ratio": self.maintenance_savings_ratio,
        })
    }

    fn savings(&self, inputs: &FleetInputs) -> i64 {
        let fleet = f64::from(inputs.fleet_size);
        let fuel_factor = inputs.fuel_cost * self.fuel_savings_multiplier;
        let maintenance_factor = inputs.maintenance as f64 * self.maintenance_savings_ratio;

        round_half_up(fleet * self.base_savings_per_unit + fleet * fuel_factor + maintenance_factor)
    }
}
