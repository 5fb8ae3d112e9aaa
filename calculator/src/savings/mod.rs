// Savings models
pub mod fleet_formula;

pub use fleet_formula::FleetSavingsFormula;

use serde_json::Value;
use shared::models::FleetInputs;

// Common trait for anything that can turn the card inputs into annual savings
pub trait SavingsModel {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value;
    fn savings(&self, inputs: &FleetInputs) -> i64;
}

/// Rounds half-way cases toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
