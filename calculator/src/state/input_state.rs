// Input State Holder: the three card inputs plus the savings derived from them.
// Every setter recomputes synchronously and notifies observers when the
// savings figure actually changed.
use std::fmt;

use shared::models::{FleetInputs, FleetSizeBounds};

use crate::config::{CalculatorSettings, InputPolicy};
use crate::error::InputError;
use crate::input::{lenient, strict};
use crate::savings::{FleetSavingsFormula, SavingsModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Last rejected value per field. Only populated under `InputPolicy::Strict`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub fleet_size: Option<InputError>,
    pub fuel_cost: Option<InputError>,
    pub maintenance: Option<InputError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.fleet_size.is_none() && self.fuel_cost.is_none() && self.maintenance.is_none()
    }
}

type Observer = Box<dyn FnMut(i64)>;

pub struct InputState<M: SavingsModel = FleetSavingsFormula> {
    inputs: FleetInputs,
    savings: i64,
    model: M,
    bounds: FleetSizeBounds,
    policy: InputPolicy,
    errors: FieldErrors,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl InputState<FleetSavingsFormula> {
    pub fn from_settings(settings: &CalculatorSettings) -> Self {
        Self::with_model(
            FleetSavingsFormula::new(settings.formula),
            settings.defaults,
            settings.fleet_size_range,
            settings.input_policy,
        )
    }
}

impl Default for InputState<FleetSavingsFormula> {
    fn default() -> Self {
        Self::from_settings(&CalculatorSettings::default())
    }
}

impl<M: SavingsModel> InputState<M> {
    pub fn with_model(model: M, defaults: FleetInputs, bounds: FleetSizeBounds, policy: InputPolicy) -> Self {
        let inputs = FleetInputs {
            fleet_size: bounds.clamp(defaults.fleet_size),
            ..defaults
        };
        let savings = model.savings(&inputs);
        Self {
            inputs,
            savings,
            model,
            bounds,
            policy,
            errors: FieldErrors::default(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn inputs(&self) -> FleetInputs {
        self.inputs
    }

    pub fn fleet_size(&self) -> u32 {
        self.inputs.fleet_size
    }

    pub fn fuel_cost(&self) -> f64 {
        self.inputs.fuel_cost
    }

    pub fn maintenance(&self) -> i64 {
        self.inputs.maintenance
    }

    /// Derived annual savings for the current inputs.
    pub fn savings(&self) -> i64 {
        self.savings
    }

    pub fn bounds(&self) -> FleetSizeBounds {
        self.bounds
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Registers a callback invoked with the new savings after each mutation
    /// that changes it.
    pub fn subscribe(&mut self, observer: impl FnMut(i64) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Sets the fleet size. Out-of-range values are clamped under
    /// `Coerce` and rejected under `Strict`.
    pub fn set_fleet_size(&mut self, value: u32) -> Result<(), InputError> {
        let accepted = match self.policy {
            InputPolicy::Coerce => Ok(self.bounds.clamp(value)),
            InputPolicy::Strict => strict::check_fleet_size(value, self.bounds),
        };
        let accepted = self.record(accepted, |errors| &mut errors.fleet_size)?;
        self.inputs.fleet_size = accepted;
        self.recompute();
        Ok(())
    }

    /// Applies the raw value of the fleet size slider.
    pub fn set_fleet_size_text(&mut self, raw: &str) -> Result<(), InputError> {
        let parsed = match self.policy {
            InputPolicy::Coerce => Ok(lenient::parse_fleet_size(raw, self.bounds)),
            InputPolicy::Strict => strict::parse_fleet_size(raw, self.bounds),
        };
        let value = self.record(parsed, |errors| &mut errors.fleet_size)?;
        self.inputs.fleet_size = value;
        self.recompute();
        Ok(())
    }

    pub fn set_fuel_cost(&mut self, value: f64) -> Result<(), InputError> {
        let accepted = match (self.policy, value.is_finite()) {
            (_, true) => Ok(value),
            (InputPolicy::Coerce, false) => Ok(0.0),
            (InputPolicy::Strict, false) => Err(InputError::InvalidFuelCost(value.to_string())),
        };
        let value = self.record(accepted, |errors| &mut errors.fuel_cost)?;
        self.inputs.fuel_cost = value;
        self.recompute();
        Ok(())
    }

    /// Applies the raw text of the fuel cost field.
    pub fn set_fuel_cost_text(&mut self, raw: &str) -> Result<(), InputError> {
        let parsed = match self.policy {
            InputPolicy::Coerce => Ok(lenient::parse_fuel_cost(raw)),
            InputPolicy::Strict => strict::parse_fuel_cost(raw),
        };
        let value = self.record(parsed, |errors| &mut errors.fuel_cost)?;
        self.inputs.fuel_cost = value;
        self.recompute();
        Ok(())
    }

    pub fn set_maintenance(&mut self, value: i64) -> Result<(), InputError> {
        self.errors.maintenance = None;
        self.inputs.maintenance = value;
        self.recompute();
        Ok(())
    }

    /// Applies the raw text of the maintenance field; `,` separators are
    /// ignored.
    pub fn set_maintenance_text(&mut self, raw: &str) -> Result<(), InputError> {
        let parsed = match self.policy {
            InputPolicy::Coerce => Ok(lenient::parse_maintenance(raw)),
            InputPolicy::Strict => strict::parse_maintenance(raw),
        };
        let value = self.record(parsed, |errors| &mut errors.maintenance)?;
        self.inputs.maintenance = value;
        self.recompute();
        Ok(())
    }

    fn record<T>(
        &mut self,
        result: Result<T, InputError>,
        field: impl FnOnce(&mut FieldErrors) -> &mut Option<InputError>,
    ) -> Result<T, InputError> {
        let slot = field(&mut self.errors);
        match result {
            Ok(value) => {
                *slot = None;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!("Rejected input: {}", err);
                *slot = Some(err.clone());
                Err(err)
            }
        }
    }

    fn recompute(&mut self) {
        let savings = self.model.savings(&self.inputs);
        if savings == self.savings {
            return;
        }
        tracing::debug!(
            "Savings recomputed: {} -> {} (fleet={}, fuel={}, maintenance={})",
            self.savings,
            savings,
            self.inputs.fleet_size,
            self.inputs.fuel_cost,
            self.inputs.maintenance
        );
        self.savings = savings;
        for (_, observer) in self.observers.iter_mut() {
            observer(savings);
        }
    }
}

impl<M: SavingsModel + fmt::Debug> fmt::Debug for InputState<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputState")
            .field("inputs", &self.inputs)
            .field("savings", &self.savings)
            .field("model", &self.model)
            .field("bounds", &self.bounds)
            .field("policy", &self.policy)
            .field("errors", &self.errors)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn default_state() -> InputState {
        InputState::default()
    }

    fn strict_state() -> InputState {
        let settings = CalculatorSettings {
            input_policy: InputPolicy::Strict,
            ..CalculatorSettings::default()
        };
        InputState::from_settings(&settings)
    }

    #[test]
    fn test_defaults_derive_savings() {
        let state = default_state();
        assert_eq!(state.fleet_size(), 124);
        assert_eq!(state.fuel_cost(), 3.85);
        assert_eq!(state.maintenance(), 12_500);
        assert_eq!(state.savings(), 239_990);
    }

    #[test]
    fn test_setters_recompute_synchronously() {
        let mut state = default_state();
        state.set_fleet_size(10).unwrap();
        // 10*1500 + 10*385 + 6250
        assert_eq!(state.savings(), 25_100);
        state.set_maintenance(0).unwrap();
        assert_eq!(state.savings(), 18_850);
        state.set_fuel_cost(0.0).unwrap();
        assert_eq!(state.savings(), 15_000);
    }

    #[test]
    fn test_invalid_fuel_text_coerces_to_zero() {
        let mut state = default_state();
        state.set_fuel_cost_text("not a number").unwrap();
        assert_eq!(state.fuel_cost(), 0.0);
        // 124*1500 + 0 + 6250
        assert_eq!(state.savings(), 192_250);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_maintenance_text_strips_commas() {
        let mut state = default_state();
        state.set_maintenance_text("20,000").unwrap();
        assert_eq!(state.maintenance(), 20_000);
        state.set_maintenance_text("12,500").unwrap();
        assert_eq!(state.maintenance(), 12_500);
        state.set_maintenance_text("oops").unwrap();
        assert_eq!(state.maintenance(), 0);
    }

    #[test]
    fn test_fleet_size_clamped_under_coerce() {
        let mut state = default_state();
        state.set_fleet_size(0).unwrap();
        assert_eq!(state.fleet_size(), 1);
        state.set_fleet_size_text("750").unwrap();
        assert_eq!(state.fleet_size(), 500);
    }

    #[test]
    fn test_strict_rejects_and_keeps_previous_value() {
        let mut state = strict_state();
        let err = state.set_fuel_cost_text("abc").unwrap_err();
        assert_eq!(err, InputError::InvalidFuelCost("abc".to_string()));
        assert_eq!(state.fuel_cost(), 3.85);
        assert_eq!(state.savings(), 239_990);
        assert_eq!(state.errors().fuel_cost, Some(err));

        state.set_fuel_cost_text("4").unwrap();
        assert_eq!(state.fuel_cost(), 4.0);
        assert!(state.errors().fuel_cost.is_none());
    }

    #[test]
    fn test_strict_rejects_out_of_range_fleet() {
        let mut state = strict_state();
        assert!(matches!(
            state.set_fleet_size(501),
            Err(InputError::FleetSizeOutOfRange { value: 501, .. })
        ));
        assert_eq!(state.fleet_size(), 124);
        assert!(state.errors().fleet_size.is_some());
    }

    #[test]
    fn test_strict_maintenance_accepts_separators() {
        let mut state = strict_state();
        state.set_maintenance_text("1,000").unwrap();
        assert_eq!(state.maintenance(), 1_000);
        assert!(state.set_maintenance_text("1.5").is_err());
        assert_eq!(state.maintenance(), 1_000);
    }

    #[test]
    fn test_observers_notified_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = default_state();
        let sink = seen.clone();
        state.subscribe(move |savings| sink.borrow_mut().push(savings));

        state.set_fleet_size(124).unwrap(); // unchanged
        state.set_fleet_size(125).unwrap();
        state.set_maintenance_text("12,500").unwrap(); // unchanged

        assert_eq!(*seen.borrow(), vec![241_875]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut state = default_state();
        let sink = count.clone();
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set_fleet_size(1).unwrap();
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_fleet_size(2).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut state = default_state();
        state.set_fuel_cost_text("5.10").unwrap();
        let first = state.savings();
        state.set_fuel_cost_text("5.10").unwrap();
        assert_eq!(state.savings(), first);
    }
}
