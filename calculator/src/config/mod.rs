pub mod settings;

pub use settings::{AnimationSettings, CalculatorSettings, FormulaSettings, InputPolicy};
