// Calculator library root: the headless part of the fleet ROI card.

pub mod animation;
pub mod config;
pub mod error;
pub mod input;
pub mod savings;
pub mod state;

pub use animation::{AnimationHandle, AnimatorState, CounterAnimator, Easing, Frame};
pub use config::{CalculatorSettings, InputPolicy};
pub use error::{CalculatorError, InputError};
pub use savings::{FleetSavingsFormula, SavingsModel};
pub use state::InputState;
