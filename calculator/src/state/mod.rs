pub mod input_state;

pub use input_state::{FieldErrors, InputState, ObserverId};
