// Display animation: easing curves, tweens and the savings counter
pub mod counter;
pub mod easing;
pub mod tween;

pub use counter::{AnimationHandle, AnimatorState, CounterAnimator, Frame};
pub use easing::Easing;
pub use tween::Tween;
