use serde::{Deserialize, Serialize};

/// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
/// Every curve here is monotonic and fixes both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic deceleration, `1 - (1 - t)^3`.
    EaseOut,
    /// Circular deceleration, `sqrt(1 - (1 - t)^2)`.
    #[default]
    CircOut,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::CircOut => (1.0 - (1.0 - t).powi(2)).sqrt(),
        }
    }

    /// Closest CSS timing function, for transitions the browser runs itself.
    pub fn css_timing_function(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::CircOut => "cubic-bezier(0, 0.55, 0.45, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOut, Easing::CircOut];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = easing.apply(step as f64 / 100.0);
                assert!(value >= previous, "{:?} decreased at step {}", easing, step);
                previous = value;
            }
        }
    }

    #[test]
    fn test_decelerating_curves_lead_linear() {
        assert!(Easing::CircOut.apply(0.25) > 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        // Most of the distance is covered in the first half.
        assert!(Easing::CircOut.apply(0.5) > 0.8);
    }
}
