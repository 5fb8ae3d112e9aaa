// Animated currency counter.
//
// Idle --retarget--> Animating --(duration elapsed)--> Idle
// Animating --retarget--> Animating, restarted from the text on screen.
use std::time::{Duration, Instant};

use shared::utils::currency::{format_currency, parse_display_digits};

use super::easing::Easing;
use super::tween::Tween;
use crate::config::AnimationSettings;
use crate::savings::round_half_up;

/// Identifies one run of the animator. A frame loop holding a handle that is
/// no longer current has been superseded and must stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Animating,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub handle: AnimationHandle,
    pub value: i64,
    pub text: String,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveAnimation {
    handle: AnimationHandle,
    target: i64,
    tween: Tween,
    started_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    displayed_text: String,
    duration: Duration,
    easing: Easing,
    active: Option<ActiveAnimation>,
    next_handle: u64,
}

impl CounterAnimator {
    pub fn new(initial: i64, settings: &AnimationSettings) -> Self {
        Self {
            displayed_text: format_currency(initial),
            duration: settings.duration(),
            easing: settings.easing,
            active: None,
            next_handle: 0,
        }
    }

    pub fn state(&self) -> AnimatorState {
        if self.active.is_some() {
            AnimatorState::Animating
        } else {
            AnimatorState::Idle
        }
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// The number currently on screen, read back from the display text.
    pub fn displayed_value(&self) -> i64 {
        parse_display_digits(&self.displayed_text)
    }

    pub fn target(&self) -> Option<i64> {
        self.active.as_ref().map(|a| a.target)
    }

    pub fn current_handle(&self) -> Option<AnimationHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    pub fn is_current(&self, handle: AnimationHandle) -> bool {
        self.current_handle() == Some(handle)
    }

    /// Starts animating toward `target` from whatever is displayed now,
    /// abandoning any animation in flight. Returns `None` when the display
    /// already shows `target` and no frames are needed.
    pub fn retarget(&mut self, target: i64, now: Instant) -> Option<AnimationHandle> {
        let from = self.displayed_value();

        if let Some(previous) = self.active.take() {
            tracing::debug!(
                "Superseding counter animation toward {} at {}",
                previous.target,
                self.displayed_text
            );
        }

        if from == target {
            self.displayed_text = format_currency(target);
            return None;
        }

        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;

        tracing::debug!("Animating savings {} -> {} over {:?}", from, target, self.duration);
        self.active = Some(ActiveAnimation {
            handle,
            target,
            tween: Tween::new(from as f64, target as f64, self.duration, self.easing),
            started_at: now,
        });
        Some(handle)
    }

    /// Advances the animation to `now` and updates the display text.
    /// Returns `None` while idle.
    pub fn tick(&mut self, now: Instant) -> Option<Frame> {
        let active = self.active.as_ref()?;
        let elapsed = now.saturating_duration_since(active.started_at);
        let finished = active.tween.is_finished(elapsed);
        let value = if finished {
            active.target
        } else {
            round_half_up(active.tween.sample(elapsed))
        };
        let handle = active.handle;

        self.displayed_text = format_currency(value);
        tracing::trace!("Counter frame {:?}: {}", elapsed, self.displayed_text);

        if finished {
            self.active = None;
        }

        Some(Frame {
            handle,
            value,
            text: self.displayed_text.clone(),
            finished,
        })
    }

    /// Stops the animation identified by `handle`, leaving the last frame on
    /// screen. Returns false if that animation is no longer running.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        if self.is_current(handle) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Stops whatever is in flight. Used on teardown.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("Counter animation stopped at {}", self.displayed_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn animator(initial: i64) -> CounterAnimator {
        CounterAnimator::new(initial, &AnimationSettings::default())
    }

    #[test]
    fn test_starts_idle_with_formatted_seed() {
        let counter = animator(248_500);
        assert_eq!(counter.state(), AnimatorState::Idle);
        assert_eq!(counter.displayed_text(), "$248,500");
        assert_eq!(counter.displayed_value(), 248_500);
    }

    #[test]
    fn test_tick_while_idle_yields_nothing() {
        let mut counter = animator(10);
        assert!(counter.tick(Instant::now()).is_none());
    }

    #[test]
    fn test_reaches_target_exactly() {
        let mut counter = animator(100_000);
        let t0 = Instant::now();
        let handle = counter.retarget(200_000, t0).unwrap();
        assert_eq!(counter.state(), AnimatorState::Animating);

        let frame = counter.tick(t0 + ms(800)).unwrap();
        assert_eq!(frame.handle, handle);
        assert_eq!(frame.value, 200_000);
        assert_eq!(frame.text, "$200,000");
        assert!(frame.finished);
        assert_eq!(counter.state(), AnimatorState::Idle);
        assert!(counter.tick(t0 + ms(900)).is_none());
    }

    #[test]
    fn test_upward_frames_are_non_decreasing() {
        let mut counter = animator(100_000);
        let t0 = Instant::now();
        counter.retarget(200_000, t0);

        let mut previous = 100_000;
        for step in 0..=60 {
            let frame = counter.tick(t0 + ms(step * 16)).unwrap();
            assert!(frame.value >= previous);
            assert!(frame.value <= 200_000);
            previous = frame.value;
            if frame.finished {
                break;
            }
        }
        assert_eq!(previous, 200_000);
    }

    #[test]
    fn test_downward_frames_are_non_increasing() {
        let mut counter = animator(248_500);
        let t0 = Instant::now();
        counter.retarget(239_990, t0);

        let mut previous = 248_500;
        let mut step = 0;
        loop {
            let frame = counter.tick(t0 + ms(step * 16)).unwrap();
            assert!(frame.value <= previous);
            previous = frame.value;
            step += 1;
            if frame.finished {
                break;
            }
        }
        assert_eq!(counter.displayed_text(), "$239,990");
    }

    #[test]
    fn test_superseding_restarts_from_displayed_value() {
        let mut counter = animator(100_000);
        let t0 = Instant::now();
        let first = counter.retarget(200_000, t0).unwrap();
        let mid = counter.tick(t0 + ms(400)).unwrap();
        assert!(mid.value > 100_000 && mid.value < 200_000);

        let change_at = t0 + ms(400);
        let second = counter.retarget(50_000, change_at).unwrap();
        assert_ne!(first, second);
        assert!(!counter.is_current(first));
        assert_eq!(counter.target(), Some(50_000));

        // Nothing after the change may move toward the abandoned 200000.
        let mut previous = mid.value;
        for step in 0..=60 {
            let frame = counter.tick(change_at + ms(step * 16)).unwrap();
            assert_eq!(frame.handle, second);
            assert!(frame.value <= previous);
            previous = frame.value;
            if frame.finished {
                break;
            }
        }
        assert_eq!(previous, 50_000);
    }

    #[test]
    fn test_first_frame_after_supersede_continues_from_screen() {
        let mut counter = animator(0);
        let t0 = Instant::now();
        counter.retarget(1_000, t0);
        let shown = counter.tick(t0 + ms(200)).unwrap().value;

        counter.retarget(2_000, t0 + ms(200));
        let frame = counter.tick(t0 + ms(200)).unwrap();
        assert_eq!(frame.value, shown);
    }

    #[test]
    fn test_retarget_to_displayed_value_settles() {
        let mut counter = animator(5_000);
        assert!(counter.retarget(5_000, Instant::now()).is_none());
        assert_eq!(counter.state(), AnimatorState::Idle);
        assert_eq!(counter.displayed_text(), "$5,000");
    }

    #[test]
    fn test_cancel_only_matches_current_handle() {
        let mut counter = animator(0);
        let t0 = Instant::now();
        let stale = counter.retarget(10, t0).unwrap();
        let live = counter.retarget(20, t0).unwrap();

        assert!(!counter.cancel(stale));
        assert_eq!(counter.state(), AnimatorState::Animating);
        assert!(counter.cancel(live));
        assert_eq!(counter.state(), AnimatorState::Idle);
    }

    #[test]
    fn test_stop_freezes_last_frame() {
        let mut counter = animator(0);
        let t0 = Instant::now();
        counter.retarget(100_000, t0);
        let frame = counter.tick(t0 + ms(100)).unwrap();
        counter.stop();

        assert_eq!(counter.state(), AnimatorState::Idle);
        assert_eq!(counter.displayed_text(), frame.text);
        assert!(counter.tick(t0 + ms(2_000)).is_none());
    }

    #[test]
    fn test_negative_target_formats_with_sign() {
        let mut counter = animator(100);
        let t0 = Instant::now();
        counter.retarget(-100, t0);
        let frame = counter.tick(t0 + ms(800)).unwrap();
        assert_eq!(frame.text, "$-100");
        // The sign is lost when the text is read back.
        assert_eq!(counter.displayed_value(), 100);
    }
}
