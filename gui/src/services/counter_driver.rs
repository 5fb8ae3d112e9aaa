// Runs the savings counter animation on the Dioxus runtime.
//
// Each change of `savings` retargets the animator and spawns a frame loop
// for the new run. The previous loop is cancelled first, and any loop still
// alive when the card unmounts is cancelled in `use_drop`.
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use calculator::config::AnimationSettings;
use calculator::{AnimationHandle, CounterAnimator};
use dioxus::prelude::*;

pub fn use_animated_counter(
    savings: Memo<i64>,
    seed: i64,
    settings: AnimationSettings,
) -> Signal<CounterAnimator> {
    let mut counter = use_signal(|| CounterAnimator::new(seed, &settings));
    let in_flight: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));

    {
        let in_flight = in_flight.clone();
        use_effect(move || {
            let target = savings();

            if let Some(task) = in_flight.take() {
                task.cancel();
            }

            let Some(handle) = counter.write().retarget(target, Instant::now()) else {
                return;
            };
            let task = spawn(run_frames(counter, handle, settings));
            in_flight.set(Some(task));
        });
    }

    use_drop(move || {
        if let Some(task) = in_flight.take() {
            tracing::debug!("Card unmounted, cancelling counter animation");
            task.cancel();
        }
    });

    counter
}

async fn run_frames(mut counter: Signal<CounterAnimator>, handle: AnimationHandle, settings: AnimationSettings) {
    let frame_interval = settings.frame_interval();
    loop {
        let finished = {
            let mut animator = counter.write();
            if !animator.is_current(handle) {
                // Superseded; the newer loop owns the display now.
                break;
            }
            match animator.tick(Instant::now()) {
                Some(frame) => frame.finished,
                None => true,
            }
        };
        if finished {
            break;
        }
        tokio::time::sleep(frame_interval).await;
    }
}
