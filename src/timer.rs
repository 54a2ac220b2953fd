// src/timer.rs

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// One-shot delayed callback for "section complete" style signals.
///
/// The engine never touches timers; a presentation layer starts one when an
/// outcome asks for it (`arm_completion`) and may cancel it, e.g. when the
/// learner navigates away before the delay elapses. Dropping the handle does
/// not cancel: the callback still fires, like a JS `setTimeout` whose id was
/// discarded.
pub struct CompletionTimer {
    cancel_tx: Sender<()>,
}

impl CompletionTimer {
    /// Spawns the timer thread; `callback` runs on it after `delay` unless
    /// `cancel` is called first.
    pub fn start<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        thread::spawn(move || {
            let deadline = Instant::now() + delay;
            match cancel_rx.recv_timeout(delay) {
                Ok(()) => return,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    // Handle dropped without cancelling; wait out the rest
                    // of the delay.
                    let rest = deadline.saturating_duration_since(Instant::now());
                    if !rest.is_zero() {
                        thread::sleep(rest);
                    }
                }
            }
            callback();
        });
        CompletionTimer { cancel_tx }
    }

    /// Stops the pending callback. Harmless when the timer already fired.
    pub fn cancel(self) {
        let _ = self.cancel_tx.send(());
    }
}
