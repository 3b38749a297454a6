// src/animation/ticker.rs

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// What a tick callback wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Done,
}

struct RunningTask {
    // Dropping the sender wakes the worker and ends it.
    cancel: Sender<()>,
    handle: JoinHandle<()>,
}

/// A cancellable fixed-interval task. At most one runs per `Ticker`:
/// `start` cancels whatever was running first.
#[derive(Default)]
pub struct Ticker {
    running: Option<RunningTask>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<F>(&mut self, interval: Duration, mut on_tick: F)
    where
        F: FnMut() -> Tick + Send + 'static,
    {
        self.stop();

        let (cancel, cancelled) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match cancelled.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if on_tick() == Tick::Done {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        self.running = Some(RunningTask { cancel, handle });
    }

    /// Cancels the running task, if any, and waits for it to exit.
    /// Returns whether a task was still running.
    pub fn stop(&mut self) -> bool {
        let Some(task) = self.running.take() else {
            return false;
        };
        let was_running = !task.handle.is_finished();

        drop(task.cancel);
        if task.handle.join().is_err() {
            tracing::warn!("ticker task panicked");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
