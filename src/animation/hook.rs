// src/animation/hook.rs

use crate::animation::ticker::{Tick, Ticker};
use crate::animation::typewriter::Typewriter;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Pitch typed out next to the "Arkhived" nav entry.
pub const HOOK_TEXT: &str = "Most investors are fighting over the same 1% of public listings, but the real wealth is hidden in the other 99%. Arkhived was built to give you a direct line to off-market opportunities before they ever hit the mainstream—it’s real estate’s best-kept secrets, Arkhived for you.";

pub const DEFAULT_TICK: Duration = Duration::from_millis(12);

/// What the tooltip should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookFrame {
    pub typed: String,
    pub visible: bool,
    pub caret: bool,
}

/// Drives the nav tooltip for one session. The ticker writes into the
/// shared typewriter; renders read a snapshot.
pub struct HookPlayer {
    typewriter: Arc<Mutex<Typewriter>>,
    ticker: Ticker,
    interval: Duration,
}

impl HookPlayer {
    pub fn new(interval: Duration) -> Self {
        Self {
            typewriter: Arc::new(Mutex::new(Typewriter::new(HOOK_TEXT))),
            ticker: Ticker::new(),
            interval,
        }
    }

    /// Restart from an empty prefix. Any running ticker is cancelled first.
    pub fn start(&mut self) {
        self.ticker.stop();
        if let Ok(mut tw) = self.typewriter.lock() {
            tw.start();
        }

        let typewriter = Arc::clone(&self.typewriter);
        self.ticker.start(self.interval, move || {
            let Ok(mut tw) = typewriter.lock() else {
                return Tick::Done;
            };
            if tw.tick() {
                Tick::Continue
            } else {
                Tick::Done
            }
        });
        tracing::debug!(interval_ms = self.interval.as_millis() as u64, "hook animation started");
    }

    pub fn stop(&mut self) {
        let was_running = self.ticker.stop();
        if let Ok(mut tw) = self.typewriter.lock() {
            tw.stop();
        }
        tracing::debug!(was_running, "hook animation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn frame(&self) -> HookFrame {
        match self.typewriter.lock() {
            Ok(tw) => HookFrame {
                typed: tw.typed().to_string(),
                visible: tw.is_visible(),
                caret: tw.show_caret(),
            },
            Err(_) => HookFrame {
                typed: String::new(),
                visible: false,
                caret: false,
            },
        }
    }
}

impl std::fmt::Debug for HookPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookPlayer")
            .field("running", &self.is_running())
            .field("interval", &self.interval)
            .finish()
    }
}
