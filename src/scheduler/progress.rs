// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Progress reporting for long-running cardinality groups.
//!
//! The engine drives a [`Progress`] implementation through one
//! begin/tick/end cycle per group. Ticks come from every worker, so an
//! implementation must be cheap under contention; the terminal bar simply
//! drops a tick when another worker is mid-update.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

/// Receiver for group lifecycle events and per-root ticks.
pub trait Progress: Sync {
    fn begin_group(&self, cardinality: usize, total_roots: u64);
    fn tick(&self);
    fn end_group(&self);
}

/// Discards all progress events.
pub struct NoProgress;

impl Progress for NoProgress {
    fn begin_group(&self, _cardinality: usize, _total_roots: u64) {}
    fn tick(&self) {}
    fn end_group(&self) {}
}

/// A terminal progress bar on stderr.
///
/// Updates are best effort: a tick that cannot take the display lock adds
/// to a pending count, and the next tick that can take it flushes the
/// backlog.
pub struct TerminalProgress {
    bar: Mutex<Option<ProgressBar>>,
    pending: Mutex<u64>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            pending: Mutex::new(0),
        }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for TerminalProgress {
    fn begin_group(&self, cardinality: usize, total_roots: u64) {
        let bar = ProgressBar::new(total_roots);
        bar.set_style(
            ProgressStyle::with_template(
                "[{bar:80}] {percent:>3}% ({eta} left, cutsets of {msg})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
        );
        bar.set_message(format!("cardinality {cardinality}"));
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
        if let Ok(mut pending) = self.pending.lock() {
            *pending = 0;
        }
    }

    fn tick(&self) {
        // never block a worker on the display
        let Ok(mut pending) = self.pending.try_lock() else {
            return;
        };
        *pending += 1;
        if let Ok(slot) = self.bar.try_lock() {
            if let Some(bar) = slot.as_ref() {
                bar.inc(*pending);
                *pending = 0;
            }
        }
    }

    fn end_group(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}
