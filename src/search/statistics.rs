// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters over the whole counting run. Workers increment them
//! concurrently, so the slots are atomics with relaxed ordering; the totals
//! are only read after the workers have joined.

use std::sync::atomic::{AtomicU64, Ordering};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counter {
    RootsProcessed,
    RecursiveCalls,
    AbandonedBranches,
}

#[derive(Debug)]
pub struct SearchStatistics {
    stats: [AtomicU64; Counter::COUNT],
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            stats: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&self, counter: Counter) {
        self.stats[counter as usize].fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize].load(Ordering::Relaxed)
    }
}
