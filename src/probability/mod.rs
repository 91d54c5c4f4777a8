// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Aggregation of per-root counts into failure probabilities.
//!
//! For each number of simultaneous knockouts d the total cutset count has
//! three parts: the cutsets of cardinality d themselves, a closed-form term
//! for knockout sets hitting a single-reaction cutset, and the attributed
//! extension counts of every smaller cutset. Dividing by the number of
//! possible knockout sets gives the failure probability, which is weighted
//! by the Poisson probability of seeing exactly d knockouts.

mod report;

pub use report::write_report;

use crate::combinatorics::choose;
use crate::matrix::{CardinalityHistogram, ReducedMatrix};
use crate::search::CountTable;

/// Poisson probability of exactly `k` events at rate `lambda`.
///
/// Computed iteratively, factor by factor, so large `k` neither overflows
/// a factorial nor loses the small magnitudes. Over all k >= 1 the weights
/// sum to `1 - exp(-lambda)`.
pub fn poisson_weight(lambda: f64, k: usize) -> f64 {
    let mut weight = (-lambda).exp();
    for i in 1..=k {
        weight *= lambda / i as f64;
    }
    weight
}

/// Total number of knockout sets of cardinality `d` that disable the
/// network.
///
/// `reaction_count` is the width of the original matrix; the trivial term
/// counts sets containing at least one single-reaction cutset by giving the
/// i-th such cutset the sets over the reactions after it, which counts each
/// set exactly once.
pub fn total_cutsets(
    d: usize,
    reaction_count: usize,
    histogram: &CardinalityHistogram,
    matrix: &ReducedMatrix,
    tables: &[CountTable],
) -> u64 {
    let mut total = histogram.of_cardinality(d);
    if d >= 2 {
        let trivial = histogram.of_cardinality(1);
        for i in 0..trivial {
            total += choose(reaction_count as u64 - i - 1, d as u64 - 1);
        }
        for table in tables.iter().take(matrix.start_of(d)) {
            total += table[d - 1];
        }
    }
    total
}

/// One line of the final report: the failure probability at exactly
/// `knockouts` simultaneous knockouts.
#[derive(Debug, Clone)]
pub struct CardinalityRow {
    pub reaction_count: usize,
    pub knockouts: usize,
    pub weighted_failure: f64,
    pub failure_probability: f64,
    pub total_cutsets: u64,
    pub possible_cutsets: u64,
}

/// The complete result of a counting run.
#[derive(Debug, Clone)]
pub struct FailureReport {
    pub lambda: f64,
    pub rows: Vec<CardinalityRow>,
    /// Weighted failure probability summed over all reported knockouts.
    pub total_weighted_failure: f64,
    /// Poisson mass of the knockout counts beyond the bound; an upper
    /// bound on the probability missing from the total.
    pub residual_weight: f64,
}
