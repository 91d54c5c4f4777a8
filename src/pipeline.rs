// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The full run: reduce, count, aggregate, weight.

use log::{debug, info};

use crate::combinatorics::choose;
use crate::config::RunConfig;
use crate::errors::EngineError;
use crate::matrix::{reduce, McsFamily};
use crate::probability::{total_cutsets, CardinalityRow, FailureReport};
use crate::scheduler::{GroupScheduler, Progress};
use crate::search::{CountTable, Counter, SearchStatistics};

/// Run the complete analysis over a loaded cutset family.
///
/// Knockout counts are processed in ascending order; the counting engine
/// runs once per cardinality group, and each group's aggregation uses the
/// tables of all smaller groups.
///
/// `weight(lambda, d)` maps a knockout count to its probability mass; the
/// shipped choice is [`crate::probability::poisson_weight`].
pub fn run_pipeline<W>(
    family: &McsFamily,
    config: &RunConfig,
    progress: &dyn Progress,
    weight: W,
) -> Result<FailureReport, EngineError>
where
    W: Fn(f64, usize) -> f64,
{
    let reaction_count = family.reaction_count();
    let max_cardinality = config.resolve(reaction_count)?;

    let matrix = reduce(family, max_cardinality);
    info!(
        "loaded {} cutsets over {} reactions, {} rows left after reduction over {} columns",
        family.rows().len(),
        reaction_count,
        matrix.rows().len(),
        matrix.reaction_count()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .build()
        .map_err(|e| EngineError::WorkerPool(e.to_string()))?;

    let stats = SearchStatistics::new();
    let scheduler = GroupScheduler::new(&matrix, max_cardinality, config.worker_count, &stats);
    let mut tables = vec![CountTable::new(); matrix.rows().len()];

    let mut rows = Vec::with_capacity(max_cardinality);
    let mut total_weighted_failure = 0.0;
    let mut residual_weight = 1.0 - (-config.lambda).exp();

    for d in 1..=max_cardinality {
        if d >= 2 {
            scheduler.run_group(d, &pool, progress, &mut tables)?;
        }

        let cutsets = total_cutsets(d, reaction_count, family.histogram(), &matrix, &tables);
        let possible = choose(reaction_count as u64, d as u64);
        let failure_probability = cutsets as f64 / possible as f64;
        let mass = weight(config.lambda, d);
        let weighted_failure = mass * failure_probability;

        total_weighted_failure += weighted_failure;
        residual_weight -= mass;

        info!(
            "d={}: {} of {} knockout sets disable the network (P(f) = {:.8})",
            d, cutsets, possible, failure_probability
        );
        rows.push(CardinalityRow {
            reaction_count,
            knockouts: d,
            weighted_failure,
            failure_probability,
            total_cutsets: cutsets,
            possible_cutsets: possible,
        });
    }

    debug!(
        "search statistics: {} roots, {} recursive calls, {} abandoned branches",
        stats.get(Counter::RootsProcessed),
        stats.get(Counter::RecursiveCalls),
        stats.get(Counter::AbandonedBranches)
    );

    // a small negative residual is floating-point noise from the weight sum
    Ok(FailureReport {
        lambda: config.lambda,
        rows,
        total_weighted_failure,
        residual_weight: residual_weight.max(0.0),
    })
}
