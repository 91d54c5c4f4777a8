// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel scheduling of the counting work.
//!
//! Roots are processed one cardinality group at a time, in ascending
//! order; the aggregation step for cardinality d reads only tables of rows
//! with smaller cardinality, so a group must be complete before the next
//! one starts. Inside a group, row `index` goes to worker `index % w`, and
//! each worker collects its finished tables locally so the merge happens
//! once, after the group joins.

mod progress;

pub use progress::{NoProgress, Progress, TerminalProgress};

use rayon::prelude::*;

use crate::errors::EngineError;
use crate::matrix::ReducedMatrix;
use crate::search::{CountTable, CutsetSearch, SearchStatistics};

pub struct GroupScheduler<'a> {
    matrix: &'a ReducedMatrix,
    max_cardinality: usize,
    worker_count: usize,
    stats: &'a SearchStatistics,
}

impl<'a> GroupScheduler<'a> {
    pub fn new(
        matrix: &'a ReducedMatrix,
        max_cardinality: usize,
        worker_count: usize,
        stats: &'a SearchStatistics,
    ) -> Self {
        Self {
            matrix,
            max_cardinality,
            worker_count,
            stats,
        }
    }

    /// Count every root of one cardinality group, writing the per-root
    /// tables into `tables` at the rows' matrix indices.
    pub fn run_group(
        &self,
        cardinality: usize,
        pool: &rayon::ThreadPool,
        progress: &dyn Progress,
        tables: &mut [CountTable],
    ) -> Result<(), EngineError> {
        let start = self.matrix.start_of(cardinality);
        let end = self.matrix.start_of(cardinality + 1);
        if start == end {
            return Ok(());
        }

        progress.begin_group(cardinality, (end - start) as u64);
        let search = CutsetSearch::new(self.matrix, self.max_cardinality, self.stats);
        let worker_count = self.worker_count;

        let per_worker: Result<Vec<Vec<(usize, CountTable)>>, EngineError> =
            pool.install(|| {
                (0..worker_count)
                    .into_par_iter()
                    .map(|worker| {
                        let mut finished = Vec::new();
                        for index in start..end {
                            if index % worker_count == worker {
                                progress.tick();
                                finished.push((index, search.count_root(index)?));
                            }
                        }
                        Ok(finished)
                    })
                    .collect()
            });

        for (index, table) in per_worker?.into_iter().flatten() {
            tables[index] = table;
        }
        progress.end_group();
        Ok(())
    }
}
