// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cutset counting engine.
//!
//! # Architecture
//!
//! For each row of the reduced matrix (the "root" cutset) the engine counts,
//! per target cardinality, the knockout sets that contain the root and are
//! attributed to it. Attribution is canonical: a knockout set containing
//! several cutsets is counted only for the earliest qualifying row, so the
//! per-root tables can simply be summed.
//!
//! The recursion maintains two disjoint reaction sets: `active`, the union
//! of the rows combined so far (these reactions are fixed in), and `stored`,
//! reactions that must stay out because adding any of them would complete an
//! earlier row and hand the knockout set to that row instead. Free choices
//! over the remaining reactions give a closed-form `choose` count; earlier
//! rows that are still completable in more than one way are handled by a
//! nested call whose counts are subtracted.

mod statistics;

pub use statistics::{Counter, SearchStatistics};

use crate::combinatorics::choose;
use crate::errors::EngineError;
use crate::matrix::ReducedMatrix;
use crate::reactions::ReactionSet;

/// Per-root counts, indexed by target cardinality minus one.
pub type CountTable = Vec<u64>;

/// A counting pass over one reduced matrix.
///
/// Holds only shared read-only state, so one instance can serve all
/// workers.
pub struct CutsetSearch<'a> {
    matrix: &'a ReducedMatrix,
    max_cardinality: usize,
    stats: &'a SearchStatistics,
}

impl<'a> CutsetSearch<'a> {
    pub fn new(
        matrix: &'a ReducedMatrix,
        max_cardinality: usize,
        stats: &'a SearchStatistics,
    ) -> Self {
        Self {
            matrix,
            max_cardinality,
            stats,
        }
    }

    /// Count the knockout sets attributed to the given root row.
    ///
    /// Slot d-1 of the returned table holds the number of attributed sets
    /// of cardinality d.
    pub fn count_root(&self, root: usize) -> Result<CountTable, EngineError> {
        self.stats.increment(Counter::RootsProcessed);
        let mut table = vec![0u64; self.max_cardinality];
        let stored = ReactionSet::empty(self.matrix.reaction_count());
        self.combine(
            root,
            &self.matrix.rows()[root].members,
            &stored,
            &mut table,
            false,
        )?;
        Ok(table)
    }

    fn combine(
        &self,
        index: usize,
        active: &ReactionSet,
        stored: &ReactionSet,
        out: &mut [u64],
        nested: bool,
    ) -> Result<(), EngineError> {
        self.stats.increment(Counter::RecursiveCalls);
        let rows = self.matrix.rows();

        let comb_active = active.union(&rows[index].members);
        // slot c of a count table is for cardinality c + 1
        let comb_card = comb_active.count() - 1;
        let mut comb_stored = stored.clone();

        // Scan the earlier rows. A row needing exactly one more reaction
        // forbids that reaction; a row already inside the active set means
        // every extension belongs to that row, so this branch counts
        // nothing. Rows needing several reactions are revisited below once
        // `comb_stored` is final.
        let mut pending: Vec<usize> = Vec::new();
        let mut found_subset = false;
        for li in 0..index {
            if !rows[li].members.intersects(&comb_stored) {
                match rows[li].members.count_not_in(&comb_active) {
                    0 => {
                        found_subset = true;
                        break;
                    }
                    1 => {
                        if let Some(r) = rows[li].members.first_not_in(&comb_active) {
                            comb_stored.insert(r);
                        }
                    }
                    _ => pending.push(li),
                }
            }
        }
        if found_subset {
            self.stats.increment(Counter::AbandonedBranches);
            return Ok(());
        }

        debug_assert!(!comb_active.intersects(&comb_stored));
        let dof =
            self.matrix.reaction_count() - comb_active.count() - comb_stored.count();

        let mut comb_table = vec![0u64; self.max_cardinality];
        for c in comb_card..self.max_cardinality {
            comb_table[c] = choose(dof as u64, (c - comb_card) as u64);
        }

        if comb_card + 1 < self.max_cardinality && comb_table[comb_card + 1] > 0 {
            for &li in &pending {
                if !rows[li].members.intersects(&comb_stored) {
                    if rows[li].members.count_not_in(&comb_active) > 1 {
                        self.combine(li, &comb_active, &comb_stored, &mut comb_table, true)?;
                    } else {
                        return Err(EngineError::AlgorithmInvariant(format!(
                            "pending row {} became completable in at most one way",
                            li
                        )));
                    }
                }
            }
        }

        if nested {
            for c in comb_card..self.max_cardinality {
                out[c] = out[c].saturating_sub(comb_table[c]);
            }
        } else {
            out[comb_card..self.max_cardinality]
                .copy_from_slice(&comb_table[comb_card..self.max_cardinality]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{reduce, McsFamily};

    fn tables_for(
        reaction_count: usize,
        rows: &[&[usize]],
        max_cardinality: usize,
    ) -> Vec<CountTable> {
        let family = McsFamily::from_rows(reaction_count, rows);
        let reduced = reduce(&family, max_cardinality);
        let stats = SearchStatistics::new();
        let search = CutsetSearch::new(&reduced, max_cardinality, &stats);
        (0..reduced.rows().len())
            .map(|i| search.count_root(i).unwrap())
            .collect()
    }

    #[test]
    fn test_single_row_counts_free_extensions() {
        // one cutset {0,1} over 4 reactions: for each d, choose(2, d-2)
        let tables = tables_for(4, &[&[0, 1]], 4);
        assert_eq!(tables, vec![vec![0, 1, 2, 1]]);
    }

    #[test]
    fn test_overlapping_rows_share_canonically() {
        // {0,1} and {0,2} over 4 reactions
        let tables = tables_for(4, &[&[0, 1], &[0, 2]], 4);
        // row 0 keeps all its extensions
        assert_eq!(tables[0], vec![0, 1, 2, 1]);
        // row 1 must avoid completing row 0: reaction 1 is forbidden
        assert_eq!(tables[1], vec![0, 1, 1, 0]);

        // summed with cardinality totals: d=2 -> 2, d=3 -> 3, d=4 -> 1
        let sums: Vec<u64> = (0..4).map(|c| tables.iter().map(|t| t[c]).sum()).collect();
        assert_eq!(sums, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_contained_extension_abandoned() {
        // {0,1} and {0,1,2}: every extension of row 1 contains row 0,
        // so row 1 contributes nothing
        let tables = tables_for(4, &[&[0, 1], &[0, 1, 2]], 4);
        assert_eq!(tables[1], vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_bounded_cardinality_truncates_tables() {
        // disjoint rows: their union is wider than the bound, so no
        // knockout set within the bound contains both and nothing is
        // subtracted
        let tables = tables_for(5, &[&[0, 1], &[2, 3]], 3);
        assert_eq!(tables[0], vec![0, 1, 3]);
        assert_eq!(tables[1], vec![0, 1, 3]);
    }

    #[test]
    fn test_statistics_recorded() {
        let family = McsFamily::from_rows(4, &[&[0, 1], &[0, 2]]);
        let reduced = reduce(&family, 4);
        let stats = SearchStatistics::new();
        let search = CutsetSearch::new(&reduced, 4, &stats);
        for i in 0..reduced.rows().len() {
            search.count_root(i).unwrap();
        }
        assert_eq!(stats.get(Counter::RootsProcessed), 2);
        assert!(stats.get(Counter::RecursiveCalls) >= 2);
    }
}
