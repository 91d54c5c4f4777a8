// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of a cutset family to the matrix the engine searches.

use crate::matrix::{Mcs, McsFamily};
use crate::reactions::ReactionSet;

/// The reduced, cardinality-sorted cutset matrix.
///
/// Single-reaction cutsets and their columns are gone, as are rows wider
/// than the knockout bound. Rows are grouped by ascending cardinality,
/// keeping the input order inside each group, so the per-cardinality groups
/// form contiguous index ranges.
#[derive(Debug)]
pub struct ReducedMatrix {
    reaction_count: usize,
    rows: Vec<Mcs>,
    /// First row index per cardinality; slot d holds the start of group d.
    start: Vec<usize>,
}

impl ReducedMatrix {
    /// Number of surviving reaction columns.
    pub fn reaction_count(&self) -> usize {
        self.reaction_count
    }

    pub fn rows(&self) -> &[Mcs] {
        &self.rows
    }

    /// Index of the first row of the given cardinality.
    ///
    /// Cardinalities below the smallest retained group map to 0, beyond the
    /// largest to the row count, so `start_of(d)..start_of(d + 1)` is always
    /// a valid range.
    pub fn start_of(&self, cardinality: usize) -> usize {
        if cardinality < self.start.len() {
            self.start[cardinality]
        } else {
            self.rows.len()
        }
    }

    /// The contiguous group of rows with exactly `cardinality` members.
    pub fn rows_of(&self, cardinality: usize) -> &[Mcs] {
        &self.rows[self.start_of(cardinality)..self.start_of(cardinality + 1)]
    }
}

/// Reduce a family for a run bounded at `max_cardinality` knockouts.
pub fn reduce(family: &McsFamily, max_cardinality: usize) -> ReducedMatrix {
    let n = family.reaction_count();

    // Columns covered by single-reaction cutsets disappear entirely; any
    // knockout set containing such a reaction is already a cutset and is
    // accounted for in closed form.
    let mut single_ko_cols = ReactionSet::empty(n);
    for row in family.rows() {
        if row.cardinality == 1 {
            single_ko_cols.union_with(&row.members);
        }
    }
    let left_cols: Vec<usize> = (0..n).filter(|&c| !single_ko_cols.contains(c)).collect();
    let reaction_count = left_cols.len();

    let mut rows = Vec::new();
    let mut start = vec![0usize; (max_cardinality + 1).min(2)];
    for cardinality in 2..=max_cardinality {
        start.push(rows.len());
        for row in family.rows() {
            if row.cardinality == cardinality {
                let mut members = ReactionSet::empty(reaction_count);
                for (k, &col) in left_cols.iter().enumerate() {
                    if row.members.contains(col) {
                        members.insert(k);
                    }
                }
                rows.push(Mcs {
                    members,
                    cardinality,
                });
            }
        }
    }

    ReducedMatrix {
        reaction_count,
        rows,
        start,
    }
}
