// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal cutset families: file loading and matrix reduction.
//!
//! # Architecture
//!
//! The input is a rectangular 0/1 matrix, one minimal cutset per row, one
//! column per reaction. Loading produces an [`McsFamily`] together with a
//! [`CardinalityHistogram`]. Before the counting engine runs, the family is
//! reduced: single-reaction cutsets are pulled out (their contribution has a
//! closed form), the columns they cover are dropped, rows above the knockout
//! bound are discarded, and the survivors are sorted by cardinality. The
//! resulting [`ReducedMatrix`] is immutable for the rest of the run and is
//! shared read-only across workers.

mod loader;
mod reducer;

pub use loader::{CardinalityHistogram, Mcs, McsFamily};
pub use reducer::{reduce, ReducedMatrix};
