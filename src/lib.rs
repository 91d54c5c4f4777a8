// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Failure probability of a metabolic network from its minimal cutsets.
//!
//! A minimal cutset (MCS) is an irreducible set of reactions whose joint
//! knockout disables the network. Given the family of minimal cutsets as a
//! 0/1 matrix, this crate computes, for each number of simultaneous
//! knockouts d, the fraction of d-element knockout sets that disable the
//! network, and combines the fractions into a single failure probability
//! weighted by a Poisson model of the knockout count.
//!
//! # Architecture
//!
//! The computation proceeds in stages:
//!
//! 1. **Load** the cutset matrix ([`matrix::McsFamily`]) and its
//!    cardinality histogram.
//! 2. **Reduce** the matrix ([`matrix::reduce`]): single-reaction cutsets
//!    and the columns they cover leave the matrix (their contribution has a
//!    closed form), rows above the knockout bound are dropped, and the rest
//!    is sorted by cardinality. The result is immutable and shared
//!    read-only by all workers.
//! 3. **Count** ([`search::CutsetSearch`]): for every remaining row the
//!    engine counts the knockout sets canonically attributed to it, one
//!    cardinality group at a time, partitioned across a worker pool
//!    ([`scheduler::GroupScheduler`]).
//! 4. **Aggregate** ([`probability`]): per-cardinality totals, failure
//!    probabilities, Poisson weighting and the final report.
//!
//! The whole run is driven by [`pipeline::run_pipeline`]; the binary is a
//! thin CLI wrapper around it.

pub mod combinatorics;
pub mod config;
pub mod errors;
pub mod matrix;
pub mod pipeline;
pub mod probability;
pub mod reactions;
pub mod scheduler;
pub mod search;

// Re-export commonly used types
pub use config::RunConfig;
pub use errors::EngineError;
pub use pipeline::run_pipeline;
pub use probability::FailureReport;
