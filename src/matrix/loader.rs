// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading a minimal cutset family from its 0/1 matrix form.

use std::io::BufRead;

use crate::errors::EngineError;
use crate::reactions::ReactionSet;

/// One minimal cutset: its member reactions and their count.
#[derive(Debug, Clone)]
pub struct Mcs {
    pub members: ReactionSet,
    pub cardinality: usize,
}

/// How many cutsets of each cardinality the family contains.
///
/// Index d-1 holds the count for cardinality d, so the histogram has one
/// slot per reaction.
#[derive(Debug, Clone)]
pub struct CardinalityHistogram {
    counts: Vec<u64>,
}

impl CardinalityHistogram {
    fn new(reaction_count: usize) -> Self {
        Self {
            counts: vec![0; reaction_count],
        }
    }

    /// Number of cutsets of exactly `cardinality` reactions.
    pub fn of_cardinality(&self, cardinality: usize) -> u64 {
        debug_assert!(cardinality >= 1);
        self.counts.get(cardinality - 1).copied().unwrap_or(0)
    }
}

/// A family of minimal cutsets over a fixed reaction universe.
#[derive(Debug, Clone)]
pub struct McsFamily {
    reaction_count: usize,
    rows: Vec<Mcs>,
    histogram: CardinalityHistogram,
}

impl McsFamily {
    /// Read a family from its matrix form: one row per line, characters
    /// `0` and `1` only, no separators. The first line fixes the width.
    ///
    /// Rejects ragged rows, foreign characters, all-zero rows and empty
    /// input. Blank lines are tolerated only at the end of the file.
    pub fn read(reader: impl BufRead) -> Result<McsFamily, EngineError> {
        let mut lines: Vec<String> = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(EngineError::InputFormat(
                "cutset file is empty, number of reactions would be zero".into(),
            ));
        }

        let reaction_count = lines[0].trim_end().len();
        if reaction_count == 0 {
            return Err(EngineError::InputFormat(
                "first line is blank, number of reactions would be zero".into(),
            ));
        }

        let mut rows = Vec::with_capacity(lines.len());
        let mut histogram = CardinalityHistogram::new(reaction_count);
        for (line_no, line) in lines.iter().enumerate() {
            let line = line.trim_end();
            if line.len() != reaction_count {
                return Err(EngineError::InputFormat(format!(
                    "line {}: expected {} characters, found {}",
                    line_no + 1,
                    reaction_count,
                    line.len()
                )));
            }
            let mut members = ReactionSet::empty(reaction_count);
            let mut cardinality = 0;
            for (i, c) in line.chars().enumerate() {
                match c {
                    '1' => {
                        members.insert(i);
                        cardinality += 1;
                    }
                    '0' => {}
                    other => {
                        return Err(EngineError::InputFormat(format!(
                            "line {}: unexpected character '{}'",
                            line_no + 1,
                            other
                        )));
                    }
                }
            }
            if cardinality == 0 {
                return Err(EngineError::InputFormat(format!(
                    "line {}: cutset has no member reactions",
                    line_no + 1
                )));
            }
            histogram.counts[cardinality - 1] += 1;
            rows.push(Mcs {
                members,
                cardinality,
            });
        }

        Ok(McsFamily {
            reaction_count,
            rows,
            histogram,
        })
    }

    /// Build a family directly from member index lists.
    pub fn from_rows(reaction_count: usize, rows: &[&[usize]]) -> McsFamily {
        let mut histogram = CardinalityHistogram::new(reaction_count);
        let rows: Vec<Mcs> = rows
            .iter()
            .map(|members| {
                let set = ReactionSet::from_members(reaction_count, members);
                let cardinality = set.count();
                debug_assert!(cardinality >= 1);
                histogram.counts[cardinality - 1] += 1;
                Mcs {
                    members: set,
                    cardinality,
                }
            })
            .collect();
        McsFamily {
            reaction_count,
            rows,
            histogram,
        }
    }

    pub fn reaction_count(&self) -> usize {
        self.reaction_count
    }

    pub fn rows(&self) -> &[Mcs] {
        &self.rows
    }

    pub fn histogram(&self) -> &CardinalityHistogram {
        &self.histogram
    }
}
