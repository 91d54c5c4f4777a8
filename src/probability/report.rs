// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text rendering of a [`FailureReport`].

use std::io::{self, Write};

use crate::probability::FailureReport;

const LINE_LENGTH: usize = 111;

fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(LINE_LENGTH))
}

/// Write the report in its tabular form: header, one row per knockout
/// count, then the weighted total and the residual weight.
pub fn write_report(report: &FailureReport, out: &mut impl Write) -> io::Result<()> {
    rule(out, '=')?;
    writeln!(
        out,
        "{:>4}     {:>3}    {:>20}     {:>10}     {:>25}     {:>25}",
        "n", "d", "weighted P(f)", "P(f)", "total cutsets(d)", "possible cutsets(d)"
    )?;
    writeln!(out, "{:19}lambda = {:.2e}", " ", report.lambda)?;
    rule(out, '-')?;

    for row in &report.rows {
        writeln!(
            out,
            "{:>4}     {:>3}            {:.10}     {:.8}     {:>25}     {:>25}",
            row.reaction_count,
            row.knockouts,
            row.weighted_failure,
            row.failure_probability,
            row.total_cutsets,
            row.possible_cutsets
        )?;
    }

    rule(out, '-')?;
    writeln!(out, "total P(f)              {:.10}", report.total_weighted_failure)?;
    writeln!(out, "Error                   {:.10}", report.residual_weight)?;
    rule(out, '=')
}
