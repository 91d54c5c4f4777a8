// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the pipeline: loading from disk, weighting,
//! residual accounting and report rendering.

mod common;

use std::fs::File;
use std::io::{BufReader, Read, Write};

use common::family_from_strings;

use mcs_robustness::matrix::McsFamily;
use mcs_robustness::probability::{poisson_weight, write_report};
use mcs_robustness::scheduler::NoProgress;
use mcs_robustness::{run_pipeline, EngineError, RunConfig};

#[test]
fn weights_and_residual_account_for_the_poisson_mass() {
    // a single cutset over a universe wide enough that the residual beyond
    // the bound is negligible
    let family = McsFamily::from_rows(30, &[&[0, 1]]);
    let config = RunConfig::default();
    let report = run_pipeline(&family, &config, &NoProgress, poisson_weight).unwrap();

    assert_eq!(report.rows.len(), 30);
    assert!(report.residual_weight >= 0.0);
    assert!(report.residual_weight < 1e-9);

    let weight_sum: f64 = (1..=30).map(|d| poisson_weight(config.lambda, d)).sum();
    let mass = 1.0 - (-config.lambda).exp();
    assert!((weight_sum + report.residual_weight - mass).abs() < 1e-9);

    // each row's weighted value is its probability times the Poisson weight
    for row in &report.rows {
        let weight = poisson_weight(config.lambda, row.knockouts);
        assert!((row.weighted_failure - weight * row.failure_probability).abs() < 1e-12);
    }
}

#[test]
fn failure_probability_is_monotone_in_knockouts() {
    let family = family_from_strings(&["1100000", "0111000", "0000110"]);
    let report = run_pipeline(&family, &RunConfig::default(), &NoProgress, poisson_weight).unwrap();

    let mut last = 0.0;
    for row in &report.rows {
        assert!(
            row.failure_probability >= last - 1e-12,
            "P(f) dropped at d={}",
            row.knockouts
        );
        last = row.failure_probability;
        assert!(row.total_cutsets <= row.possible_cutsets);
    }
    // every knockout of all reactions disables the network
    let final_row = report.rows.last().unwrap();
    assert_eq!(final_row.total_cutsets, 1);
    assert_eq!(final_row.possible_cutsets, 1);
    assert!((final_row.failure_probability - 1.0).abs() < 1e-12);
}

#[test]
fn pipeline_runs_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("mcs.csv");
    let output_path = dir.path().join("failure.out");

    let mut input = File::create(&input_path).unwrap();
    write!(input, "11000\n01100\n00111\n").unwrap();
    drop(input);

    let family = McsFamily::read(BufReader::new(File::open(&input_path).unwrap())).unwrap();
    let config = RunConfig {
        max_knockouts: Some(4),
        lambda: 0.1,
        worker_count: 2,
    };
    let report = run_pipeline(&family, &config, &NoProgress, poisson_weight).unwrap();
    assert_eq!(report.rows.len(), 4);

    let mut output = File::create(&output_path).unwrap();
    write_report(&report, &mut output).unwrap();
    drop(output);

    let mut text = String::new();
    File::open(&output_path)
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    assert!(text.contains("weighted P(f)"));
    assert!(text.contains("lambda = "));
    assert!(text.contains("total P(f)"));
    assert!(text.contains("Error"));
    // one line per knockout count between the two rules
    assert_eq!(text.lines().filter(|l| l.starts_with("   5")).count(), 4);
}

#[test]
fn malformed_files_are_rejected_with_input_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");

    for bad in ["110\n10\n", "1x0\n", "000\n", ""] {
        let mut f = File::create(&path).unwrap();
        write!(f, "{bad}").unwrap();
        drop(f);
        let result = McsFamily::read(BufReader::new(File::open(&path).unwrap()));
        assert!(
            matches!(result, Err(EngineError::InputFormat(_))),
            "input {:?} should be rejected",
            bad
        );
    }
}

#[test]
fn invalid_configuration_is_rejected() {
    let family = family_from_strings(&["110", "011"]);
    for config in [
        RunConfig {
            lambda: 0.0,
            ..RunConfig::default()
        },
        RunConfig {
            max_knockouts: Some(0),
            ..RunConfig::default()
        },
        RunConfig {
            worker_count: 0,
            ..RunConfig::default()
        },
    ] {
        assert!(matches!(
            run_pipeline(&family, &config, &NoProgress, poisson_weight),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}

#[test]
fn bound_above_reaction_count_is_clamped() {
    let family = family_from_strings(&["1100", "0011"]);
    let config = RunConfig {
        max_knockouts: Some(100),
        ..RunConfig::default()
    };
    let report = run_pipeline(&family, &config, &NoProgress, poisson_weight).unwrap();
    assert_eq!(report.rows.len(), 4);
}
