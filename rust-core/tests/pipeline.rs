use std::f64::consts::PI;
use std::fs;
use std::path::PathBuf;

use epicycle_dft::config::{PipelineConfig, TraceConfig};
use epicycle_dft::io::load_samples;
use epicycle_dft::pipeline::run;
use epicycle_dft::spectrum::{AnalyzerConfig, Execution};
use epicycle_dft::{DftError, FrequencyComponent};

/// Scratch directory unique to one test
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("epicycle_dft_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_for(dir: &PathBuf, csv: &str) -> PipelineConfig {
    let input = dir.join("input.csv");
    fs::write(&input, csv).unwrap();

    PipelineConfig {
        input,
        output: dir.join("output.json"),
        ..PipelineConfig::default()
    }
}

fn read_components(path: &PathBuf) -> Vec<FrequencyComponent> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_four_point_alternating_sequence() {
    let dir = scratch("alternating");
    let config = config_for(&dir, "x,y\n1.0,0.0\n0.0,0.0\n-1.0,0.0\n0.0,0.0\n");

    let summary = run(&config).unwrap();
    assert_eq!(summary.samples, 4);
    assert_eq!(summary.components, 4);

    let components = read_components(&config.output);
    assert_eq!(components.len(), 4);

    let mut top: Vec<i64> = components[..2].iter().map(|c| c.freq).collect();
    top.sort();
    assert_eq!(top, vec![-1, 1]);
    for c in &components[..2] {
        assert!((c.amp - 0.5).abs() < 1e-12);
    }

    let dc = components.iter().find(|c| c.freq == 0).unwrap();
    let nyquist = components.iter().find(|c| c.freq == 2).unwrap();
    assert!(dc.amp < 1e-12);
    assert!(nyquist.amp < 1e-12);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_output_field_names_and_order() {
    let dir = scratch("fields");
    let config = config_for(&dir, "x,y\n1,2\n3,4\n");

    run(&config).unwrap();

    let text = fs::read_to_string(&config.output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);

    for record in records {
        let object = record.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object["freq"].is_i64());
    }

    let first = text.find("\"freq\"").unwrap();
    let last = text.find("\"im\"").unwrap();
    assert!(first < text.find("\"amp\"").unwrap());
    assert!(text.find("\"re\"").unwrap() < last);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_malformed_records_reach_the_analyzer() {
    let dir = scratch("malformed");
    // 5 records after the header: one skipped, one zero-filled
    let config = config_for(&dir, "x,y\n2,0\nlonely\n2,0\nbad,0\n2,0\n");

    let summary = run(&config).unwrap();
    assert_eq!(summary.samples, 4);

    // (2, 2, 0, 2): DC is 1.5
    let components = read_components(&config.output);
    assert_eq!(components[0].freq, 0);
    assert!((components[0].re - 1.5).abs() < 1e-12);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = scratch("missing");
    let config = PipelineConfig {
        input: dir.join("absent.csv"),
        output: dir.join("output.json"),
        ..PipelineConfig::default()
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, DftError::SourceUnavailable { .. }));
    assert!(!config.output.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_header_only_input_is_fatal() {
    let dir = scratch("header_only");
    let config = config_for(&dir, "x,y\nonly-one-field\n");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, DftError::EmptySequence { .. }));
    assert!(!config.output.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = scratch("unwritable");
    let mut config = config_for(&dir, "x,y\n1,0\n");
    config.output = dir.join("no_such_dir").join("output.json");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, DftError::SinkUnavailable { .. }));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_parallel_run_writes_identical_output() {
    let dir = scratch("parallel");
    let mut csv = String::from("re,im\n");
    for n in 0..80 {
        let t = n as f64;
        csv.push_str(&format!("{},{}\n", (2.0 * PI * 5.0 * t / 80.0).sin(), (t * 0.1).cos()));
    }

    let serial = config_for(&dir, &csv);
    run(&serial).unwrap();

    let parallel = PipelineConfig {
        output: dir.join("parallel.json"),
        analyzer: AnalyzerConfig {
            execution: Execution::Parallel,
        },
        ..serial.clone()
    };
    run(&parallel).unwrap();

    assert_eq!(
        fs::read_to_string(&serial.output).unwrap(),
        fs::read_to_string(&parallel.output).unwrap()
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_trace_reconstructs_input() {
    let dir = scratch("trace");
    let mut csv = String::from("x,y\n");
    for n in 0..32 {
        let theta = 2.0 * PI * n as f64 / 32.0;
        csv.push_str(&format!("{},{}\n", theta.cos() + 0.5, (2.0 * theta).sin()));
    }

    let mut config = config_for(&dir, &csv);
    config.trace = Some(TraceConfig {
        path: dir.join("trace.csv"),
        frames: 32,
        max_components: 32,
    });

    let summary = run(&config).unwrap();
    assert_eq!(summary.trace, Some(dir.join("trace.csv")));

    let original = load_samples(&config.input).unwrap();
    let traced = load_samples(dir.join("trace.csv")).unwrap();
    assert_eq!(traced.len(), original.len());
    for (a, b) in original.iter().zip(traced.iter()) {
        assert!((a - b).norm() < 1e-9);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_reorder_changes_sample_order_only() {
    let dir = scratch("reorder");
    let config = PipelineConfig {
        reorder: true,
        ..config_for(&dir, "x,y\n0,0\n3,0\n1,0\n2,0\n")
    };

    let summary = run(&config).unwrap();
    assert_eq!(summary.samples, 4);

    // Reordered to 0,1,2,3: DC stays 1.5 regardless of order
    let components = read_components(&config.output);
    let dc = components.iter().find(|c| c.freq == 0).unwrap();
    assert!((dc.re - 1.5).abs() < 1e-12);
    assert!(components.windows(2).all(|w| w[0].amp >= w[1].amp));

    fs::remove_dir_all(&dir).ok();
}
