//! Integration tests for the linkrank binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkrank_cmd(config_dir: &TempDir) -> Command {
    let config_path = config_dir.path().join("config.yml");
    if !config_path.exists() {
        fs::write(&config_path, "seed: 7\n").unwrap();
    }
    let mut cmd = Command::cargo_bin("linkrank").unwrap();
    cmd.env("LINKRANK_CONFIG", config_path);
    cmd
}

fn create_corpus(pages: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in pages {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn sample_corpus() -> TempDir {
    create_corpus(&[
        ("1.html", r#"<html><body><a href="2.html">2</a></body></html>"#),
        (
            "2.html",
            r#"<html><body><a href="1.html">1</a> <a href="3.html">3</a></body></html>"#,
        ),
        (
            "3.html",
            r#"<html><body><a href="2.html">2</a> <a href="4.html">4</a></body></html>"#,
        ),
        ("4.html", r#"<html><body><a href="2.html">2</a></body></html>"#),
    ])
}

#[test]
fn test_missing_argument_prints_usage() {
    let config = TempDir::new().unwrap();
    linkrank_cmd(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_rejected() {
    let config = TempDir::new().unwrap();
    let corpus = sample_corpus();
    linkrank_cmd(&config)
        .arg(corpus.path())
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_prints_both_methods() {
    let config = TempDir::new().unwrap();
    let corpus = sample_corpus();

    linkrank_cmd(&config)
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("  1.html: "))
        .stdout(predicate::str::contains("  4.html: "));
}

#[test]
fn test_symmetric_corpus_splits_evenly() {
    let config = TempDir::new().unwrap();
    let corpus = create_corpus(&[
        ("a.html", r#"<a href="b.html">b</a>"#),
        ("b.html", r#"<a href="a.html">a</a>"#),
    ]);

    linkrank_cmd(&config)
        .arg(corpus.path())
        .args(["--samples", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank Results from Sampling (n = 500)"))
        .stdout(predicate::str::contains(
            "PageRank Results from Iteration\n  a.html: 0.5000\n  b.html: 0.5000\n",
        ));
}

#[test]
fn test_seed_makes_output_reproducible() {
    let config = TempDir::new().unwrap();
    let corpus = sample_corpus();

    let run = || {
        linkrank_cmd(&config)
            .arg(corpus.path())
            .args(["--seed", "123", "--samples", "2000"])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn test_json_format() {
    let config = TempDir::new().unwrap();
    let corpus = sample_corpus();

    let output = linkrank_cmd(&config)
        .arg(corpus.path())
        .args(["--format", "json", "--samples", "1000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sampling"]["samples"], 1000);
    let ranks = value["iteration"]["ranks"].as_object().unwrap();
    assert_eq!(ranks.len(), 4);
    let total: f64 = ranks.values().map(|r| r.as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn test_csv_format() {
    let config = TempDir::new().unwrap();
    let corpus = sample_corpus();

    linkrank_cmd(&config)
        .arg(corpus.path())
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("method,page,rank\n"))
        .stdout(predicate::str::contains("iteration,2.html,"));
}

#[test]
fn test_missing_directory_fails() {
    let config = TempDir::new().unwrap();
    let corpus = TempDir::new().unwrap();

    linkrank_cmd(&config)
        .arg(corpus.path().join("nope"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read corpus"));
}

#[test]
fn test_empty_directory_is_invalid_corpus() {
    let config = TempDir::new().unwrap();
    let corpus = TempDir::new().unwrap();

    linkrank_cmd(&config)
        .arg(corpus.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid corpus"));
}

#[test]
fn test_invalid_damping_rejected() {
    let config = TempDir::new().unwrap();
    let corpus = sample_corpus();

    linkrank_cmd(&config)
        .arg(corpus.path())
        .args(["--damping", "1.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("damping"));
}

#[test]
fn test_config_file_sets_samples() {
    let config = TempDir::new().unwrap();
    fs::write(config.path().join("config.yml"), "samples: 321\nseed: 1\n").unwrap();
    let corpus = sample_corpus();

    linkrank_cmd(&config)
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(n = 321)"));
}
