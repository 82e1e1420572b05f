//! Cross-process determinism for audited query reports.
//!
//! Spawns the `report_fixture` binary under several environment variants and
//! asserts that all produce identical output, equal to the lines computed
//! in-process. Log output (stderr) is allowed to differ; stdout is not.

use std::path::Path;
use std::process::{Command, Output};

use lock_tests::generators::{random_collection, scenario_collection};
use lock_tests::report_lines::report_lines;
use ordinal_kernel::carrier::collection::CollectionV1;
use ordinal_kernel::fixture::write_collection;
use ordinal_search::policy::{CountStrategyV1, SearchPolicyV1};

const BIN: &str = env!("CARGO_BIN_EXE_report_fixture");

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn spawn(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> Output {
    let mut command = Command::new(BIN);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {BIN} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    })
}

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let output = spawn(work_dir, args, env_overrides);
    assert!(
        output.status.success(),
        "report_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn in_process(collection: CollectionV1, policy: SearchPolicyV1) -> String {
    let mut out = report_lines(collection, policy).expect("report lines").join("\n");
    out.push('\n');
    out
}

fn line<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|l| l.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
        .unwrap_or_else(|| panic!("output missing {key}"))
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[], &[]);

    // Sanity checks.
    assert!(baseline.contains("collection_digest=sha256:"));
    assert!(baseline.contains("policy_digest=sha256:"));
    assert_eq!(line(&baseline, "insert_6.outcome"), r#"{"index":3,"type":"index"}"#);
    assert_eq!(line(&baseline, "rotated_0.outcome"), r#"{"index":4,"type":"index"}"#);
    assert_eq!(line(&baseline, "count_2_sorted.outcome"), r#"{"count":2,"type":"count"}"#);

    // Variant 1: same as in-process.
    assert_eq!(baseline, in_process(scenario_collection(), SearchPolicyV1::default()));

    // Variant 2: different cwd.
    let alt_cwd = std::env::temp_dir();
    let variant_cwd = run_variant(&alt_cwd.to_string_lossy(), &[], &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes");

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[], &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 4: verbose logging and spurious env vars.
    let variant_noise = run_variant(
        &root,
        &[],
        &[
            ("RUST_LOG", "debug"),
            ("ORDINAL_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with logging and spurious env vars");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let output = spawn(&workspace_root(), &[], &[("RUST_LOG", "debug")]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("audited query complete"), "stderr: {stderr}");
}

#[test]
fn policy_file_changes_policy_digest_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("policy.json");
    let boundary = SearchPolicyV1 {
        count_strategy: CountStrategyV1::Boundary,
        ..SearchPolicyV1::default()
    };
    std::fs::write(&path, boundary.to_json_value().to_string()).expect("write policy");

    let root = workspace_root();
    let default_out = run_variant(&root, &[], &[]);
    let arg = path.to_string_lossy().into_owned();
    let boundary_out = run_variant(&root, &["--policy", arg.as_str()], &[]);
    assert_eq!(boundary_out, in_process(scenario_collection(), boundary));

    assert_eq!(
        line(&default_out, "collection_digest"),
        line(&boundary_out, "collection_digest")
    );
    assert_ne!(line(&default_out, "policy_digest"), line(&boundary_out, "policy_digest"));
    assert_eq!(
        line(&default_out, "count_2_sorted.outcome"),
        line(&boundary_out, "count_2_sorted.outcome")
    );
    assert_ne!(
        line(&default_out, "count_2_sorted.digest"),
        line(&boundary_out, "count_2_sorted.digest")
    );
}

#[test]
fn invalid_policy_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("policy.json");
    std::fs::write(&path, r#"{"count_strategy":"guess"}"#).expect("write policy");

    let arg = path.to_string_lossy().into_owned();
    let output = spawn(&workspace_root(), &["--policy", arg.as_str()], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn collection_fixture_drives_the_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("collection.json");
    let collection = random_collection(9, 120, 15);
    write_collection(&path, &collection).expect("write fixture");

    let root = workspace_root();
    let arg = path.to_string_lossy().into_owned();
    let from_file = run_variant(&root, &["--collection", arg.as_str()], &[]);
    assert_eq!(from_file, in_process(collection, SearchPolicyV1::default()));

    let scenario_out = run_variant(&root, &[], &[]);
    assert_ne!(
        line(&scenario_out, "collection_digest"),
        line(&from_file, "collection_digest")
    );
    assert_eq!(line(&scenario_out, "policy_digest"), line(&from_file, "policy_digest"));

    // The scenario collection written to disk reproduces the default output.
    write_collection(&path, &scenario_collection()).expect("write fixture");
    assert_eq!(run_variant(&root, &["--collection", arg.as_str()], &[]), scenario_out);
}

#[test]
fn malformed_collection_fixture_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("collection.json");
    let malformed = r#"{"records":[{"key":"one","value":"a"}],"schema_version":"collection.v1"}"#;
    std::fs::write(&path, malformed).expect("write fixture");

    let arg = path.to_string_lossy().into_owned();
    let output = spawn(&workspace_root(), &["--collection", arg.as_str()], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid collection"));

    let output = spawn(&workspace_root(), &["--bogus"], &[]);
    assert_eq!(output.status.code(), Some(2));
}
