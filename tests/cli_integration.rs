//! CLI integration tests: drive the `edgewise` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::tempdir;

// ==================== CLI Helpers ====================

/// Locate the `edgewise` binary built alongside test binaries.
fn edgewise_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("edgewise");
    path
}

/// Run the `edgewise` CLI with the given arguments and return the output.
fn run_edgewise(args: &[&str]) -> Output {
    Command::new(edgewise_bin())
        .args(args)
        .output()
        .expect("Failed to run edgewise")
}

/// Assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== End-to-end flows ====================

#[test]
fn test_create_mutate_query_flow() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("flow.graph");
    let file = file.to_str().unwrap();

    assert_success(&run_edgewise(&["new", file, "--directed", "--weighted"]));
    for v in ["S", "A", "T"] {
        assert_success(&run_edgewise(&["add-vertex", file, v]));
    }
    assert_success(&run_edgewise(&["add-edge", file, "S", "A", "--weight", "10"]));
    assert_success(&run_edgewise(&["add-edge", file, "A", "T", "--weight", "4"]));
    assert_success(&run_edgewise(&["add-edge", file, "S", "T", "--weight", "2"]));

    let info = run_edgewise(&["info", file]);
    assert_success(&info);
    assert!(stdout(&info).contains("Vertices: 3"));
    assert!(stdout(&info).contains("Edges: 3"));

    let flow = run_edgewise(&["max-flow", file, "S", "T"]);
    assert_success(&flow);
    assert!(stdout(&flow).contains("6"));
}

#[test]
fn test_mst_json_output() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("mst.graph");
    std::fs::write(
        &file,
        "undirected weighted\nA B 1\nB C 1\nA C 5\n",
    )
    .unwrap();
    let file = file.to_str().unwrap();

    let output = run_edgewise(&["--format", "json", "mst", file]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["total_weight"], 2.0);
    assert_eq!(value["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_reference_exits_nonzero() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tiny.graph");
    std::fs::write(&file, "directed unweighted\nA B\n").unwrap();
    let file = file.to_str().unwrap();

    let output = run_edgewise(&["shortest", file, "A", "missing"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_structural_precondition_reported() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("undirected.graph");
    std::fs::write(&file, "undirected weighted\nA B 1\n").unwrap();
    let file = file.to_str().unwrap();

    let output = run_edgewise(&["max-flow", file, "A", "B"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("directed"));
}

#[test]
fn test_reciprocal_writes_new_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.graph");
    let output_path = dir.path().join("out.graph");
    std::fs::write(&input, "directed unweighted\nA B\nB A\nC D\n").unwrap();

    let output = run_edgewise(&[
        "reciprocal",
        input.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);
    assert_success(&output);

    let text = std::fs::read_to_string(&output_path).unwrap();
    assert!(text.starts_with("directed unweighted"));
    assert!(text.contains("A B"));
    assert!(text.contains("B A"));
    assert!(!text.contains("C D"));
}

#[test]
fn test_negative_cycle_via_cli() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("neg.graph");
    std::fs::write(&file, "directed weighted\nA B 1\nB C -3\nC A 1\n").unwrap();
    let file = file.to_str().unwrap();

    let output = run_edgewise(&["--format", "json", "negative-cycles", file, "A"]);
    assert_success(&output);
    let cycles: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let members: Vec<&str> = cycles[0]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    for member in ["A", "B", "C"] {
        assert!(members.contains(&member));
    }
}
