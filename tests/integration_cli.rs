use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn driver() -> Command {
    Command::cargo_bin("bounded-observer").unwrap()
}

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("observer-cli").unwrap();
    cmd.env_remove("OBSERVER_RANGE_SIZE").env_remove("OBSERVER_TARGET");
    cmd
}

#[test]
fn test_driver_sample_run() {
    driver()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "--- SIMULATION START: UNIVERSE SIZE 100000000 ---",
        ))
        .stdout(predicate::str::contains(
            " -> Found at offset 8675309 after 8675310 steps.",
        ))
        .stdout(predicate::str::contains(
            " -> Calculated Projection: 0.3860232799815650",
        ))
        .stdout(predicate::str::contains(" -> Energy Cost: O(1) (Zero Iterations)"))
        .stdout(predicate::str::contains(
            "Conclusion: The Universe uses Pointer Casting, not Pointer Arithmetic.",
        ));
}

#[test]
fn test_driver_ignores_arguments() {
    driver()
        .arg("--range-size")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("UNIVERSE SIZE 100000000"));
}

#[test]
fn test_cli_simulate_defaults_match_driver() {
    cli()
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            " -> Found at offset 8675309 after 8675310 steps.",
        ))
        .stdout(predicate::str::contains("0.3860232799815650"));
}

#[test]
fn test_cli_simulate_custom_range() {
    cli()
        .args(["simulate", "--range-size", "1000", "--target", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UNIVERSE SIZE 1000 "))
        .stdout(predicate::str::contains(" -> Found at offset 999 after 1000 steps."));
}

#[test]
fn test_cli_simulate_from_env() {
    cli()
        .env("OBSERVER_RANGE_SIZE", "20")
        .env("OBSERVER_TARGET", "4")
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains(" -> Found at offset 4 after 5 steps."));
}

#[test]
fn test_cli_simulate_target_out_of_range() {
    cli()
        .args(["simulate", "-n", "100", "-t", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" -> Target 100 not found after 100 steps."));
}

#[test]
fn test_cli_simulate_json() {
    let output = cli()
        .args(["simulate", "-n", "10", "-t", "3", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scan"]["status"], "found");
    assert_eq!(value["scan"]["steps"], 4);
    assert_eq!(value["range_size"], 10);
}

#[test]
fn test_cli_simulate_strict_rejects_empty_range() {
    cli()
        .args(["simulate", "-n", "0", "-t", "0", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("EmptyRange"));
}

#[test]
fn test_cli_simulate_lenient_prints_nan() {
    cli()
        .args(["simulate", "-n", "0", "-t", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculated Projection: NaN"));
}

#[test]
fn test_cli_closure_table() {
    cli()
        .arg("closure")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCALE INVARIANCE"))
        .stdout(predicate::str::contains("CONSTANT UNIQUENESS"))
        .stdout(predicate::str::contains("Restoration (2/pi)"))
        .stdout(predicate::str::contains("│ yes    │"));
}

#[test]
fn test_cli_closure_csv() {
    cli()
        .args(["closure", "--scales", "1e3,1e6", "--output", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind,name,scale,factor,gap,closed,ratio_to_control"))
        .stdout(predicate::str::contains("scale,,1e3,"))
        .stdout(predicate::str::contains("candidate,Golden (0.618),"));
}

#[test]
fn test_cli_closure_rejects_bad_scale() {
    cli()
        .args(["closure", "--scales", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidScale"));
}

#[test]
fn test_cli_viewport_defaults() {
    cli()
        .arg("viewport")
        .assert()
        .success()
        .stdout(predicate::str::contains("Visible Range: [749681371591, 749681371591]"))
        .stdout(predicate::str::contains("Items to Render: 0"));
}

#[test]
fn test_cli_viewport_json() {
    let output = cli()
        .args(["viewport", "--items", "1000", "--item-height", "10", "--scroll", "0", "-o", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["visible"]["start_index"], 500);
    assert_eq!(value["viewport"]["total_items"], 1000);
}

#[test]
fn test_cli_viewport_rejects_zero_items() {
    cli()
        .args(["viewport", "--items", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidViewport"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("closure"))
        .stdout(predicate::str::contains("viewport"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_cli_info() {
    cli()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("BOUNDED OBSERVER"));
}

#[test]
fn test_cli_invalid_command() {
    cli().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_invalid_output_format() {
    cli()
        .args(["simulate", "--output", "xml"])
        .assert()
        .failure();
}
