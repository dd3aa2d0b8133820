//! Integration tests for the interactive estimator binary.
//!
//! These tests use `assert_cmd` to drive the prompts over stdin and verify:
//! - the torque report in both units
//! - re-prompting on invalid input
//! - exit codes when stdin closes early
//! - JSON output and the multi-surface session

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("hingetorque-cli");
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "error");
    cmd
}

const REFERENCE_INPUT: &str = "1.225\n20\n-0.1\n0.5\n0.08\n0.05\n";

#[test]
fn reports_reference_surface_in_both_units() {
    cli()
        .write_stdin(REFERENCE_INPUT)
        .assert()
        .success()
        .stdout(contains("Required Torque: -0.0518 N·m"))
        .stdout(contains("Required Torque: 0.528 kg-cm"))
        .stdout(contains("safety margin of 1.5x to 2x"))
        .stdout(contains("Ailerons:"))
        .stdout(contains("Elevator:"));
}

#[test]
fn doubled_velocity_quadruples_torque() {
    cli()
        .write_stdin("1.225\n40\n-0.1\n0.5\n0.08\n0.05\n")
        .assert()
        .success()
        .stdout(contains("Calculated Dynamic Pressure (q): 980.00 N/m^2"))
        .stdout(contains("Required Torque: -0.2070 N·m"));
}

#[test]
fn empty_lines_accept_defaults() {
    cli()
        .write_stdin("\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(contains("[default 1.225]"))
        .stdout(contains("[default -0.1]"))
        .stdout(contains("[example 18, Enter to accept]"))
        .stdout(contains("ESTIMATED SERVO TORQUE REQUIREMENTS"));
}

#[test]
fn invalid_entries_are_reprompted() {
    cli()
        .write_stdin("0\n1.225\n-3\nfast\n20\n-0.1\n0\n0.5\n0.08\n0.05\n")
        .assert()
        .success()
        .stdout(contains("air density must be greater than zero (got 0)"))
        .stdout(contains("velocity must not be negative (got -3)"))
        .stdout(contains("'fast' is not a valid number for velocity"))
        .stdout(contains("span must be greater than zero (got 0)"))
        .stdout(contains("Required Torque: 0.528 kg-cm"));
}

#[test]
fn overflowing_inputs_never_reach_the_report() {
    cli()
        .write_stdin("1.225\n1e200\n1.225\n20\n0\n0.5\n0.08\n0.05\n")
        .assert()
        .success()
        .stdout(contains("dynamic pressure is not a finite number for these inputs"))
        .stdout(contains("Calculated Dynamic Pressure (q): 245.00 N/m^2"))
        .stdout(contains("NaN").not())
        .stdout(contains("inf ").not());
}

#[test]
fn overflowing_inputs_fail_in_json_mode_when_stdin_ends() {
    let output = cli()
        .args(["--format", "json"])
        .write_stdin("1.225\n1e200\n0\n0.5\n0.08\n0.05\n")
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn closed_stdin_exits_with_failure() {
    cli()
        .write_stdin("1.225\n20\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("input stream closed while waiting for hinge moment coefficient"))
        .stdout(contains("ESTIMATED SERVO TORQUE").not());
}

#[test]
fn json_format_keeps_prompts_off_stdout() {
    let output = cli()
        .args(["--format", "json"])
        .write_stdin(REFERENCE_INPUT)
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is pure JSON");
    let estimate = &value[0]["estimate"];
    assert!((estimate["torque_nm"].as_f64().unwrap() + 0.05175625).abs() < 1e-9);
    assert!((estimate["mean_chord"].as_f64().unwrap() - 0.065).abs() < 1e-12);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Air density (rho) in kg/m^3"));
}

#[test]
fn all_surfaces_session_reports_each_surface() {
    cli()
        .arg("--all-surfaces")
        .write_stdin("\n".repeat(14))
        .assert()
        .success()
        .stdout(contains("--- Aileron Parameters (single aileron) ---"))
        .stdout(contains("Elevator hinge moment coefficient (Ch)"))
        .stdout(contains("For the Aileron (single aileron) (using Ch = -0.15):"))
        .stdout(contains("For the Elevator (one half of the elevator) (using Ch = -0.1):"))
        .stdout(contains("For the Rudder (using Ch = -0.1):"));
}

#[test]
fn preset_supplies_surface_defaults() {
    cli()
        .args(["--preset", "rudder"])
        .write_stdin("\n".repeat(6))
        .assert()
        .success()
        .stdout(contains("--- Rudder Parameters ---"))
        .stdout(contains("[example 0.308, Enter to accept]"));
}

#[test]
fn unknown_preset_is_rejected() {
    cli()
        .args(["--preset", "flaperon"])
        .assert()
        .failure()
        .stderr(contains("unknown surface 'flaperon'"));
}
