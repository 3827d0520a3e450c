//! CLI integration tests for opb58
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn opb58() -> Command {
    Command::cargo_bin("opb58").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    opb58()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order-preserving base-58"));
}

#[test]
fn test_version() {
    opb58()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("opb58"));
}

#[test]
fn test_table() {
    opb58()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "alphabet: 0123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz",
        ))
        .stdout(predicate::str::contains("i32 max:  3FkQ47"))
        .stdout(predicate::str::contains("255  0xff  4P"));
}

// ============================================================================
// Encode
// ============================================================================

#[test]
fn test_encode_decimal_argument() {
    opb58()
        .args(["encode", "--input", "decimal", "58"])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_encode_decimal_stdin() {
    opb58()
        .args(["encode", "--input", "decimal"])
        .write_stdin("2147483647\n")
        .assert()
        .success()
        .stdout("3FkQ47\n");
}

#[test]
fn test_encode_decimal_beyond_u64() {
    opb58()
        .args(["encode", "-i", "decimal", "18446744073709551616"])
        .assert()
        .success()
        .stdout("ipWBYdcFeUQ\n");
}

#[test]
fn test_encode_hex_strips_leading_zero_bytes() {
    opb58()
        .args(["encode", "--input", "hex", "00ff"])
        .assert()
        .success()
        .stdout("4P\n");
}

#[test]
fn test_encode_text() {
    opb58()
        .args(["encode", "--input", "text"])
        .write_stdin("Hello, World!")
        .assert()
        .success()
        .stdout("61j0xWVF48eXczRMn9\n");
}

#[test]
fn test_encode_negative_fails() {
    opb58()
        .args(["encode", "--input", "decimal", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_encode_garbage_fails() {
    opb58()
        .args(["encode", "--input", "decimal", "12abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid decimal integer"));
}

// ============================================================================
// Decode
// ============================================================================

#[test]
fn test_decode_i32_boundary() {
    opb58()
        .args(["decode", "--output", "decimal", "--width", "i32", "3FkQ47"])
        .assert()
        .success()
        .stdout("2147483647\n");
}

#[test]
fn test_decode_i32_overflow() {
    opb58()
        .args(["decode", "--output", "decimal", "--width", "i32", "3FkQ47z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum signed 32-bit value"));
}

#[test]
fn test_decode_big() {
    opb58()
        .args(["decode", "-o", "decimal", "-w", "big", "ipWBYdcFeUQ"])
        .assert()
        .success()
        .stdout("18446744073709551616\n");
}

#[test]
fn test_decode_hex() {
    opb58()
        .args(["decode", "--output", "hex", "4Q"])
        .assert()
        .success()
        .stdout("0100\n");
}

#[test]
fn test_decode_raw_from_stdin() {
    opb58()
        .args(["decode", "--output", "raw"])
        .write_stdin("61j0xWVF48eXczRMn9\n")
        .assert()
        .success()
        .stdout("Hello, World!");
}

#[test]
fn test_decode_invalid_character() {
    opb58()
        .args(["decode", "--output", "hex", "3FkO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character 'O' at position 3"));
}

// ============================================================================
// Fits
// ============================================================================

#[test]
fn test_fits_boundary() {
    opb58()
        .args(["fits", "3FkQ47"])
        .assert()
        .success()
        .stdout("i32: true\ni64: true\n");
}

#[test]
fn test_fits_past_i32() {
    opb58()
        .args(["fits", "3FkQ48"])
        .assert()
        .success()
        .stdout("i32: false\ni64: true\n");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_file_sets_default_output() {
    let path = std::env::temp_dir().join(format!("opb58-cli-test-{}.toml", std::process::id()));
    std::fs::write(&path, "[settings]\noutput = \"hex\"\n").unwrap();

    opb58()
        .arg("--config")
        .arg(&path)
        .args(["decode", "4Q"])
        .assert()
        .success()
        .stdout("0100\n");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_config_file_fails() {
    opb58()
        .args(["--config", "/nonexistent/opb58.toml", "fits", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_rust_log_enables_debug_output() {
    opb58()
        .env("RUST_LOG", "debug")
        .args(["encode", "58"])
        .assert()
        .success()
        .stdout("10\n")
        .stderr(predicate::str::contains("built byte cache"));
}

#[test]
fn test_quiet_overrides_rust_log() {
    opb58()
        .env("RUST_LOG", "debug")
        .args(["-q", "encode", "58"])
        .assert()
        .success()
        .stdout("10\n")
        .stderr("");
}

#[test]
fn test_verbose_overrides_rust_log() {
    opb58()
        .env("RUST_LOG", "error")
        .args(["-v", "encode", "58"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built byte cache"));
}
