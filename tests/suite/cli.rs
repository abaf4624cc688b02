//! Runs the `pinstack` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn pinstack(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pinstack"))
        .args(args)
        .env("PINSTACK_CONFIG", config_dir.join("config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("pinstack binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_chart_for_literal_keys() {
    let dir = TempDir::new().unwrap();
    let output = pinstack(dir.path(), &["-k", "123456", "-C", "654321"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Change key:  123456\n\
         Control key: 654321\n\
         Master key:  123456\n\
         TP     7    8    9   10   11   12\n\
         BU    15   13   11    9    7    5\n\
         MP     -    -    -    -    -    -\n\
         BP     1    2    3    4    5    6\n"
    );
}

#[test]
fn json_output_carries_keys_and_stacks() {
    let dir = TempDir::new().unwrap();
    let output = pinstack(
        dir.path(),
        &["--json", "-p", "2", "-k", "12", "-m", "32", "-C", "65"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["change"], "12");
    assert_eq!(json["master"], "32");
    assert_eq!(json["control"], "65");
    assert_eq!(
        json["stacks"][0],
        serde_json::json!({"top": 7, "build_up": 13, "master": 2, "bottom": 1})
    );
}

#[test]
fn seed_makes_generated_keys_reproducible() {
    let dir = TempDir::new().unwrap();
    let args = ["--seed", "7", "-t", "kwikset", "-p", "5"];
    let first = pinstack(dir.path(), &args);
    let second = pinstack(dir.path(), &args);
    assert!(first.status.success(), "{}", stderr(&first));
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn length_mismatch_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = pinstack(dir.path(), &["-k", "123"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim_end(),
        "error: change key: expected 6 pins, got 3 pins"
    );
}

#[test]
fn macs_violation_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = pinstack(dir.path(), &["-p", "2", "-M", "2", "-C", "19"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("control key: pins (1,0): |9-1| > MACS (2)"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[defaults]\ntype = \"kwikset\"\npins = 3\n",
    )
    .unwrap();
    let output = pinstack(dir.path(), &["-k", "135", "-C", "531"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("Change key:  135\n"));

    // Kwikset cuts stop at 7.
    let output = pinstack(dir.path(), &["-k", "138", "-C", "531"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("outside range 1-7"), "{}", stderr(&output));
}

#[test]
fn invalid_config_value_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[defaults]\ncuts = \"9-1\"\n").unwrap();
    let output = pinstack(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("invalid [defaults] cuts"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn wide_range_keys_print_separated_and_parse_back() {
    let dir = TempDir::new().unwrap();
    let wide = |change: &str, control: &str| {
        pinstack(
            dir.path(),
            &["-c", "0-15", "-M", "15", "-p", "3", "--json", "-k", change, "-C", control],
        )
    };

    let first = wide("12.11.8", "12.11.8");
    assert!(first.status.success(), "{}", stderr(&first));
    let json: serde_json::Value = serde_json::from_str(&stdout(&first)).unwrap();
    assert_eq!(json["change"], "12.11.8");
    assert_eq!(
        json["stacks"][0],
        serde_json::json!({"top": 1, "build_up": 10, "master": 0, "bottom": 12})
    );

    let change = json["change"].as_str().unwrap();
    let control = json["control"].as_str().unwrap();
    let again = wide(change, control);
    assert!(again.status.success(), "{}", stderr(&again));
    assert_eq!(stdout(&again), stdout(&first));
}

#[test]
fn oversized_pin_count_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = pinstack(dir.path(), &["-p", "18446744073709551615"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim_end(),
        "error: pin count 18446744073709551615 exceeds the maximum of 32"
    );
}
