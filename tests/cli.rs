use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn contains_ignore_case(needle: &'static str) -> impl Predicate<str> {
    let needle = needle.to_lowercase();
    predicate::function(move |output: &str| output.to_lowercase().contains(&needle))
}

#[test]
fn bare_invocation_prints_welcome() {
    cargo_bin_cmd!("go-cli-test")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to go-cli-test! Use --help to see available commands.",
        ));
}

#[test]
fn help_describes_application() {
    cargo_bin_cmd!("go-cli-test")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A demonstration CLI application")
                .and(predicate::str::contains("greet"))
                .and(predicate::str::contains("math")),
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag_prints_version() {
    cargo_bin_cmd!("go-cli-test")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn greet_without_name() {
    cargo_bin_cmd!("go-cli-test")
        .arg("greet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"));
}

#[test]
fn greet_with_name() {
    cargo_bin_cmd!("go-cli-test")
        .args(["greet", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Alice!"));
}

#[test]
fn greet_uppercase() {
    cargo_bin_cmd!("go-cli-test")
        .args(["greet", "-u", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HELLO, ALICE!"));
}

#[test]
fn greet_with_prefix() {
    cargo_bin_cmd!("go-cli-test")
        .args(["greet", "-p", "Hi", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi, Bob!"));
}

#[test]
fn math_add_two_numbers() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "add", "10", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 30.00"));
}

#[test]
fn math_add_many_numbers() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "add", "1", "2", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 10.00"));
}

#[test]
fn math_multiply() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "multiply", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 12.00"));
}

#[test]
fn math_divide_by_zero_is_handled() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "divide", "10", "0"])
        .assert()
        .success()
        .stdout(contains_ignore_case("division by zero"));
}

#[test]
fn math_sqrt() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "sqrt", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 3.000000"));
}

#[test]
fn math_sqrt_of_negative_is_handled() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "sqrt", "-4"])
        .assert()
        .success()
        .stdout(contains_ignore_case("negative number"));
}

#[test]
fn invalid_number_is_handled() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "add", "1", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: 'abc' is not a valid number"));
}

#[test]
fn math_add_with_insufficient_args() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "add", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains_ignore_case("requires at least 2 arg(s)"));
}

#[test]
fn invalid_subcommand() {
    cargo_bin_cmd!("go-cli-test")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(contains_ignore_case("unknown command").and(predicate::str::contains("Usage:")));
}

#[test]
fn unknown_flag_is_rejected() {
    cargo_bin_cmd!("go-cli-test")
        .args(["greet", "--loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown flag: --loud"));
}

#[test]
fn math_without_subcommand_prints_help() {
    cargo_bin_cmd!("go-cli-test")
        .arg("math")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Perform various mathematical operations")
                .and(predicate::str::contains("sqrt")),
        );
}

#[test]
fn negative_fraction_operand_is_a_number() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "add", "-.5", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 0.50"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn overflowing_operand_is_not_a_valid_number() {
    cargo_bin_cmd!("go-cli-test")
        .args(["math", "add", "1e400", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: '1e400' is not a valid number"));
}
