use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ledgerview-cli"));
    cmd.env("LEDGERVIEW_CONFIG", "/nonexistent/ledgerview.toml");
    cmd
}

#[test]
fn default_route_is_the_dashboard() {
    cli()
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicates::str::contains("Total Revenue"))
        .stdout(predicates::str::contains("$4,500"))
        .stdout(predicates::str::contains("income"))
        .stdout(predicates::str::contains("expense"));
}

#[test]
fn unknown_route_falls_back_to_dashboard() {
    cli()
        .args(["--no-color", "settings"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Dashboard"))
        .stdout(predicates::str::contains("2023-01-20"));
}

#[test]
fn custom_mock_fixture_replaces_builtin_rules() {
    let mut fixture = NamedTempFile::new().unwrap();
    write!(
        fixture,
        r#"
rules:
  - suffix: /transactions
    payload:
      kind: transactions
      items:
        - {{ id: 9, date: "2024-03-01", amount: 77, type: expense }}
"#
    )
    .unwrap();

    cli()
        .args(["--no-color", "--mocks"])
        .arg(fixture.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicates::str::contains("2024-03-01"))
        .stdout(predicates::str::contains("2023-01-15").not());
}

#[test]
fn config_file_can_disable_mocks() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[api]\nbase_url = \"http://127.0.0.1:59999/api\"\n[mock]\nenabled = false"
    )
    .unwrap();

    cli()
        .args(["--no-color", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Failed to load transactions"));
}

#[test]
fn mock_fixture_flag_overrides_disabled_mocks() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[api]\nbase_url = \"http://127.0.0.1:59999/api\"\n[mock]\nenabled = false"
    )
    .unwrap();
    let mut fixture = NamedTempFile::new().unwrap();
    write!(
        fixture,
        r#"
rules:
  - suffix: /transactions
    payload:
      kind: transactions
      items:
        - {{ id: 4, date: "2024-06-30", amount: 12, type: income }}
"#
    )
    .unwrap();

    cli()
        .args(["--no-color", "--config"])
        .arg(config.path())
        .arg("--mocks")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("2024-06-30"))
        .stdout(predicates::str::contains("Failed to load transactions").not());
}

#[test]
fn invalid_mock_fixture_is_reported() {
    let mut fixture = NamedTempFile::new().unwrap();
    writeln!(fixture, "rules: [{{ suffix: '', payload: {{ kind: json, items: 1 }} }}]").unwrap();

    cli()
        .args(["--mocks"])
        .arg(fixture.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("empty suffix"));
}
