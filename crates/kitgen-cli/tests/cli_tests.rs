//! End-to-end tests for the `kitgen` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

const ORDER: &str = "\
ServiceName = order-service
ModelName = Order
Attributes = {
  Id = string
  Total = float64
}
";

/// A scratch directory holding `order.txt`.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("order.txt"), ORDER).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn kitgen(&self) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("kitgen");
        cmd.current_dir(self.path())
            .env_remove("NO_COLOR")
            .env_remove("RUST_LOG");
        cmd
    }

    fn files_under(&self, dir: &str) -> Vec<PathBuf> {
        let root = self.path().join(dir);
        let mut files: Vec<PathBuf> = WalkDir::new(&root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(&root).unwrap().to_path_buf())
            .collect();
        files.sort();
        files
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }
}

#[test]
fn test_help_flag() {
    cargo::cargo_bin_cmd!("kitgen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("go-kit"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--id-policy"));
}

#[test]
fn test_version_flag() {
    cargo::cargo_bin_cmd!("kitgen")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    cargo::cargo_bin_cmd!("kitgen")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_generates_the_order_service() {
    let ws = Workspace::new();

    ws.kitgen()
        .arg("order.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 11 files"));

    let expected: Vec<PathBuf> = [
        "domain/entity/order.go",
        "domain/service.go",
        "endpoint/decoder.go",
        "endpoint/encoder.go",
        "endpoint/endpoint.go",
        "endpoint/view.go",
        "main.go",
        "repository/impl/postgresql/connection.go",
        "repository/impl/postgresql/order.go",
        "repository/order.go",
        "service/service.go",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(ws.files_under("order-service"), expected);

    let entity = ws.read("order-service/domain/entity/order.go");
    assert!(entity.contains("type Order struct {\n\tId    string\n\tTotal float64\n}"));

    let main = ws.read("order-service/main.go");
    assert!(main.contains("\":8080\""));
    assert!(main.contains("\"order-service/endpoint\""));
}

#[test]
fn test_output_flag_chooses_the_parent_directory() {
    let ws = Workspace::new();

    ws.kitgen()
        .args(["order.txt", "-o", "services"])
        .assert()
        .success();

    assert!(ws.path().join("services/order-service/main.go").is_file());
    assert!(!ws.path().join("order-service").exists());
}

#[test]
fn test_two_runs_produce_identical_trees() {
    let ws = Workspace::new();

    ws.kitgen().args(["order.txt", "-o", "a"]).assert().success();
    ws.kitgen().args(["order.txt", "-o", "b"]).assert().success();

    let files = ws.files_under("a/order-service");
    assert_eq!(files, ws.files_under("b/order-service"));
    for file in files {
        let rel = file.display().to_string();
        assert_eq!(
            ws.read(&format!("a/order-service/{rel}")),
            ws.read(&format!("b/order-service/{rel}")),
            "{rel} differs between runs"
        );
    }
}

#[test]
fn test_dry_run_writes_nothing() {
    let ws = Workspace::new();

    ws.kitgen()
        .args(["order.txt", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("connection.go"));

    assert!(!ws.path().join("order-service").exists());
}

#[test]
fn test_id_policy_exclude_drops_the_identifier_from_params() {
    let ws = Workspace::new();

    ws.kitgen()
        .args(["order.txt", "--id-policy", "exclude"])
        .assert()
        .success();

    let contract = ws.read("order-service/domain/service.go");
    assert!(contract.contains("type CreateOrderParams struct {\n\tTotal float64\n}"));
}

#[test]
fn test_port_flag_reaches_main() {
    let ws = Workspace::new();

    ws.kitgen()
        .args(["order.txt", "--port", "9090"])
        .assert()
        .success();

    assert!(ws.read("order-service/main.go").contains("\":9090\""));
}

#[test]
fn test_port_zero_is_rejected_by_the_parser() {
    let ws = Workspace::new();

    ws.kitgen()
        .args(["order.txt", "--port", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_settings_file_supplies_defaults() {
    let ws = Workspace::new();
    fs::write(
        ws.path().join("kitgen.toml"),
        "[generation]\noutput_dir = \"gen\"\nlisten_port = 7000\n",
    )
    .unwrap();

    ws.kitgen()
        .args(["order.txt", "-s", "kitgen.toml"])
        .assert()
        .success();

    assert!(ws.read("gen/order-service/main.go").contains("\":7000\""));
}

#[test]
fn test_platform_config_dir_is_ignored_without_settings_flag() {
    let ws = Workspace::new();
    let xdg = ws.path().join("xdg");
    fs::create_dir_all(xdg.join("kitgen")).unwrap();
    fs::write(
        xdg.join("kitgen/config.toml"),
        "[generation]\noutput_dir = \"elsewhere\"\nidentifier_policy = \"exclude\"\nlisten_port = 1234\n",
    )
    .unwrap();

    ws.kitgen()
        .arg("order.txt")
        .env("XDG_CONFIG_HOME", &xdg)
        .env("HOME", ws.path())
        .assert()
        .success();

    assert!(!ws.path().join("elsewhere").exists());
    assert!(ws.read("order-service/main.go").contains("\":8080\""));
    assert!(
        ws.read("order-service/domain/service.go")
            .contains("type CreateOrderParams struct {\n\tId    string\n\tTotal float64\n}")
    );
}

#[test]
fn test_flags_override_settings() {
    let ws = Workspace::new();
    fs::write(
        ws.path().join("kitgen.toml"),
        "[generation]\nlisten_port = 7000\n",
    )
    .unwrap();

    ws.kitgen()
        .args(["order.txt", "-s", "kitgen.toml", "--port", "6000"])
        .assert()
        .success();

    assert!(ws.read("order-service/main.go").contains("\":6000\""));
}

#[test]
fn test_json_report() {
    let ws = Workspace::new();

    let assert = ws
        .kitgen()
        .args(["order.txt", "--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["service"], "order-service");
    assert_eq!(report["model"], "Order");
    assert_eq!(report["files"].as_array().unwrap().len(), 11);
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let ws = Workspace::new();

    ws.kitgen()
        .args(["order.txt", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(ws.path().join("order-service/main.go").is_file());
}
