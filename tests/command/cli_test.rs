//! Tests the `rewind` binary end to end.

use std::process::Command;

use assert_cmd::prelude::*;

use super::*;

/// Run `rewind` isolated from the user's real config and data directories.
fn rewind(project: &TestProject) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rewind"));
    cmd.arg("--project")
        .arg(project.root())
        .env("XDG_CONFIG_HOME", project.root().join(".xdg-config"))
        .env("XDG_DATA_HOME", project.root().join(".xdg-data"))
        .env_remove("RUST_LOG");
    cmd
}

fn disable_global_root(project: &TestProject) {
    project
        .write(
            ".rewind/config.json",
            br#"{"include_global_root": false, "retention": 1}"#,
        )
        .unwrap();
}

#[test]
/// Tests `list --json` prints the catalog newest first.
fn test_cli_list_json() {
    let project = TestProject::new().unwrap();
    disable_global_root(&project);
    project.snapshot("first").unwrap().new_file("x.rs").unwrap();
    tick();
    project.snapshot("second").unwrap().new_file("y.rs").unwrap();

    let output = rewind(&project).args(["list", "--json"]).output().unwrap();

    assert!(output.status.success());
    let catalog: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["second", "first"]);
}

#[test]
/// Tests `revert` restores the file and an unknown id fails.
fn test_cli_revert() {
    let project = TestProject::new().unwrap();
    disable_global_root(&project);
    project.write("a.txt", b"edited").unwrap();
    project
        .snapshot("conv-1")
        .unwrap()
        .modified_file("a.txt", b"before")
        .unwrap();

    rewind(&project).args(["revert", "conv-1"]).assert().success();
    assert_file(&project, "a.txt", b"before");

    rewind(&project).args(["revert", "conv-1"]).assert().failure();
}

#[test]
/// Tests `prune` falls back to the configured retention.
fn test_cli_prune_uses_config_retention() {
    let project = TestProject::new().unwrap();
    disable_global_root(&project);
    for id in ["c1", "c2", "c3"] {
        project.snapshot(id).unwrap();
        tick();
    }

    rewind(&project).arg("prune").assert().success();

    assert_eq!(manager(&project).list_snapshots().snapshots.len(), 1);
}

#[test]
/// Tests a relative `--project` restores into the project under the working directory.
fn test_cli_relative_project() {
    let project = TestProject::new().unwrap();
    disable_global_root(&project);
    project.write("a.txt", b"edited").unwrap();
    project
        .snapshot("conv-1")
        .unwrap()
        .modified_file("a.txt", b"before")
        .unwrap();
    let parent = project.root().parent().unwrap().to_path_buf();

    Command::new(assert_cmd::cargo::cargo_bin!("rewind"))
        .current_dir(&parent)
        .args(["-C", "project", "revert", "conv-1"])
        .env("XDG_CONFIG_HOME", parent.join(".xdg-config"))
        .env("XDG_DATA_HOME", parent.join(".xdg-data"))
        .assert()
        .success();

    assert_file(&project, "a.txt", b"before");
}
