//! Integration tests for `vsphere-roles privileges`.
//!
//! The catalog is compiled in, so none of these tests need a server or
//! credentials.

mod common;

use common::vsphere_cmd;
use predicates::prelude::*;

fn offline_cmd() -> assert_cmd::Command {
    let mut cmd = vsphere_cmd();
    cmd.env_remove("VSPHERE_USER").env_remove("VSPHERE_PASSWORD");
    cmd
}

#[test]
fn test_privileges_lists_catalog_without_server() {
    offline_cmd()
        .arg("privileges")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PRIVILEGE")
                .and(predicate::str::contains("System.Read"))
                .and(predicate::str::contains("VirtualMachine.Config.AddNewDisk")),
        );
}

#[test]
fn test_privileges_group_filter_json() {
    let output = offline_cmd()
        .args(["privileges", "--group", "System", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let privileges: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        privileges,
        vec!["System.Anonymous", "System.Read", "System.View"]
    );
}

#[test]
fn test_privileges_groups() {
    offline_cmd()
        .args(["privileges", "--groups"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("GROUP")
                .and(predicate::str::contains("Datastore"))
                .and(predicate::str::contains("VirtualMachine")),
        );
}

#[test]
fn test_privileges_unknown_group_fails() {
    offline_cmd()
        .args(["privileges", "--group", "NoSuchArea"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown privilege group: NoSuchArea"));
}

#[test]
fn test_help_lists_commands() {
    offline_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("get")
            .and(predicate::str::contains("privileges"))
            .and(predicate::str::contains("--server")),
    );
}
