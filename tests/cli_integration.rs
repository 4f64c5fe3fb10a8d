//! CLI integration tests for sysconf.
//!
//! These tests run the binary against a scratch home and project directory
//! so no user configuration leaks in.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the sysconf binary command, isolated in `dir`.
fn sysconf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sysconf").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("SYSCONF_PLATFORM");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// sysconf show
// ============================================================================

#[test]
fn test_show_linux_normal() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["show", "--platform", "linux", "--no-probe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# linux (normal)"))
        .stdout(predicate::str::contains("libmrtrix.so"))
        .stdout(predicate::str::contains("-O3"))
        .stdout(predicate::str::contains("resource:").not());
}

#[test]
fn test_show_windows_release_json() {
    let tmp = temp_dir();

    let output = sysconf(&tmp)
        .args(["show", "--platform", "windows", "--mode", "release", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["platform"], "windows");
    assert_eq!(json["mode"], "release");
    assert_eq!(json["suffixes"]["executable"], ".exe");

    let compile = json["flags"]["compile"].as_array().unwrap();
    assert_eq!(compile.last().unwrap(), "-DNDEBUG");
    assert!(compile.iter().any(|f| f == "-O2"));
    assert_eq!(json["resource"][0], "windres");
}

#[test]
fn test_show_darwin_release_drops_optimization() {
    let tmp = temp_dir();

    let output = sysconf(&tmp)
        .args(["show", "-p", "darwin", "-m", "release", "--json", "--no-probe"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["flags"]["compile"], serde_json::json!(["-DNDEBUG"]));
}

#[test]
fn test_show_unsupported_platform() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["show", "--platform", "solaris"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported platform `solaris`"))
        .stderr(predicate::str::contains("help: supported platforms"));
}

#[test]
fn test_show_unknown_mode() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["show", "--platform", "linux", "--mode", "fast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown build mode `fast`"));
}

#[test]
fn test_show_uses_project_config() {
    let tmp = temp_dir();
    fs::create_dir_all(tmp.path().join(".sysconf")).unwrap();
    fs::write(
        tmp.path().join(".sysconf/config.toml"),
        "[build]\nplatform = \"windows\"\nmode = \"debug\"\n",
    )
    .unwrap();

    sysconf(&tmp)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# windows (debug)"))
        .stdout(predicate::str::contains("mrtrix.dll"));

    // CLI overrides config
    sysconf(&tmp)
        .args(["show", "--platform", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# linux (debug)"));
}

// ============================================================================
// sysconf command
// ============================================================================

#[test]
fn test_command_compile_renders_arguments() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args([
            "command",
            "compile",
            "--platform",
            "linux",
            "--mode",
            "debug",
            "--no-probe",
            "--set",
            "gtk=",
            "--set",
            "path=-Ilib",
            "--set",
            "src=main.cpp",
            "--set",
            "obj=main.o",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "g++ -c -Wall -march=i686 -fPIC -fno-strict-aliasing -DGL_GLEXT_PROTOTYPES \
             -DUSE_TR1 -O3 -g -Ilib main.cpp -o main.o\n",
        ));
}

#[test]
fn test_command_link_lib_json() {
    let tmp = temp_dir();

    let output = sysconf(&tmp)
        .args([
            "command",
            "link-lib",
            "--platform",
            "windows",
            "--mode",
            "profile",
            "--set",
            "obj=a.o",
            "--set",
            "obj=b.o",
            "--set",
            "lib=mrtrix.dll",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let args: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        args,
        vec!["g++", "-shared", "-g", "-pg", "a.o", "b.o", "-o", "mrtrix.dll"]
    );
}

#[test]
fn test_command_unbound_placeholder_fails() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["command", "compile", "--platform", "linux", "--set", "src=a.cpp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not substituted"))
        .stderr(predicate::str::contains("help: bind it with `--set"));
}

#[test]
fn test_command_resource_on_windows() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args([
            "command",
            "resource",
            "--platform",
            "windows",
            "--set",
            "src=icons/icon.rc",
            "--set",
            "obj=icons/icon.o",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("windres icons/icon.rc -o icons/icon.o\n"));
}

#[test]
fn test_command_resource_unavailable_on_linux() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["command", "resource", "--platform", "linux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "template `resource` is not available for platform `linux`",
        ));
}

// ============================================================================
// sysconf platforms / completions
// ============================================================================

#[test]
fn test_platforms_lists_everything() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["platforms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darwin"))
        .stdout(predicate::str::contains("linux"))
        .stdout(predicate::str::contains("windows"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("release"));
}

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    sysconf(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sysconf"));
}
