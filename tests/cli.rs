use assert_cmd::Command;
use pawp::identity::exe_name;
use predicates::prelude::*;
use std::fs;

#[test]
fn clean_reports_removed_entries() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("Data");
    fs::create_dir_all(data.join("settings")).unwrap();
    fs::write(data.join("PortableApps.comLauncherRuntimeData-1.ini"), "").unwrap();
    fs::write(data.join("settings").join("app.lock"), "").unwrap();
    fs::write(data.join("settings").join("readme.txt"), "").unwrap();

    Command::cargo_bin("pawp")
        .unwrap()
        .arg("clean")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));

    assert!(data.join("settings").join("readme.txt").exists());
    assert!(!data.join("settings").join("app.lock").exists());
}

#[test]
fn clean_rejects_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("pawp")
        .unwrap()
        .arg("clean")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn resolve_prints_delegate_or_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let entry = dir.path().join(exe_name("AppPortable"));

    Command::cargo_bin("pawp")
        .unwrap()
        .args(["resolve", "--policy", "suffix-rename"])
        .arg(&entry)
        .assert()
        .failure()
        .stderr(predicate::str::contains(exe_name("AppPortable_Original")))
        .stderr(predicate::str::contains(exe_name("launcher")));

    fs::write(dir.path().join(exe_name("launcher")), "").unwrap();
    Command::cargo_bin("pawp")
        .unwrap()
        .args(["resolve", "--policy", "suffix-rename"])
        .arg(&entry)
        .assert()
        .success()
        .stdout(predicate::str::contains("delegate:"))
        .stdout(predicate::str::contains(exe_name("launcher")));
}

#[test]
fn patch_and_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("NSISPortable");
    fs::create_dir_all(app_dir.join("App").join("AppInfo")).unwrap();
    let entry = app_dir.join(exe_name("NSISPortable"));
    fs::write(&entry, "original").unwrap();
    let shim = dir.path().join(exe_name("pawp-shim"));
    fs::write(&shim, "shim").unwrap();
    let log = dir.path().join("patch.log");

    Command::cargo_bin("pawp")
        .unwrap()
        .arg("patch")
        .arg(&app_dir)
        .arg("--shim")
        .arg(&shim)
        .arg("--log")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 patched, 0 updated, 0 failed of 1 apps"));
    assert_eq!(fs::read_to_string(&entry).unwrap(), "shim");
    assert!(fs::read_to_string(&log).unwrap().contains("patched"));

    Command::cargo_bin("pawp")
        .unwrap()
        .arg("restore")
        .arg(&app_dir)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 apps restored"));
    assert_eq!(fs::read_to_string(&entry).unwrap(), "original");
}

#[test]
fn restore_without_confirmation_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("GimpPortable");
    fs::create_dir_all(app_dir.join("App").join("AppInfo")).unwrap();
    let entry = app_dir.join(exe_name("GimpPortable"));
    fs::write(&entry, "shim").unwrap();
    fs::write(app_dir.join(exe_name("GimpPortable_Original")), "original").unwrap();

    Command::cargo_bin("pawp")
        .unwrap()
        .arg("restore")
        .arg(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));
    assert_eq!(fs::read_to_string(&entry).unwrap(), "shim");
}

#[test]
fn long_help_describes_the_tool_in_plain_text() {
    Command::cargo_bin("pawp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pawp replaces PortableApps launchers"))
        .stdout(predicate::str::contains("\u{2014}").not());
}
