use super::common::AppFixture;
use crate::cleanup::{cleanup, CleanupAction, CleanupPlan};

fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn missing_data_dir_is_a_no_op() {
    let app = AppFixture::new();
    let report = cleanup(&app.root, &CleanupPlan::default());
    assert_eq!(report.removed, 0);
    assert_eq!(report.failed, 0);
}

#[test]
fn runtime_data_inis_removed_and_nothing_else() {
    let app = AppFixture::new();
    app.touch("Data/PortableApps.comLauncherRuntimeData-20230101.ini");
    app.touch("Data/PortableApps.comLauncherRuntimeData-20230215.ini");
    app.touch("Data/settings.ini");
    app.touch("Data/PortableApps.comLauncherRuntimeData.txt");

    cleanup(&app.root, &CleanupPlan::default());

    assert_eq!(files_in(&app.path("Data")), vec!["PortableApps.comLauncherRuntimeData.txt", "settings.ini"]);
}

#[test]
fn settings_state_files_removed_readme_kept() {
    let app = AppFixture::new();
    app.touch("Data/settings/app.lock");
    app.touch("Data/settings/app.pid");
    app.touch("Data/settings/other.pid");
    app.touch("Data/settings/session.tmp");
    app.touch("Data/settings/readme.txt");

    cleanup(&app.root, &CleanupPlan::new(false));

    assert_eq!(files_in(&app.path("Data/settings")), vec!["readme.txt"]);
}

#[test]
fn temp_suffix_only_swept_when_enabled() {
    let app = AppFixture::new();
    app.touch("Data/settings/state.temp");

    cleanup(&app.root, &CleanupPlan::new(false));
    assert!(app.path("Data/settings/state.temp").exists());

    cleanup(&app.root, &CleanupPlan::new(true));
    assert!(!app.path("Data/settings/state.temp").exists());
}

#[test]
fn patterns_match_case_insensitively() {
    let app = AppFixture::new();
    app.touch("Data/settings/APP.LOCK");
    app.touch("Data/portableapps.comlauncherruntimedata-x.INI");

    cleanup(&app.root, &CleanupPlan::default());

    assert!(files_in(&app.path("Data/settings")).is_empty());
    assert_eq!(files_in(&app.path("Data")), vec!["settings"]);
}

#[test]
fn pid_files_in_data_root_removed_not_nested() {
    let app = AppFixture::new();
    app.touch("Data/app.pid");
    app.touch("Data/profile/app.pid");

    cleanup(&app.root, &CleanupPlan::default());

    assert!(!app.path("Data/app.pid").exists());
    assert!(app.path("Data/profile/app.pid").exists());
}

#[test]
fn temp_dir_cleared_without_recursing() {
    let app = AppFixture::new();
    app.touch("Data/Temp/a.dat");
    app.touch("Data/Temp/b");
    app.mkdir("Data/Temp/empty");
    app.touch("Data/Temp/full/keep.dat");

    let report = cleanup(&app.root, &CleanupPlan::default());

    assert_eq!(files_in(&app.path("Data/Temp")), vec!["full"]);
    assert!(app.path("Data/Temp/full/keep.dat").exists());
    assert_eq!(report.removed, 3);
    assert_eq!(report.failed, 1);
}

#[test]
fn second_run_is_a_no_op() {
    let app = AppFixture::new();
    app.touch("Data/PortableApps.comLauncherRuntimeData-1.ini");
    app.touch("Data/settings/app.lock");
    app.touch("Data/x.pid");
    app.touch("Data/Temp/junk");

    let first = cleanup(&app.root, &CleanupPlan::default());
    assert_eq!(first.removed, 4);

    let second = cleanup(&app.root, &CleanupPlan::default());
    assert_eq!(second.removed, 0);
    assert_eq!(second.failed, 0);
}

#[test]
fn plan_order_is_fixed() {
    let plan = CleanupPlan::new(true);
    let rules: Vec<(&str, &str)> = plan.rules.iter().map(|r| (r.dir, r.pattern)).collect();
    assert_eq!(
        rules,
        vec![
            ("", "PortableApps.comLauncherRuntimeData-*.ini"),
            ("settings", "*.lock"),
            ("settings", "*.pid"),
            ("settings", "*.tmp"),
            ("settings", "*.temp"),
            ("", "*.pid"),
            ("Temp", "*"),
        ]
    );
    assert_eq!(plan.rules.last().unwrap().action, CleanupAction::DeleteFileOrEmptyDir);
    assert!(plan.rules[..plan.rules.len() - 1].iter().all(|r| r.action == CleanupAction::DeleteFile));
}
