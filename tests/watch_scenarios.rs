use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use jarvis_tools::watch::{diff, Fingerprints, WatchTarget};

type TestResult = Result<(), Box<dyn Error>>;

// The canonical directory-watch scenario: a pre-existing file is voiced on
// the first poll, silence until it is edited, then voiced again.
#[test]
fn directory_watch_reports_changes_across_polls() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.txt");
    fs::write(&file, "Hello")?;

    let target = WatchTarget::directory(dir.path(), "*.txt")?;

    // First poll: a.txt is newly observed, so it counts as changed.
    let (changed, fp) = diff(&Fingerprints::new(), &target)?;
    assert_eq!(changed, vec![file.clone()]);

    // Second poll, no edits: nothing to report.
    let (changed, fp) = diff(&fp, &target)?;
    assert!(changed.is_empty());

    // Edit the file: the next poll reports it changed again.
    fs::write(&file, "Hello world")?;
    let (changed, fp) = diff(&fp, &target)?;
    assert_eq!(changed, vec![file.clone()]);

    // And quiet again afterwards.
    let (changed, _) = diff(&fp, &target)?;
    assert!(changed.is_empty());

    Ok(())
}

#[test]
fn new_files_are_picked_up_mid_watch() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "first")?;

    let target = WatchTarget::directory(dir.path(), "*.txt")?;
    let (_, fp) = diff(&Fingerprints::new(), &target)?;

    fs::write(dir.path().join("b.txt"), "second")?;
    let (changed, _) = diff(&fp, &target)?;
    assert_eq!(changed, vec![dir.path().join("b.txt")]);

    Ok(())
}

#[test]
fn changed_files_are_reported_in_sorted_order() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("zebra.txt"), "z")?;
    fs::write(dir.path().join("apple.txt"), "a")?;
    fs::write(dir.path().join("mango.txt"), "m")?;

    let target = WatchTarget::directory(dir.path(), "*.txt")?;
    let (changed, _) = diff(&Fingerprints::new(), &target)?;

    let names: Vec<_> = changed
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["apple.txt", "mango.txt", "zebra.txt"]);

    Ok(())
}

#[test]
fn single_file_target_ignores_sibling_files() -> TestResult {
    let dir = tempdir()?;
    let watched = dir.path().join("watched.txt");
    fs::write(&watched, "watched")?;
    fs::write(dir.path().join("other.txt"), "ignored")?;

    let target = WatchTarget::single_file(&watched);
    let (changed, _) = diff(&Fingerprints::new(), &target)?;
    assert_eq!(changed, vec![watched]);

    Ok(())
}

#[test]
fn root_dir_for_file_target_is_its_parent() {
    let target = WatchTarget::single_file("/some/dir/file.txt");
    assert_eq!(target.root_dir(), PathBuf::from("/some/dir"));

    // A bare filename falls back to the working directory.
    let target = WatchTarget::single_file("file.txt");
    assert_eq!(target.root_dir(), PathBuf::from("."));
}
