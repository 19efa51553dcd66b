use super::{apply_sync, plan_sync};
#[cfg(unix)]
use super::ENTRY_MODE;
use crate::entry::{KeyedRecord, ResolvedEntry, Value};
use std::fs;
use std::path::Path;

fn entry(name: &str) -> ResolvedEntry {
    let mut keys = KeyedRecord::new();
    keys.insert("Name".into(), Value::Text(name.to_string()));
    keys.insert("Exec".into(), Value::Text(format!("{name} --run")));
    ResolvedEntry::new(name, None, keys)
}

fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}

#[test]
fn stale_entry_is_deleted_and_current_entry_rewritten() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("foo.desktop"), "old foo").expect("write foo");
    fs::write(dir.path().join("bar.desktop"), "old bar").expect("write bar");

    let entries = vec![entry("foo")];
    let plan = plan_sync(dir.path(), &entries).expect("plan");
    assert_eq!(plan.leftovers, vec![dir.path().join("bar.desktop")]);
    assert_eq!(plan.writes.len(), 1);

    apply_sync(dir.path(), &plan).expect("apply");
    assert_eq!(list_dir(dir.path()), vec!["foo.desktop".to_string()]);
    assert_eq!(
        fs::read_to_string(dir.path().join("foo.desktop")).expect("read foo"),
        "[Desktop Entry]\nName=foo\nExec=foo --run"
    );
}

#[test]
fn unrelated_files_are_left_alone() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("notes.txt"), "keep").expect("write notes");
    fs::create_dir(dir.path().join("nested.desktop")).expect("create dir");

    let plan = plan_sync(dir.path(), &[]).expect("plan");
    assert!(plan.leftovers.is_empty());
    assert!(plan.writes.is_empty());

    apply_sync(dir.path(), &plan).expect("apply");
    assert_eq!(
        list_dir(dir.path()),
        vec!["nested.desktop".to_string(), "notes.txt".to_string()]
    );
}

#[test]
fn missing_directory_is_created_on_write() {
    let root = tempfile::tempdir().expect("temp dir");
    let dir = root.path().join("applications").join("crescent");

    let plan = plan_sync(&dir, &[entry("My App!")]).expect("plan");
    assert!(plan.leftovers.is_empty());
    apply_sync(&dir, &plan).expect("apply");

    assert_eq!(list_dir(&dir), vec!["My_App_.desktop".to_string()]);
}

#[test]
fn planning_changes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("bar.desktop"), "old bar").expect("write bar");

    let plan = plan_sync(dir.path(), &[entry("foo")]).expect("plan");
    assert_eq!(plan.leftovers.len(), 1);
    assert_eq!(list_dir(dir.path()), vec!["bar.desktop".to_string()]);
}

#[test]
fn empty_plan_still_creates_directory() {
    let root = tempfile::tempdir().expect("temp dir");
    let dir = root.path().join("applications").join("crescent");

    let plan = plan_sync(&dir, &[]).expect("plan");
    apply_sync(&dir, &plan).expect("apply");

    assert!(dir.is_dir());
    assert!(list_dir(&dir).is_empty());
}

#[cfg(unix)]
#[test]
fn written_entries_are_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("temp dir");
    let existing = dir.path().join("foo.desktop");
    fs::write(&existing, "old foo").expect("write foo");
    fs::set_permissions(&existing, fs::Permissions::from_mode(0o644)).expect("chmod foo");

    let plan = plan_sync(dir.path(), &[entry("foo"), entry("bar")]).expect("plan");
    apply_sync(dir.path(), &plan).expect("apply");

    for name in ["foo.desktop", "bar.desktop"] {
        let mode = fs::metadata(dir.path().join(name))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, ENTRY_MODE, "{name} mode {:o}", mode & 0o777);
    }
}
