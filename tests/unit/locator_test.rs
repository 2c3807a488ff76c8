//! View file discovery against real directory trees

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use viewscan::parser::LocatorOptions;
use viewscan::find_view_files;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "{}").unwrap();
}

fn relative(root: &Path, found: Vec<PathBuf>) -> Vec<String> {
    found
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

#[test]
fn finds_views_with_files_before_subdirectories() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), "Zeta/view.json");
    touch(tmp.path(), "Alpha/Popups/Edit/view.json");
    touch(tmp.path(), "Alpha/view.json");
    touch(tmp.path(), "Alpha/Popups/Edit/thumbnail.png");
    touch(tmp.path(), "Alpha/Popups/resource.json");

    let found = find_view_files(tmp.path(), &LocatorOptions::default()).unwrap();
    assert_eq!(
        relative(tmp.path(), found),
        vec!["Alpha/view.json", "Alpha/Popups/Edit/view.json", "Zeta/view.json"]
    );
}

#[test]
fn empty_tree_finds_nothing() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("a/b/c")).unwrap();
    assert!(find_view_files(tmp.path(), &LocatorOptions::default())
        .unwrap()
        .is_empty());
}

#[cfg(unix)]
#[test]
fn symlink_cycles_are_skipped_when_following_links() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), "Main/view.json");
    std::os::unix::fs::symlink(tmp.path(), tmp.path().join("Main/loop")).unwrap();

    let options = LocatorOptions {
        follow_links: true,
        ..LocatorOptions::default()
    };
    let found = find_view_files(tmp.path(), &options).unwrap();
    assert_eq!(relative(tmp.path(), found), vec!["Main/view.json"]);
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_followed_by_default() {
    let tmp = tempdir().unwrap();
    let outside = tempdir().unwrap();
    touch(outside.path(), "Shared/view.json");
    std::os::unix::fs::symlink(outside.path(), tmp.path().join("linked")).unwrap();

    let found = find_view_files(tmp.path(), &LocatorOptions::default()).unwrap();
    assert!(found.is_empty());

    let options = LocatorOptions {
        follow_links: true,
        ..LocatorOptions::default()
    };
    let found = find_view_files(tmp.path(), &options).unwrap();
    assert_eq!(relative(tmp.path(), found), vec!["linked/Shared/view.json"]);
}
