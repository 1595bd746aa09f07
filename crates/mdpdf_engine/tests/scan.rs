use std::fs;
use std::path::{Path, PathBuf};

use mdpdf_engine::{scan, DEFAULT_SUFFIX};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

fn paths(root: &Path) -> Vec<PathBuf> {
    scan(root, DEFAULT_SUFFIX)
        .files
        .into_iter()
        .map(|file| file.path)
        .collect()
}

#[test]
fn collects_matching_files_in_preorder() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "b.md");
    touch(root, "a/z.md");
    touch(root, "a/inner/deep.md");
    touch(root, "a/notes.txt");
    touch(root, "c.md");
    touch(root, "README.MD");

    assert_eq!(
        paths(root),
        vec![
            PathBuf::from("a/inner/deep.md"),
            PathBuf::from("a/z.md"),
            PathBuf::from("b.md"),
            PathBuf::from("c.md"),
        ]
    );
}

#[test]
fn suffix_match_is_exact_and_case_sensitive() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "keep.md");
    touch(root, "upper.MD");
    touch(root, "nearly.mdx");
    touch(root, "plainmd");

    assert_eq!(paths(root), vec![PathBuf::from("keep.md")]);
}

#[test]
fn directories_named_like_candidates_are_skipped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("folder.md")).unwrap();
    touch(root, "folder.md/inside.md");

    assert_eq!(paths(root), vec![PathBuf::from("folder.md/inside.md")]);
}

#[test]
fn entries_carry_name_and_modification_time() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "docs/guide.md");

    let report = scan(root, ".md");
    assert!(report.issues.is_empty());
    let file = &report.files[0];
    assert_eq!(file.name, "guide.md");
    assert_eq!(file.path, PathBuf::from("docs/guide.md"));
    assert_eq!(
        file.modified,
        fs::metadata(root.join("docs/guide.md"))
            .unwrap()
            .modified()
            .unwrap()
    );
}

#[test]
fn custom_suffix_is_honoured() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "one.markdown");
    touch(root, "two.md");

    let report = scan(root, ".markdown");
    let names: Vec<_> = report.files.into_iter().map(|file| file.name).collect();
    assert_eq!(names, vec!["one.markdown"]);
}

#[test]
fn empty_tree_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let report = scan(temp.path(), DEFAULT_SUFFIX);
    assert!(report.files.is_empty());
    assert!(report.issues.is_empty());
}

#[test]
fn unreadable_root_is_reported() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone");

    let report = scan(&missing, DEFAULT_SUFFIX);
    assert!(report.files.is_empty());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].path, missing);
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_followed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "real/page.md");
    std::os::unix::fs::symlink(root.join("real"), root.join("loop")).unwrap();
    std::os::unix::fs::symlink(root, root.join("real/up")).unwrap();

    assert_eq!(paths(root), vec![PathBuf::from("real/page.md")]);
}
