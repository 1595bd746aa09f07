use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use engine_logging::{engine_debug, engine_warn};

pub const DEFAULT_SUFFIX: &str = ".md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    /// Relative to the scan root.
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// A path the walk could not read. The rest of the tree is still scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub files: Vec<SourceFile>,
    pub issues: Vec<ScanIssue>,
}

/// Pre-order walk of `root` collecting non-directory entries whose name ends with `suffix`.
///
/// Siblings are visited in file-name order. Symlinks are never followed into.
pub fn scan(root: &Path, suffix: &str) -> ScanReport {
    let mut report = ScanReport::default();
    walk(root, Path::new(""), suffix, &mut report);
    engine_debug!(
        "Scanned {:?}: {} files, {} issues",
        root,
        report.files.len(),
        report.issues.len()
    );
    report
}

fn walk(root: &Path, relative: &Path, suffix: &str, report: &mut ScanReport) {
    let dir = if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    };
    let read_dir = match fs::read_dir(&dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            record(report, &dir, &err);
            return;
        }
    };

    let mut entries: Vec<DirEntry> = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => record(report, &dir, &err),
        }
    }
    entries.sort_by_key(DirEntry::file_name);

    for entry in entries {
        let path = relative.join(entry.file_name());
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                record(report, &path, &err);
                continue;
            }
        };

        if file_type.is_dir() {
            walk(root, &path, suffix, report);
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(suffix) {
            continue;
        }

        match entry.metadata().and_then(|meta| meta.modified()) {
            Ok(modified) => report.files.push(SourceFile {
                name,
                path,
                modified,
            }),
            Err(err) => record(report, &path, &err),
        }
    }
}

fn record(report: &mut ScanReport, path: &Path, err: &io::Error) {
    engine_warn!("Skipping unreadable path {:?}: {}", path, err);
    report.issues.push(ScanIssue {
        path: path.to_path_buf(),
        message: err.to_string(),
    });
}
