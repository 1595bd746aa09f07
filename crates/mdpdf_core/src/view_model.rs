use std::path::PathBuf;
use std::time::SystemTime;

use crate::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: Mode,
    pub rows: Vec<CandidateRowView>,
    /// `None` when there is nothing to select.
    pub cursor: Option<usize>,
    /// Display name of the file being converted.
    pub converting: Option<String>,
    pub error: Option<String>,
    /// Output of the most recent successful conversion.
    pub last_output: Option<PathBuf>,
    pub scan_issues: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRowView {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
    pub selected: bool,
}
