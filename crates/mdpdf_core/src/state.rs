use std::path::PathBuf;
use std::time::SystemTime;

use crate::view_model::{AppViewModel, CandidateRowView};

pub type JobId = u64;

/// A file the user can pick for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Path relative to the scan root.
    pub path: PathBuf,
    pub modified: SystemTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Converting,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Succeeded { output: PathBuf },
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveJob {
    job_id: JobId,
    index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    candidates: Vec<Candidate>,
    cursor: usize,
    mode: Mode,
    active: Option<ActiveJob>,
    error: Option<String>,
    last_output: Option<PathBuf>,
    scan_issues: usize,
    next_job_id: JobId,
    should_quit: bool,
    dirty: bool,
}

impl AppState {
    /// Candidates keep the order they were discovered in.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            dirty: true,
            ..Self::default()
        }
    }

    /// Number of paths the scan could not read; shown in the status line.
    pub fn with_scan_issues(mut self, count: usize) -> Self {
        self.scan_issues = count;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| CandidateRowView {
                name: candidate.name.clone(),
                path: candidate.path.clone(),
                modified: candidate.modified,
                selected: index == self.cursor,
            })
            .collect();

        AppViewModel {
            mode: self.mode,
            rows,
            cursor: (!self.candidates.is_empty()).then_some(self.cursor),
            converting: self
                .active
                .and_then(|job| self.candidates.get(job.index))
                .map(|candidate| candidate.name.clone()),
            error: self.error.clone(),
            last_output: self.last_output.clone(),
            scan_issues: self.scan_issues,
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.mark_dirty();
        }
    }

    pub(crate) fn cursor_down(&mut self) {
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
            self.mark_dirty();
        }
    }

    pub(crate) fn cursor_top(&mut self) {
        if self.cursor != 0 {
            self.cursor = 0;
            self.mark_dirty();
        }
    }

    pub(crate) fn cursor_bottom(&mut self) {
        let last = self.candidates.len().saturating_sub(1);
        if self.cursor != last {
            self.cursor = last;
            self.mark_dirty();
        }
    }

    /// Moves Idle to Converting for the selected row. `None` when the list is empty.
    pub(crate) fn begin_conversion(&mut self) -> Option<(JobId, PathBuf)> {
        let source = self.candidates.get(self.cursor)?.path.clone();
        self.next_job_id += 1;
        let job_id = self.next_job_id;
        self.active = Some(ActiveJob {
            job_id,
            index: self.cursor,
        });
        self.mode = Mode::Converting;
        self.last_output = None;
        self.mark_dirty();
        Some((job_id, source))
    }

    /// Applies a completion for the in-flight job. Stale ids return false.
    pub(crate) fn finish_conversion(&mut self, job_id: JobId, result: ConversionResult) -> bool {
        match self.active {
            Some(active) if active.job_id == job_id => {}
            _ => return false,
        }
        self.active = None;
        match result {
            ConversionResult::Succeeded { output } => {
                self.mode = Mode::Idle;
                self.last_output = Some(output);
            }
            ConversionResult::Failed { message } => {
                self.mode = Mode::Error;
                self.error = Some(message);
            }
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn dismiss_error(&mut self) {
        self.error = None;
        self.mode = Mode::Idle;
        self.mark_dirty();
    }

    pub(crate) fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
