// src/progress.rs
use crate::scrape::LetterReport;

/// Status reporting for a scrape run. Frontends implement this to surface
/// what the run is doing; every method defaults to a no-op.
pub trait Progress {
    /// Called once with the number of letters to walk.
    fn begin(&mut self, _letters: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One letter has been walked to its last page.
    fn letter_done(&mut self, _report: &LetterReport) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects log lines; useful when the caller wants them after the fact.
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub letters: Vec<LetterReport>,
    pub finished: bool,
}

impl Progress for Transcript {
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn letter_done(&mut self, report: &LetterReport) { self.letters.push(report.clone()); }
    fn finish(&mut self) { self.finished = true; }
}
