// src/progress.rs
/// Lightweight progress reporting for the pipeline (resolve, fetch, analyze).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pipeline steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one pipeline step completes.
    fn step_done(&mut self, _step: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
