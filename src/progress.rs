// src/progress.rs
/// Lightweight progress reporting used by the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of episode pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one episode has been fetched and tallied.
    fn episode_done(&mut self, _n: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per tallied episode to stdout.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn episode_done(&mut self, n: usize) {
        println!("Finished episode {n}");
    }
}
