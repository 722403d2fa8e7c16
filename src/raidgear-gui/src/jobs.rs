//! Background request jobs.
//!
//! Rendering never blocks on HTTP: each request sequence runs on its own
//! thread and hands one result back over a channel the page polls every
//! frame.

use std::sync::mpsc::{self, Receiver};
use std::thread;

/// A request sequence running on a worker thread. The worker sends
/// exactly one value; `poll` returns it on the frame it arrives.
pub struct Job<T> {
    rx: Receiver<T>,
}

impl<T: Send + 'static> Job<T> {
    /// Run `work` on a new thread and expose its result through the job.
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // Navigation may have dropped the receiver; nothing to do then
            let _ = tx.send(work());
        });
        Self { rx }
    }

    /// Non-blocking check for the worker's result
    pub fn poll(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Poll a job slot, clearing it on the frame the result arrives
    pub fn take(slot: &mut Option<Job<T>>) -> Option<T> {
        let result = slot.as_ref().and_then(Job::poll);
        if result.is_some() {
            *slot = None;
        }
        result
    }
}

/// Terminal state of a sequential mutation job. `Partial` means the
/// opening request committed and a later one failed, so the server now
/// holds a mixed state the user has to reconcile by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every request in the sequence succeeded
    Done(String),
    /// The opening request committed but the sequence died partway
    Partial(String),
    /// The opening request itself failed; nothing changed server-side
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_job_delivers_result() {
        let job = Job::spawn(|| 41 + 1);
        let mut result = None;
        for _ in 0..200 {
            if let Some(value) = job.poll() {
                result = Some(value);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(result, Some(42));
    }

    #[test]
    fn test_take_clears_slot() {
        let mut slot = Some(Job::spawn(|| "done"));
        let mut result = None;
        for _ in 0..200 {
            if let Some(value) = Job::take(&mut slot) {
                result = Some(value);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(result, Some("done"));
        assert!(slot.is_none());
    }

    #[test]
    fn test_poll_is_nonblocking_while_pending() {
        let job = Job::spawn(|| {
            thread::sleep(Duration::from_millis(200));
            1
        });
        // First poll happens well before the worker finishes
        assert!(job.poll().is_none());
    }
}
