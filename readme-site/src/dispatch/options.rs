//! Dispatcher tuning.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Limits applied to the fetch fan-out.
///
/// The default is one task per repository, all in flight at once, with no
/// timeout: a hung request keeps the run waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Maximum number of tasks fetching at the same time.
    pub concurrency: Option<NonZeroUsize>,

    /// Maximum duration of a single task once it starts fetching.
    pub task_timeout: Option<Duration>,
}

impl DispatchOptions {
    /// Caps the number of concurrently fetching tasks.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Aborts tasks that take longer than `timeout`.
    #[must_use]
    pub fn with_task_timeout(mut self, timeout: Duration) -> Self {
        self.task_timeout = Some(timeout);
        self
    }
}
