//! Cooperative cancellation between pipeline stages and record iterations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::{LexAlignError, LexAlignResult};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Running engines stop at their next check.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fail with [`LexAlignError::Cancelled`] if cancellation was requested.
    pub fn check(&self, stage: &str) -> LexAlignResult<()> {
        if self.is_cancelled() {
            return Err(LexAlignError::Cancelled {
                stage: stage.to_string(),
            });
        }
        Ok(())
    }
}
