use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle to one in-flight classification.
#[derive(Debug, Clone, Default)]
pub struct ClassifyHandle {
    cancelled: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl ClassifyHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the completion if it has not fired yet.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
