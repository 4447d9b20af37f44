//! Graph traversal algorithms
//!
//! Pathfinding and neighborhood expansion over the adjacency index. The
//! algorithms are synchronous and CPU-bound; long traversals check a
//! cooperative cancellation flag between BFS layers so an abandoned UI
//! interaction can stop wasted work.

pub mod expand;
pub mod pathfinding;

pub use expand::{expand, Expansion, MAX_EXPANSION_DEPTH};
pub use pathfinding::{shortest_path, Path, PathOptions, PathOutcome};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a caller and a running
/// traversal. Cancelling never corrupts state: traversals hold no partial
/// mutation, they just return `GraphError::Cancelled` early.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_flag() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());

        let clone = flag.clone();
        clone.cancel();
        assert!(flag.is_cancelled());
    }
}
