/// SharedBasis — hand-off of the latest basis to a render thread.
///
/// The input thread owns the Camera, ticks it, then publishes the finished
/// basis. The render thread only ever sees complete bases: it takes a copy
/// under the read lock and never touches the Pose.

use std::sync::{Arc, RwLock};
use super::basis::Basis;

#[derive(Debug, Clone, Copy)]
struct Published {
    basis: Basis,
    generation: u64,
}

/// Cloneable handle to the last published basis.
#[derive(Debug, Clone)]
pub struct SharedBasis {
    inner: Arc<RwLock<Published>>,
}

impl SharedBasis {
    /// Start with `basis` as generation 0.
    pub fn new(basis: Basis) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Published { basis, generation: 0 })),
        }
    }

    /// Replace the published basis and bump the generation.
    pub fn publish(&self, basis: Basis) {
        // Basis is Copy and written in one assignment, a poisoned lock still holds a whole value
        let mut lock = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        lock.basis = basis;
        lock.generation += 1;
    }

    /// Copy of the last published basis.
    pub fn snapshot(&self) -> Basis {
        self.read().basis
    }

    /// Number of publishes so far.
    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    fn read(&self) -> Published {
        *self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "shared_basis_tests.rs"]
mod tests;
