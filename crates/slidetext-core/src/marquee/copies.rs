//! L4 Atomic Layer: Duplication manager
//!
//! Owns the transient copies of the primary label for one slide session.

use tracing::debug;

use super::content::{Instance, Label};

/// Number of copies a session needs for a gap-free loop
pub const COPY_COUNT: usize = 2;

/// The copies alive in the current session (zero or two)
#[derive(Debug, Clone)]
pub struct CopySet<S> {
    copies: Vec<Label<S>>,
}

impl<S> Default for CopySet<S> {
    fn default() -> Self {
        Self { copies: Vec::new() }
    }
}

impl<S: Clone> CopySet<S> {
    /// Replace any existing copies with fresh snapshots of `primary`
    pub fn spawn(&mut self, primary: &Label<S>) -> [Instance; COPY_COUNT] {
        self.copies.clear();
        self.copies
            .extend(std::iter::repeat_with(|| primary.snapshot()).take(COPY_COUNT));
        debug!(count = COPY_COUNT, "marquee copies spawned");
        [Instance::Copy(0), Instance::Copy(1)]
    }
}

impl<S> CopySet<S> {
    /// Remove all copies, returning how many were released
    pub fn destroy(&mut self) -> usize {
        let released = self.copies.len();
        self.copies.clear();
        if released > 0 {
            debug!(released, "marquee copies destroyed");
        }
        released
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.copies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Label<S>> {
        self.copies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Instance, &Label<S>)> {
        self.copies
            .iter()
            .enumerate()
            .map(|(i, label)| (Instance::Copy(i), label))
    }
}
