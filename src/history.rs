//! Bounded linear undo/redo over scene snapshots.
//!
//! ## Model
//!
//! ```text
//! undo: [baseline, s1, s2, ..., current]   (front evicted past capacity)
//! redo: [..., next]                        (cleared by every new record)
//! ```
//!
//! The top of `undo` is always the state the scene is currently in. The
//! bottom entry is the baseline: undo never pops past it.

use crate::constants::MAX_HISTORY_STATES;
use crate::scene::{Scene, Snapshot};
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl History {
    /// Start a history whose baseline is `initial`.
    ///
    /// A capacity of zero is treated as one so the baseline always fits.
    pub fn new(initial: Snapshot, capacity: usize) -> Self {
        let mut undo = VecDeque::with_capacity(capacity.max(1));
        undo.push_back(initial);
        Self {
            undo,
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Checkpoint the scene's current state.
    ///
    /// Returns false when the state equals the newest checkpoint, in which
    /// case neither stack changes.
    pub fn record(&mut self, scene: &Scene) -> bool {
        self.push(scene.snapshot())
    }

    /// Checkpoint an already captured snapshot.
    pub fn push(&mut self, snapshot: Snapshot) -> bool {
        if self.undo.back() == Some(&snapshot) {
            return false;
        }
        self.undo.push_back(snapshot);
        if self.undo.len() > self.capacity {
            self.undo.pop_front();
            debug!(capacity = self.capacity, "oldest history state evicted");
        }
        self.redo.clear();
        debug!(undo_len = self.undo.len(), "history recorded");
        true
    }

    /// Step back one checkpoint, returning the state to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo.len() <= 1 {
            return None;
        }
        let current = self.undo.pop_back()?;
        self.redo.push(current);
        self.undo.back()
    }

    /// Re-apply the most recently undone checkpoint.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(next);
        self.undo.back()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The checkpoint matching the scene's current state.
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo.back()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default(), MAX_HISTORY_STATES)
    }
}
