//! Linear undo/redo history of snapshots.

/// A log of states with a cursor pointing at the current one.
///
/// The log is never empty and the cursor is always a valid index.
#[derive(Debug, Clone)]
pub struct History<T> {
    states: Vec<T>,
    index: usize,
    /// Maximum number of states to keep (None = unbounded).
    limit: Option<usize>,
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> History<T> {
    /// Create a history holding only `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            states: vec![initial],
            index: 0,
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` states, dropping the oldest.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    /// The state under the cursor.
    pub fn current(&self) -> &T {
        &self.states[self.index]
    }

    /// Record a new state.
    ///
    /// With `overwrite` the state under the cursor is replaced in place. Otherwise
    /// every state after the cursor is discarded, `state` is appended and the
    /// cursor advances onto it.
    pub fn push(&mut self, state: T, overwrite: bool) {
        if overwrite {
            self.states[self.index] = state;
            return;
        }

        self.states.truncate(self.index + 1);
        self.states.push(state);
        self.index += 1;

        if let Some(limit) = self.limit {
            let excess = self.states.len().saturating_sub(limit);
            if excess > 0 {
                self.states.drain(..excess);
                self.index -= excess;
            }
        }
    }

    /// Step back one state.
    /// Returns true if the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one state.
    /// Returns true if the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.states.len()
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of states in the log (always at least 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, oldest first.
    pub fn states(&self) -> &[T] {
        &self.states
    }
}
