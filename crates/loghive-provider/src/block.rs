//! Pending/committed state for nested single-block attributes.

/// The candidate copies of a nested single block as reported by the host.
///
/// Hosts that re-diff partially applied configuration occasionally report
/// more than one candidate for an attribute whose schema allows a single
/// block. [`BlockState::select`] resolves that ambiguity deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockState<T> {
    /// Candidates from the pending change set
    pub pending: Vec<T>,

    /// Entries from the already-applied state
    pub committed: Vec<T>,
}

impl<T> Default for BlockState<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            committed: Vec::new(),
        }
    }
}

impl<T> BlockState<T> {
    /// A state holding a single pending block
    #[must_use]
    pub fn pending(block: T) -> Self {
        Self {
            pending: vec![block],
            committed: Vec::new(),
        }
    }

    /// A state holding a single committed block
    #[must_use]
    pub fn committed(block: T) -> Self {
        Self {
            pending: Vec::new(),
            committed: vec![block],
        }
    }

    /// Returns true if no candidate is present at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.committed.is_empty()
    }

    /// Iterate over every candidate, pending first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pending.iter().chain(self.committed.iter())
    }

    /// Resolve the single effective block.
    ///
    /// Picks the first pending candidate whose `marker` holds (the marker is
    /// a required field that distinguishes a real edit from a stale diff
    /// entry), falling back to the first committed entry when no pending
    /// candidate qualifies.
    pub fn select<F>(&self, marker: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.pending
            .iter()
            .find(|block| marker(block))
            .or_else(|| self.committed.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_selects_nothing() {
        let state: BlockState<String> = BlockState::default();
        assert!(state.is_empty());
        assert_eq!(state.select(|s| !s.is_empty()), None);
    }

    #[test]
    fn first_qualifying_pending_candidate_wins() {
        let state = BlockState {
            pending: vec![String::new(), "second".to_string(), "third".to_string()],
            committed: vec!["committed".to_string()],
        };
        assert_eq!(state.select(|s| !s.is_empty()).map(String::as_str), Some("second"));
    }

    #[test]
    fn committed_state_is_the_fallback() {
        let state = BlockState {
            pending: vec![String::new()],
            committed: vec!["committed".to_string()],
        };
        assert_eq!(
            state.select(|s| !s.is_empty()).map(String::as_str),
            Some("committed")
        );
    }
}
