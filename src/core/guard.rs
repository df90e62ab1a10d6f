//! Guard predicates that admit or reject an action in a given state.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate deciding whether an action may run from a state.
///
/// Guards are evaluated before a handler touches anything. When a guard
/// rejects, the action is a no-op.
///
/// # Example
///
/// ```rust
/// use tallyho::core::{Guard, State};
/// use tallyho::machine::Phase;
///
/// let not_broken = Guard::new(|phase: &Phase| !phase.is_error());
///
/// assert!(not_broken.check(&Phase::Entering));
/// assert!(!not_broken.check(&Phase::ErrorState));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard admits this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
