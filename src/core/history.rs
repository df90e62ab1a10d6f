//! Transition log.
//!
//! Every action a machine accepts leaves a record of which state it moved
//! from, which state it landed in, and what triggered the move. The log is
//! optionally bounded so a long-running session does not grow without limit.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// `from` and `to` may be equal: an action that leaves the phase unchanged
/// (typing a second digit, say) is still recorded.
///
/// # Example
///
/// ```rust
/// use tallyho::core::StateTransition;
/// use tallyho::machine::Phase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Entering,
///     to: Phase::OperatorPending,
///     trigger: "operator +".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "operator +");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Label of the action that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state transitions.
///
/// `record` consumes the log and hands back the extended one, so the usual
/// pattern is `history = history.record(t)`. When a limit is set, the oldest
/// entries are dropped once it is exceeded.
///
/// # Example
///
/// ```rust
/// use tallyho::core::{StateHistory, StateTransition};
/// use tallyho::machine::Phase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Entering,
///         to: Phase::OperatorPending,
///         trigger: "operator *".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Phase::OperatorPending,
///         to: Phase::Chaining,
///         trigger: "digit 4".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Entering, &Phase::OperatorPending, &Phase::Chaining]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Append a transition, dropping the oldest ones past the limit.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first retained transition followed
    /// by the `to` state of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last retained transition.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// The retention limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Phase;

    fn step(from: Phase, to: Phase, trigger: &str) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_appends_in_order() {
        let history = StateHistory::new()
            .record(step(Phase::Entering, Phase::Entering, "digit 7"))
            .record(step(Phase::Entering, Phase::OperatorPending, "operator /"))
            .record(step(Phase::OperatorPending, Phase::Chaining, "digit 2"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.transitions()[1].trigger, "operator /");
        assert_eq!(
            history.get_path(),
            vec![
                &Phase::Entering,
                &Phase::Entering,
                &Phase::OperatorPending,
                &Phase::Chaining
            ]
        );
    }

    #[test]
    fn limit_drops_oldest_entries() {
        let history = StateHistory::with_limit(2)
            .record(step(Phase::Entering, Phase::Entering, "digit 1"))
            .record(step(Phase::Entering, Phase::OperatorPending, "operator +"))
            .record(step(Phase::OperatorPending, Phase::Chaining, "digit 2"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].trigger, "operator +");
        assert_eq!(history.get_path()[0], &Phase::Entering);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let history =
            StateHistory::with_limit(0).record(step(Phase::Entering, Phase::Entering, "dot"));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: Phase::Entering,
                to: Phase::OperatorPending,
                trigger: "operator -".to_string(),
                timestamp: start,
            })
            .record(StateTransition {
                from: Phase::OperatorPending,
                to: Phase::Chaining,
                trigger: "digit 3".to_string(),
                timestamp: start + chrono::Duration::milliseconds(25),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history = StateHistory::new().record(step(Phase::Entering, Phase::Entering, "clear"));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_with_limit() {
        let history = StateHistory::with_limit(8)
            .record(step(Phase::Chaining, Phase::Evaluated, "equals"));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.limit(), Some(8));
        assert_eq!(back.transitions()[0].to, Phase::Evaluated);
    }
}
