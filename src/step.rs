use crate::error::Bag;
use crate::state::{State, Trace};

/// Outcome of running a parser on a state.
///
/// `progress` records whether the offset moved relative to the state the
/// parser started from. Choice combinators only fall through to the next
/// alternative after a failure without progress.
#[derive(Debug)]
pub enum Step<C: Clone, X, T> {
    Good {
        progress: bool,
        value: T,
        state: State<C>,
    },
    Bad {
        progress: bool,
        bag: Bag<C, X>,
        trace: Trace<C>,
    },
}

impl<C: Clone, X, T> Step<C, X, T> {
    /// Successful step at `state`
    pub fn good(progress: bool, value: T, state: State<C>) -> Self {
        Step::Good {
            progress,
            value,
            state,
        }
    }

    /// Failed step reporting `problem` at the state's position
    pub fn bad(progress: bool, problem: X, state: &State<C>) -> Self {
        Step::Bad {
            progress,
            bag: Bag::from_state(state, problem),
            trace: state.trace().clone(),
        }
    }

    pub fn progress(&self) -> bool {
        match self {
            Step::Good { progress, .. } | Step::Bad { progress, .. } => *progress,
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Step::Good { .. })
    }

    /// Replace the progress flag on either outcome
    pub fn with_progress(self, progress: bool) -> Self {
        match self {
            Step::Good { value, state, .. } => Step::Good {
                progress,
                value,
                state,
            },
            Step::Bad { bag, trace, .. } => Step::Bad {
                progress,
                bag,
                trace,
            },
        }
    }

    /// OR `earlier` into the progress flag
    pub fn after(self, earlier: bool) -> Self {
        let progress = earlier || self.progress();
        self.with_progress(progress)
    }

    /// Continue with `next` after a success; progress is the OR of both stages
    pub fn then<U, F>(self, next: F) -> Step<C, X, U>
    where
        F: FnOnce(T, State<C>) -> Step<C, X, U>,
    {
        match self {
            Step::Good {
                progress,
                value,
                state,
            } => next(value, state).after(progress),
            Step::Bad {
                progress,
                bag,
                trace,
            } => Step::Bad {
                progress,
                bag,
                trace,
            },
        }
    }

    pub fn map_value<U, F>(self, f: F) -> Step<C, X, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Good {
                progress,
                value,
                state,
            } => Step::Good {
                progress,
                value: f(value),
                state,
            },
            Step::Bad {
                progress,
                bag,
                trace,
            } => Step::Bad {
                progress,
                bag,
                trace,
            },
        }
    }
}
