//! Delimited, separated lists such as `[1, 2, 3]` or `{ x = 1; y = 2 }`.

use crate::looping::LoopStep;
use crate::one_of::either;
use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;
use crate::token::{Token, match_token};

/// Policy for a separator after the last item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    Forbidden,
    Optional,
    Mandatory,
}

/// Description of a sequence: delimiters, separator, the whitespace allowed
/// between them, the item parser and the trailing separator policy
#[derive(Debug, Clone)]
pub struct SequenceConfig<X, S, P> {
    pub start: Token<X>,
    pub separator: Token<X>,
    pub end: Token<X>,
    pub spaces: S,
    pub item: P,
    pub trailing: Trailing,
}

/// Parser for a sequence described by a [`SequenceConfig`].
///
/// An item or separator that fails after consuming input fails the whole
/// sequence.
#[derive(Debug, Clone)]
pub struct Sequence<X, S, P> {
    config: SequenceConfig<X, S, P>,
}

type Iteration<C, X, T> = Step<C, X, LoopStep<T, ()>>;

impl<X, S, P> Sequence<X, S, P>
where
    X: Clone,
    P: Parser<Problem = X>,
    S: Parser<Context = P::Context, Problem = X, Output = ()>,
{
    fn sequence_end(&self, state: State<P::Context>) -> Step<P::Context, X, Vec<P::Output>> {
        either(
            state,
            |state| {
                self.config
                    .item
                    .parse(state)
                    .then(|item, state| self.chomp_rest(item, state))
            },
            |state| match_token(&self.config.end, state).map_value(|()| Vec::new()),
        )
    }

    fn chomp_rest(
        &self,
        item: P::Output,
        state: State<P::Context>,
    ) -> Step<P::Context, X, Vec<P::Output>> {
        let items = vec![item];
        match self.config.trailing {
            Trailing::Forbidden => self.repeat(items, state, Self::end_forbidden),
            Trailing::Optional => self.repeat(items, state, Self::end_optional),
            Trailing::Mandatory => self
                .config
                .spaces
                .parse(state)
                .then(|(), state| match_token(&self.config.separator, state))
                .then(|(), state| self.config.spaces.parse(state))
                .then(|(), state| self.repeat(items, state, Self::end_mandatory))
                .then(|items, state| match_token(&self.config.end, state).map_value(|()| items)),
        }
    }

    /// Run `iteration` until it reports `Done`, collecting items in source order
    fn repeat(
        &self,
        mut items: Vec<P::Output>,
        state: State<P::Context>,
        iteration: fn(&Self, State<P::Context>) -> Iteration<P::Context, X, P::Output>,
    ) -> Step<P::Context, X, Vec<P::Output>> {
        let mut progress = false;
        let mut state = state;

        loop {
            match iteration(self, state) {
                Step::Good {
                    progress: moved,
                    value: LoopStep::Loop(item),
                    state: next,
                } => {
                    progress |= moved;
                    items.push(item);
                    state = next;
                }
                Step::Good {
                    progress: moved,
                    value: LoopStep::Done(()),
                    state,
                } => return Step::good(progress || moved, items, state),
                Step::Bad {
                    progress: moved,
                    bag,
                    trace,
                } => {
                    return Step::Bad {
                        progress: progress || moved,
                        bag,
                        trace,
                    };
                }
            }
        }
    }

    fn separator_then<T, F>(&self, state: State<P::Context>, next: F) -> Step<P::Context, X, T>
    where
        F: FnOnce(State<P::Context>) -> Step<P::Context, X, T>,
    {
        match_token(&self.config.separator, state)
            .then(|(), state| self.config.spaces.parse(state))
            .then(|(), state| next(state))
    }

    fn parse_end(&self, state: State<P::Context>) -> Iteration<P::Context, X, P::Output> {
        match_token(&self.config.end, state).map_value(|()| LoopStep::Done(()))
    }

    fn end_forbidden(&self, state: State<P::Context>) -> Iteration<P::Context, X, P::Output> {
        self.config.spaces.parse(state).then(|(), state| {
            either(
                state,
                |state| {
                    self.separator_then(state, |state| {
                        self.config.item.parse(state).map_value(LoopStep::Loop)
                    })
                },
                |state| self.parse_end(state),
            )
        })
    }

    fn end_optional(&self, state: State<P::Context>) -> Iteration<P::Context, X, P::Output> {
        self.config.spaces.parse(state).then(|(), state| {
            either(
                state,
                |state| {
                    self.separator_then(state, |state| {
                        either(
                            state,
                            |state| self.config.item.parse(state).map_value(LoopStep::Loop),
                            |state| self.parse_end(state),
                        )
                    })
                },
                |state| self.parse_end(state),
            )
        })
    }

    fn end_mandatory(&self, state: State<P::Context>) -> Iteration<P::Context, X, P::Output> {
        either(
            state,
            |state| {
                self.config.item.parse(state).then(|item, state| {
                    self.config
                        .spaces
                        .parse(state)
                        .then(|(), state| {
                            self.separator_then(state, |state| {
                                Step::good(false, LoopStep::Loop(item), state)
                            })
                        })
                })
            },
            |state| Step::good(false, LoopStep::Done(()), state),
        )
    }
}

impl<X, S, P> Parser for Sequence<X, S, P>
where
    X: Clone,
    P: Parser<Problem = X>,
    S: Parser<Context = P::Context, Problem = X, Output = ()>,
{
    type Context = P::Context;
    type Problem = X;
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, X, Vec<P::Output>> {
        match_token(&self.config.start, state)
            .then(|(), state| self.config.spaces.parse(state))
            .then(|(), state| self.sequence_end(state))
    }
}

/// Example:
/// ```
/// use chompcomb::{SequenceConfig, Token, Trailing, int, run, sequence, spaces};
///
/// let list = sequence(SequenceConfig {
///     start: Token::new("[", "expecting ["),
///     separator: Token::new(",", "expecting ,"),
///     end: Token::new("]", "expecting ]"),
///     spaces: spaces::<(), &str>(),
///     item: int("expecting int", "invalid int"),
///     trailing: Trailing::Forbidden,
/// });
/// assert_eq!(run(&list, "[ 1, 2 ,3 ]"), Ok(vec![1, 2, 3]));
/// assert_eq!(run(&list, "[]"), Ok(vec![]));
/// assert!(run(&list, "[1,]").is_err());
/// ```
pub fn sequence<X, S, P>(config: SequenceConfig<X, S, P>) -> Sequence<X, S, P>
where
    X: Clone,
    P: Parser<Problem = X>,
    S: Parser<Context = P::Context, Problem = X, Output = ()>,
{
    Sequence { config }
}
