use std::sync::Arc;

use crate::state::State;
use crate::step::Step;

/// Core parser trait for parser combinators
///
/// `Context` tags regions of the grammar for diagnostics and `Problem`
/// describes what was expected at a dead end. The engine never inspects
/// either, it only stores and forwards them.
pub trait Parser {
    type Context: Clone;
    type Problem: Clone;
    type Output;

    /// Run the parser on `state`.
    ///
    /// Implementations never mutate shared data; the returned step carries the
    /// new state on success.
    fn parse(
        &self,
        state: State<Self::Context>,
    ) -> Step<Self::Context, Self::Problem, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(
        &self,
        state: State<Self::Context>,
    ) -> Step<Self::Context, Self::Problem, Self::Output> {
        (**self).parse(state)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(
        &self,
        state: State<Self::Context>,
    ) -> Step<Self::Context, Self::Problem, Self::Output> {
        (**self).parse(state)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(
        &self,
        state: State<Self::Context>,
    ) -> Step<Self::Context, Self::Problem, Self::Output> {
        (**self).parse(state)
    }
}
