use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser combinator that picks the next parser based on the value of the first
#[derive(Debug, Clone)]
pub struct AndThen<P, F> {
    parser: P,
    callback: F,
}

impl<P, F, Q> Parser for AndThen<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Context = P::Context, Problem = P::Problem>,
{
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = Q::Output;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, Q::Output> {
        self.parser
            .parse(state)
            .then(|value, state| (self.callback)(value).parse(state))
    }
}

pub fn and_then<P, F, Q>(parser: P, callback: F) -> AndThen<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Context = P::Context, Problem = P::Problem>,
{
    AndThen { parser, callback }
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt: Parser + Sized {
    fn and_then<F, Q>(self, callback: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<Context = Self::Context, Problem = Self::Problem>,
    {
        and_then(self, callback)
    }
}

impl<P> AndThenExt for P where P: Parser {}
