use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, P::Output> {
        let parser = (self.factory)();
        parser.parse(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
