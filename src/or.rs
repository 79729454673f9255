use super::parser::Parser;
use crate::one_of::either;
use crate::state::State;
use crate::step::Step;

/// Parser combinator that tries the first parser, and if it fails without
/// consuming input, tries the second parser
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem, Output = P1::Output>,
{
    type Context = P1::Context;
    type Problem = P1::Problem;
    type Output = P1::Output;

    fn parse(&self, state: State<P1::Context>) -> Step<P1::Context, P1::Problem, P1::Output> {
        either(state, |s| self.parser1.parse(s), |s| self.parser2.parse(s))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Context = Self::Context, Problem = Self::Problem, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
