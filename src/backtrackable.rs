use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser combinator that reports no progress, whatever the inner parser did.
///
/// A failure inside a backtrackable parser lets an enclosing `one_of` move on
/// to its next alternative even if input was consumed.
#[derive(Debug, Clone)]
pub struct Backtrackable<P> {
    parser: P,
}

impl<P: Parser> Parser for Backtrackable<P> {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, P::Output> {
        self.parser.parse(state).with_progress(false)
    }
}

pub fn backtrackable<P: Parser>(parser: P) -> Backtrackable<P> {
    Backtrackable { parser }
}

pub trait BacktrackableExt: Parser + Sized {
    fn backtrackable(self) -> Backtrackable<Self> {
        backtrackable(self)
    }
}

impl<P> BacktrackableExt for P where P: Parser {}
