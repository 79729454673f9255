use super::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser combinator that runs two parsers in sequence and combines their values
///
/// The combined step has made progress when either parser did, so a failure
/// in the second parser after the first consumed input is a committed failure
/// for any enclosing choice.
#[derive(Debug, Clone)]
pub struct Map2<P1, P2, F> {
    parser1: P1,
    parser2: P2,
    combine: F,
}

impl<P1, P2, F> Map2<P1, P2, F> {
    pub fn new(parser1: P1, parser2: P2, combine: F) -> Self {
        Map2 {
            parser1,
            parser2,
            combine,
        }
    }
}

impl<P1, P2, F, U> Parser for Map2<P1, P2, F>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem>,
    F: Fn(P1::Output, P2::Output) -> U,
{
    type Context = P1::Context;
    type Problem = P1::Problem;
    type Output = U;

    fn parse(&self, state: State<P1::Context>) -> Step<P1::Context, P1::Problem, U> {
        self.parser1.parse(state).then(|a, state| {
            self.parser2
                .parse(state)
                .map_value(|b| (self.combine)(a, b))
        })
    }
}

pub fn map2<P1, P2, F, U>(parser1: P1, parser2: P2, combine: F) -> Map2<P1, P2, F>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem>,
    F: Fn(P1::Output, P2::Output) -> U,
{
    Map2::new(parser1, parser2, combine)
}

/// Sequence whose value is the pair of both values
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
pub type And<P1, P2> = Map2<
    P1,
    P2,
    fn(
        <P1 as Parser>::Output,
        <P2 as Parser>::Output,
    ) -> (<P1 as Parser>::Output, <P2 as Parser>::Output),
>;

/// Sequence that keeps the first value
pub type Keeper<P1, P2> =
    Map2<P1, P2, fn(<P1 as Parser>::Output, <P2 as Parser>::Output) -> <P1 as Parser>::Output>;

/// Sequence that keeps the second value
pub type Ignorer<P1, P2> =
    Map2<P1, P2, fn(<P1 as Parser>::Output, <P2 as Parser>::Output) -> <P2 as Parser>::Output>;

fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

fn first<A, B>(a: A, _: B) -> A {
    a
}

fn second<A, B>(_: A, b: B) -> B {
    b
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem>,
{
    Map2::new(parser1, parser2, pair::<P1::Output, P2::Output>)
}

/// Run both parsers, keep the value of the first
pub fn keeper<P1, P2>(parser1: P1, parser2: P2) -> Keeper<P1, P2>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem>,
{
    Map2::new(parser1, parser2, first::<P1::Output, P2::Output>)
}

/// Run both parsers, keep the value of the second
pub fn ignorer<P1, P2>(parser1: P1, parser2: P2) -> Ignorer<P1, P2>
where
    P1: Parser,
    P2: Parser<Context = P1::Context, Problem = P1::Problem>,
{
    Map2::new(parser1, parser2, second::<P1::Output, P2::Output>)
}

/// Extension trait to add sequencing methods to parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Context = Self::Context, Problem = Self::Problem>,
    {
        and(self, other)
    }

    fn map2<P, F, U>(self, other: P, combine: F) -> Map2<Self, P, F>
    where
        P: Parser<Context = Self::Context, Problem = Self::Problem>,
        F: Fn(Self::Output, P::Output) -> U,
    {
        map2(self, other, combine)
    }

    /// Run `other` after this parser and discard its value
    fn then_ignore<P>(self, other: P) -> Keeper<Self, P>
    where
        P: Parser<Context = Self::Context, Problem = Self::Problem>,
    {
        keeper(self, other)
    }

    /// Run `other` after this parser and keep only its value
    fn ignore_then<P>(self, other: P) -> Ignorer<Self, P>
    where
        P: Parser<Context = Self::Context, Problem = Self::Problem>,
    {
        ignorer(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::int;
    use crate::backtrackable::BacktrackableExt;
    use crate::token::{Token, TokenParser, token};
    use crate::{DeadEnd, run};

    type Outcome<T> = Result<T, Vec<DeadEnd<(), &'static str>>>;

    fn sym(text: &'static str) -> TokenParser<(), &'static str> {
        token(Token::new(text, text))
    }

    #[test]
    fn test_and_both_succeed() {
        let parser = int("int", "bad int").and(sym(","));
        let result: Outcome<(u64, ())> = run(&parser, "12,");
        assert_eq!(result, Ok((12, ())));
    }

    #[test]
    fn test_and_chain() {
        let parser = int("int", "bad int").then_ignore(sym(",")).and(int("int", "bad int"));
        let result: Outcome<(u64, u64)> = run(&parser, "1,2");
        assert_eq!(result, Ok((1, 2)));
    }

    #[test]
    fn test_ignore_then_keeps_second() {
        let parser = sym("(").ignore_then(int("int", "bad int")).then_ignore(sym(")"));
        let result: Outcome<u64> = run(&parser, "(42)");
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_map2_combines() {
        let parser = int("int", "bad int")
            .map2(sym("+").ignore_then(int("int", "bad int")), |a, b| a + b);
        let result: Outcome<u64> = run(&parser, "40+2");
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_second_failure_reports_its_position() {
        let parser = sym("(").ignore_then(int("int", "bad int"));
        let result: Outcome<u64> = run(&parser, "(x");
        let dead_ends = result.unwrap_err();
        assert_eq!(dead_ends.len(), 1);
        assert_eq!((dead_ends[0].col, dead_ends[0].problem), (2, "int"));
    }

    #[test]
    fn test_progress_is_or_of_both() {
        // first consumed, second did not
        let parser = sym("(").and(sym(")"));
        let step = parser.parse(State::new("(x"));
        assert!(!step.is_good());
        assert!(step.progress());

        // neither consumed from the caller's point of view
        let parser = sym("(").backtrackable().and(sym(")"));
        let step = parser.parse(State::new("(x"));
        assert!(!step.progress());
    }
}
