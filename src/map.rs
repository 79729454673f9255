use super::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = U;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, U> {
        self.parser.parse(state).map_value(&self.mapper)
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator that hands the text consumed by a parser, along with its
/// value, to a function
#[derive(Debug, Clone)]
pub struct MapChompedString<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F, U> Parser for MapChompedString<P, F>
where
    P: Parser,
    F: Fn(String, P::Output) -> U,
{
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = U;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, U> {
        let start = state.offset();
        match self.parser.parse(state) {
            Step::Good {
                progress,
                value,
                state,
            } => {
                let chomped = state.slice(start, state.offset());
                Step::good(progress, (self.mapper)(chomped, value), state)
            }
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

pub fn map_chomped_string<P, F, U>(parser: P, mapper: F) -> MapChompedString<P, F>
where
    P: Parser,
    F: Fn(String, P::Output) -> U,
{
    MapChompedString { parser, mapper }
}

fn keep_chomped<T>(chomped: String, _: T) -> String {
    chomped
}

/// Replace a parser's value with the text it consumed
pub fn get_chomped_string<P>(parser: P) -> MapChompedString<P, fn(String, P::Output) -> String>
where
    P: Parser,
{
    map_chomped_string(parser, keep_chomped::<P::Output>)
}

/// Extension trait to add .map() and chomped-string support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn map_chomped_string<F, U>(self, mapper: F) -> MapChompedString<Self, F>
    where
        F: Fn(String, Self::Output) -> U,
    {
        map_chomped_string(self, mapper)
    }

    fn get_chomped_string(self) -> MapChompedString<Self, fn(String, Self::Output) -> String> {
        get_chomped_string(self)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
