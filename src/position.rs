use std::marker::PhantomData;

use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser that reads a value off the state without consuming anything
pub struct Getter<C: Clone, X, T> {
    read: fn(&State<C>) -> T,
    _marker: PhantomData<fn() -> X>,
}

impl<C: Clone, X, T> Clone for Getter<C, X, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clone, X, T> Copy for Getter<C, X, T> {}

impl<C: Clone, X: Clone, T> Parser for Getter<C, X, T> {
    type Context = C;
    type Problem = X;
    type Output = T;

    fn parse(&self, state: State<C>) -> Step<C, X, T> {
        let value = (self.read)(&state);
        Step::good(false, value, state)
    }
}

fn getter<C: Clone, X, T>(read: fn(&State<C>) -> T) -> Getter<C, X, T> {
    Getter {
        read,
        _marker: PhantomData,
    }
}

fn read_position<C: Clone>(state: &State<C>) -> (usize, usize) {
    (state.row(), state.col())
}

fn read_source<C: Clone>(state: &State<C>) -> String {
    state.slice(0, state.source().len())
}

/// Current `(row, col)`, both 1-based
pub fn get_position<C: Clone, X>() -> Getter<C, X, (usize, usize)> {
    getter(read_position)
}

pub fn get_row<C: Clone, X>() -> Getter<C, X, usize> {
    getter(State::row)
}

pub fn get_col<C: Clone, X>() -> Getter<C, X, usize> {
    getter(State::col)
}

/// Current offset in UTF-16 code units
pub fn get_offset<C: Clone, X>() -> Getter<C, X, usize> {
    getter(State::offset)
}

pub fn get_indent<C: Clone, X>() -> Getter<C, X, usize> {
    getter(State::indent)
}

/// The whole source text being parsed
pub fn get_source<C: Clone, X>() -> Getter<C, X, String> {
    getter(read_source)
}

/// The region of the source a parser consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Span {
    /// Length in code units
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A parser combinator that captures the span of a successful parse
#[derive(Debug, Clone)]
pub struct WithSpan<P> {
    parser: P,
}

impl<P> WithSpan<P> {
    pub fn new(parser: P) -> Self {
        WithSpan { parser }
    }
}

impl<P: Parser> Parser for WithSpan<P> {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = (P::Output, Span);

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, (P::Output, Span)> {
        let (start, start_row, start_col) = (state.offset(), state.row(), state.col());

        match self.parser.parse(state) {
            Step::Good {
                progress,
                value,
                state,
            } => {
                let span = Span {
                    start,
                    end: state.offset(),
                    start_row,
                    start_col,
                    end_row: state.row(),
                    end_col: state.col(),
                };
                Step::good(progress, (value, span), state)
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

/// Extension trait to add span tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to capture its span
    fn with_span(self) -> WithSpan<Self> {
        WithSpan::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a WithSpan combinator
pub fn with_span<P: Parser>(parser: P) -> WithSpan<P> {
    WithSpan::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::chomp::chomp_while;
    use crate::{DeadEnd, run};

    type Outcome<T> = Result<T, Vec<DeadEnd<(), &'static str>>>;

    #[test]
    fn test_getters_consume_nothing() {
        let step = get_position::<(), &str>().parse(State::new("abc"));
        assert!(!step.progress());
        assert!(matches!(step, Step::Good { value: (1, 1), .. }));
    }

    #[test]
    fn test_position_after_newline() {
        let parser = chomp_while(|c: char| c != 'x').ignore_then(get_position());
        let result: Outcome<(usize, usize)> = run(&parser, "ab\ncdx");
        assert_eq!(result, Ok((2, 3)));
    }

    #[test]
    fn test_offset_counts_code_units() {
        let parser = chomp_while(|c: char| c != 'x')
            .ignore_then(get_offset())
            .and(get_col());
        let result: Outcome<(usize, usize)> = run(&parser, "🦀x");
        assert_eq!(result, Ok((2, 2)));
    }

    #[test]
    fn test_get_source_and_row() {
        let parser = get_source().and(get_row());
        let result: Outcome<(String, usize)> = run(&parser, "a\nb");
        assert_eq!(result, Ok(("a\nb".to_string(), 1)));
    }

    #[test]
    fn test_with_span() {
        let word = chomp_while(|c: char| c.is_alphabetic());
        let parser = chomp_while(|c: char| c == ' ').ignore_then(word.with_span());
        let result: Outcome<((), Span)> = run(&parser, "  hello world");
        let ((), span) = result.unwrap();
        assert_eq!((span.start, span.end), (2, 7));
        assert_eq!((span.start_row, span.start_col), (1, 3));
        assert_eq!((span.end_row, span.end_col), (1, 8));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_with_span_across_lines() {
        let parser = with_span(chomp_while::<(), &str, _>(|c: char| c != '!'));
        let result: Outcome<((), Span)> = run(&parser, "ab\nc!");
        let ((), span) = result.unwrap();
        assert_eq!((span.end_row, span.end_col), (2, 2));
    }
}
