//! Primitives that consume characters without producing a value.
//!
//! Pair them with [`get_chomped_string`](crate::map::get_chomped_string) to
//! read the consumed text.

use std::marker::PhantomData;

use crate::error::Bag;
use crate::parser::Parser;
use crate::scanner::{self, SubChar};
use crate::state::State;
use crate::step::Step;
use crate::token::Token;

/// Parser that consumes exactly one character matching a predicate
#[derive(Debug, Clone)]
pub struct ChompIf<C, X, F> {
    predicate: F,
    problem: X,
    _marker: PhantomData<fn() -> C>,
}

impl<C, X, F> Parser for ChompIf<C, X, F>
where
    C: Clone,
    X: Clone,
    F: Fn(char) -> bool,
{
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        match scanner::is_sub_char(&self.predicate, state.offset(), state.source()) {
            SubChar::Miss => Step::bad(false, self.problem.clone(), &state),
            step => Step::good(true, (), state.chomp_char(step)),
        }
    }
}

pub fn chomp_if<C, X, F>(predicate: F, problem: X) -> ChompIf<C, X, F>
where
    F: Fn(char) -> bool,
{
    ChompIf {
        predicate,
        problem,
        _marker: PhantomData,
    }
}

/// Parser that consumes zero or more characters matching a predicate
#[derive(Debug, Clone)]
pub struct ChompWhile<C, X, F> {
    predicate: F,
    _marker: PhantomData<fn() -> (C, X)>,
}

impl<C, X, F> Parser for ChompWhile<C, X, F>
where
    C: Clone,
    X: Clone,
    F: Fn(char) -> bool,
{
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        let start = state.offset();
        let mut state = state;

        loop {
            match scanner::is_sub_char(&self.predicate, state.offset(), state.source()) {
                SubChar::Miss => break,
                step => state = state.chomp_char(step),
            }
        }

        Step::good(state.offset() > start, (), state)
    }
}

pub fn chomp_while<C, X, F>(predicate: F) -> ChompWhile<C, X, F>
where
    F: Fn(char) -> bool,
{
    ChompWhile {
        predicate,
        _marker: PhantomData,
    }
}

/// Parser that consumes everything up to, not including, a literal.
///
/// Fails without progress, at the end of the input, when the literal never
/// appears.
#[derive(Debug, Clone)]
pub struct ChompUntil<C, X> {
    token: Token<X>,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Clone, X: Clone> Parser for ChompUntil<C, X> {
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        let (found, row, col) = scanner::find_sub_string(
            self.token.units(),
            state.offset(),
            state.row(),
            state.col(),
            state.source(),
        );

        match found {
            Some(offset) => {
                let progress = offset > state.offset();
                Step::good(progress, (), state.advance(offset, row, col))
            }
            None => Step::Bad {
                progress: false,
                bag: Bag::from_info(row, col, self.token.problem().clone(), &state),
                trace: state.trace().clone(),
            },
        }
    }
}

pub fn chomp_until<C, X>(token: Token<X>) -> ChompUntil<C, X> {
    ChompUntil {
        token,
        _marker: PhantomData,
    }
}

/// Parser that consumes everything up to a literal, or to the end of input
/// when the literal never appears
#[derive(Debug, Clone)]
pub struct ChompUntilEndOr<C, X> {
    units: Vec<u16>,
    _marker: PhantomData<fn() -> (C, X)>,
}

impl<C: Clone, X: Clone> Parser for ChompUntilEndOr<C, X> {
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        let (found, row, col) = scanner::find_sub_string(
            &self.units,
            state.offset(),
            state.row(),
            state.col(),
            state.source(),
        );

        let offset = found.unwrap_or(state.source().len());
        let progress = offset > state.offset();
        Step::good(progress, (), state.advance(offset, row, col))
    }
}

pub fn chomp_until_end_or<C, X>(text: &str) -> ChompUntilEndOr<C, X> {
    ChompUntilEndOr {
        units: text.encode_utf16().collect(),
        _marker: PhantomData,
    }
}
