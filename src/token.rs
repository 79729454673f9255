use std::marker::PhantomData;

use crate::parser::Parser;
use crate::scanner::{self, SubChar};
use crate::state::State;
use crate::step::Step;

/// A literal string paired with the problem to report when it is missing
#[derive(Debug, Clone, PartialEq)]
pub struct Token<X> {
    text: String,
    units: Vec<u16>,
    problem: X,
}

impl<X> Token<X> {
    pub fn new(text: impl Into<String>, problem: X) -> Self {
        let text = text.into();
        let units = text.encode_utf16().collect();
        Token {
            text,
            units,
            problem,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn problem(&self) -> &X {
        &self.problem
    }

    /// The literal as UTF-16 code units
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Match `token` at the state's offset. Progress is made iff the literal is
/// non-empty.
pub(crate) fn match_token<C: Clone, X: Clone>(token: &Token<X>, state: State<C>) -> Step<C, X, ()> {
    let (found, row, col) = scanner::is_sub_string(
        token.units(),
        state.offset(),
        state.row(),
        state.col(),
        state.source(),
    );

    match found {
        Some(offset) => Step::good(!token.is_empty(), (), state.advance(offset, row, col)),
        None => Step::bad(false, token.problem.clone(), &state),
    }
}

/// Parser that matches a literal string exactly
#[derive(Debug, Clone)]
pub struct TokenParser<C, X> {
    token: Token<X>,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Clone, X: Clone> Parser for TokenParser<C, X> {
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        match_token(&self.token, state)
    }
}

pub fn token<C, X>(token: Token<X>) -> TokenParser<C, X> {
    TokenParser {
        token,
        _marker: PhantomData,
    }
}

/// Same as [`token`]; reads better for punctuation
pub fn symbol<C, X>(symbol: Token<X>) -> TokenParser<C, X> {
    token(symbol)
}

/// Parser that matches a literal not followed by an identifier character
#[derive(Debug, Clone)]
pub struct Keyword<C, X> {
    token: Token<X>,
    _marker: PhantomData<fn() -> C>,
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<C: Clone, X: Clone> Parser for Keyword<C, X> {
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        let (found, row, col) = scanner::is_sub_string(
            self.token.units(),
            state.offset(),
            state.row(),
            state.col(),
            state.source(),
        );

        match found {
            Some(offset)
                if !matches!(
                    scanner::is_sub_char(is_identifier_char, offset, state.source()),
                    SubChar::Next(_)
                ) =>
            {
                Step::good(!self.token.is_empty(), (), state.advance(offset, row, col))
            }
            _ => Step::bad(false, self.token.problem.clone(), &state),
        }
    }
}

pub fn keyword<C, X>(token: Token<X>) -> Keyword<C, X> {
    Keyword {
        token,
        _marker: PhantomData,
    }
}
