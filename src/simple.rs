//! Ready-made building blocks with a fixed problem type.
//!
//! Grammars that do not need custom problems or context regions can use this
//! module instead of threading their own types through every parser. Dead
//! ends carry a [`Problem`] and never a context.

use std::collections::HashSet;

use thiserror::Error;

use crate::and::{Ignorer, ignorer};
use crate::ascii::number::{self as numbers, Number, NumberConfig};
use crate::ascii::whitespace::{self, MultiComment, Nestable};
use crate::chomp::{self, ChompIf, ChompUntil, ChompUntilEndOr};
use crate::error::{self, render};
use crate::parser::Parser;
use crate::sequence::{self as sequences, Sequence, SequenceConfig, Trailing};
use crate::succeed::{self, End, Fail};
use crate::token::{self as tokens, Keyword, Token, TokenParser};
use crate::variable::{self as variables, Variable, VariableConfig};

/// Context type of the simple layer; no value of it exists
pub type Never = std::convert::Infallible;

/// What a simple parser expected at a dead end
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    #[error("expecting `{0}`")]
    Expecting(String),

    #[error("expecting an integer")]
    ExpectingInt,

    #[error("expecting a hexadecimal number")]
    ExpectingHex,

    #[error("expecting an octal number")]
    ExpectingOctal,

    #[error("expecting a binary number")]
    ExpectingBinary,

    #[error("expecting a float")]
    ExpectingFloat,

    #[error("expecting a number")]
    ExpectingNumber,

    #[error("expecting a variable")]
    ExpectingVariable,

    #[error("expecting symbol `{0}`")]
    ExpectingSymbol(String),

    #[error("expecting keyword `{0}`")]
    ExpectingKeyword(String),

    #[error("expecting the end of input")]
    ExpectingEnd,

    #[error("unexpected character")]
    UnexpectedChar,

    #[error("{0}")]
    Problem(String),

    /// Not produced by the parsers here; available to grammars that reject a
    /// repeated item after parsing it.
    #[error("bad repeat")]
    BadRepeat,
}

pub type DeadEnd = error::DeadEnd<Never, Problem>;

/// A failed [`parse`], with its dead ends rendered against the source
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{report}")]
pub struct ParseError {
    pub dead_ends: Vec<DeadEnd>,
    report: String,
}

impl ParseError {
    pub fn report(&self) -> &str {
        &self.report
    }
}

pub fn token(text: &str) -> TokenParser<Never, Problem> {
    tokens::token(Token::new(text, Problem::Expecting(text.to_string())))
}

pub fn symbol(text: &str) -> TokenParser<Never, Problem> {
    tokens::symbol(Token::new(text, Problem::ExpectingSymbol(text.to_string())))
}

pub fn keyword(text: &str) -> Keyword<Never, Problem> {
    tokens::keyword(Token::new(text, Problem::ExpectingKeyword(text.to_string())))
}

pub fn int() -> Number<Never, Problem, u64> {
    numbers::int(Problem::ExpectingInt, Problem::ExpectingInt)
}

pub fn float() -> Number<Never, Problem, f64> {
    numbers::float(Problem::ExpectingFloat, Problem::ExpectingFloat)
}

/// Handlers for [`number`]; `None` rejects that kind of literal
pub struct NumberHandlers<T> {
    pub int: Option<fn(u64) -> T>,
    pub hex: Option<fn(u64) -> T>,
    pub octal: Option<fn(u64) -> T>,
    pub binary: Option<fn(u64) -> T>,
    pub float: Option<fn(f64) -> T>,
}

pub fn number<T>(handlers: NumberHandlers<T>) -> Number<Never, Problem, T> {
    numbers::number(NumberConfig {
        int: handlers.int.ok_or(Problem::ExpectingInt),
        hex: handlers.hex.ok_or(Problem::ExpectingHex),
        octal: handlers.octal.ok_or(Problem::ExpectingOctal),
        binary: handlers.binary.ok_or(Problem::ExpectingBinary),
        float: handlers.float.ok_or(Problem::ExpectingFloat),
        invalid: Problem::ExpectingNumber,
        expecting: Problem::ExpectingNumber,
    })
}

pub fn variable<S, I>(
    start: S,
    inner: I,
    reserved: HashSet<String>,
) -> Variable<Never, Problem, S, I>
where
    S: Fn(char) -> bool,
    I: Fn(char) -> bool,
{
    variables::variable(VariableConfig {
        start,
        inner,
        reserved,
        expecting: Problem::ExpectingVariable,
    })
}

pub fn end() -> End<Never, Problem> {
    succeed::end(Problem::ExpectingEnd)
}

pub fn problem<T>(message: impl Into<String>) -> Fail<Never, Problem, T> {
    succeed::problem(Problem::Problem(message.into()))
}

pub fn chomp_if<F>(predicate: F) -> ChompIf<Never, Problem, F>
where
    F: Fn(char) -> bool,
{
    chomp::chomp_if(predicate, Problem::UnexpectedChar)
}

pub fn chomp_until(text: &str) -> ChompUntil<Never, Problem> {
    chomp::chomp_until(Token::new(text, Problem::Expecting(text.to_string())))
}

pub fn chomp_until_end_or(text: &str) -> ChompUntilEndOr<Never, Problem> {
    chomp::chomp_until_end_or(text)
}

pub fn spaces() -> chomp::ChompWhile<Never, Problem, fn(char) -> bool> {
    whitespace::spaces()
}

pub fn line_comment(
    start: &str,
) -> Ignorer<TokenParser<Never, Problem>, ChompUntilEndOr<Never, Problem>> {
    whitespace::line_comment(Token::new(start, Problem::ExpectingSymbol(start.to_string())))
}

pub fn multi_comment(open: &str, close: &str, nestable: Nestable) -> MultiComment<Never, Problem> {
    whitespace::multi_comment(
        Token::new(open, Problem::ExpectingSymbol(open.to_string())),
        Token::new(close, Problem::ExpectingSymbol(close.to_string())),
        nestable,
    )
}

/// A sequence whose delimiters and separator are reported as symbols
pub fn sequence<S, P>(
    start: &str,
    separator: &str,
    end: &str,
    spaces: S,
    item: P,
    trailing: Trailing,
) -> Sequence<Problem, S, P>
where
    P: Parser<Context = Never, Problem = Problem>,
    S: Parser<Context = Never, Problem = Problem, Output = ()>,
{
    let delimiter = |text: &str| Token::new(text, Problem::ExpectingSymbol(text.to_string()));
    sequences::sequence(SequenceConfig {
        start: delimiter(start),
        separator: delimiter(separator),
        end: delimiter(end),
        spaces,
        item,
        trailing,
    })
}

/// Skip `parser` and then continue with `next`, keeping the second value
pub fn skip<P, Q>(parser: P, next: Q) -> Ignorer<P, Q>
where
    P: Parser<Context = Never, Problem = Problem>,
    Q: Parser<Context = Never, Problem = Problem>,
{
    ignorer(parser, next)
}

pub fn run<P>(parser: &P, source: &str) -> Result<P::Output, Vec<DeadEnd>>
where
    P: Parser<Context = Never, Problem = Problem>,
{
    crate::run::run(parser, source)
}

/// Render each dead end as a position, its problem and a source excerpt
pub fn dead_ends_to_string(source: &str, dead_ends: &[DeadEnd]) -> String {
    dead_ends
        .iter()
        .map(|dead_end| format!("{}\n{}", dead_end, render(source, dead_end.row, dead_end.col)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Like [`run`], with failures turned into a [`ParseError`]
pub fn parse<P>(parser: &P, source: &str) -> Result<P::Output, ParseError>
where
    P: Parser<Context = Never, Problem = Problem>,
{
    run(parser, source).map_err(|dead_ends| {
        let report = if dead_ends.is_empty() {
            "no alternative matched".to_string()
        } else {
            dead_ends_to_string(source, &dead_ends)
        };
        ParseError { dead_ends, report }
    })
}
