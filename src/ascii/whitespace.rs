//! Whitespace and comments.

use std::marker::PhantomData;

use crate::and::{Ignorer, ignorer};
use crate::chomp::{
    ChompUntil, ChompUntilEndOr, ChompWhile, chomp_until, chomp_until_end_or, chomp_while,
};
use crate::parser::Parser;
use crate::scanner::{self, SubChar};
use crate::state::State;
use crate::step::Step;
use crate::token::{Token, TokenParser, match_token, token};

fn is_space(c: char) -> bool {
    c == ' ' || c == '\n' || c == '\r'
}

/// Parser that skips zero or more spaces, newlines and carriage returns.
/// Tabs are not whitespace here.
pub fn spaces<C, X>() -> ChompWhile<C, X, fn(char) -> bool> {
    chomp_while(is_space as fn(char) -> bool)
}

/// Parser for a comment running from `start` to the end of the line.
/// The newline itself is left in place.
pub fn line_comment<C: Clone, X: Clone>(
    start: Token<X>,
) -> Ignorer<TokenParser<C, X>, ChompUntilEndOr<C, X>> {
    ignorer(token(start), chomp_until_end_or("\n"))
}

/// Whether block comments may contain other block comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nestable {
    NotNestable,
    Nestable,
}

/// Parser for a delimited block comment
#[derive(Debug, Clone)]
pub struct MultiComment<C, X> {
    open: Token<X>,
    close: Token<X>,
    until_close: ChompUntil<C, X>,
    nestable: Nestable,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Clone, X: Clone> MultiComment<C, X> {
    fn parse_flat(&self, state: State<C>) -> Step<C, X, ()> {
        match_token(&self.open, state)
            .then(|(), state| self.until_close.parse(state))
            .then(|(), state| match_token(&self.close, state))
    }

    fn parse_nested(&self, state: State<C>) -> Step<C, X, ()> {
        let first_chars = (self.open.text().chars().next(), self.close.text().chars().next());
        let (Some(open_char), Some(close_char)) = first_chars else {
            let problem = if self.open.is_empty() {
                self.open.problem()
            } else {
                self.close.problem()
            };
            return Step::bad(false, problem.clone(), &state);
        };
        let is_relevant = |c: char| c == open_char || c == close_char;

        let mut state = match match_token(&self.open, state) {
            Step::Good { state, .. } => state,
            bad => return bad,
        };
        let mut depth = 1usize;

        loop {
            while let step @ (SubChar::Newline | SubChar::Next(_)) =
                scanner::is_sub_char(|c| !is_relevant(c), state.offset(), state.source())
            {
                state = state.chomp_char(step);
            }

            if let Step::Good { state: next, .. } = match_token(&self.close, state.clone()) {
                state = next;
                depth -= 1;
                if depth == 0 {
                    return Step::good(true, (), state);
                }
                continue;
            }

            if let Step::Good { state: next, .. } = match_token(&self.open, state.clone()) {
                state = next;
                depth += 1;
                continue;
            }

            match scanner::is_sub_char(|_| true, state.offset(), state.source()) {
                SubChar::Miss => return Step::bad(true, self.close.problem().clone(), &state),
                step => state = state.chomp_char(step),
            }
        }
    }
}

impl<C: Clone, X: Clone> Parser for MultiComment<C, X> {
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        match self.nestable {
            Nestable::NotNestable => self.parse_flat(state),
            Nestable::Nestable => self.parse_nested(state),
        }
    }
}

pub fn multi_comment<C, X: Clone>(
    open: Token<X>,
    close: Token<X>,
    nestable: Nestable,
) -> MultiComment<C, X> {
    MultiComment {
        until_close: chomp_until(close.clone()),
        open,
        close,
        nestable,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::map::MapExt;
    use crate::{DeadEnd, run};

    type Outcome<T> = Result<T, Vec<DeadEnd<(), &'static str>>>;

    fn block(nestable: Nestable) -> MultiComment<(), &'static str> {
        multi_comment(Token::new("{-", "expecting {-"), Token::new("-}", "expecting -}"), nestable)
    }

    fn rest() -> impl Parser<Context = (), Problem = &'static str, Output = String> {
        chomp_while(|_| true).get_chomped_string()
    }

    #[test]
    fn test_spaces() {
        let parser = spaces().ignore_then(rest());
        let result: Outcome<String> = run(&parser, " \r\n \tx");
        assert_eq!(result, Ok("\tx".to_string()));
    }

    #[test]
    fn test_spaces_without_input_has_no_progress() {
        let step = spaces::<(), &str>().parse(State::new("x"));
        assert!(step.is_good());
        assert!(!step.progress());
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let parser = line_comment(Token::new("--", "expecting --")).ignore_then(rest());
        let result: Outcome<String> = run(&parser, "-- note\nnext");
        assert_eq!(result, Ok("\nnext".to_string()));

        let result: Outcome<String> = run(&parser, "-- to the end");
        assert_eq!(result, Ok(String::new()));
    }

    #[test]
    fn test_flat_comment() {
        let parser = block(Nestable::NotNestable).ignore_then(rest());
        let result: Outcome<String> = run(&parser, "{- a {- b -} c -}");
        assert_eq!(result, Ok(" c -}".to_string()));
    }

    #[test]
    fn test_nested_comment() {
        let parser = block(Nestable::Nestable).ignore_then(rest());
        let result: Outcome<String> = run(&parser, "{- a {- b -} c -} after");
        assert_eq!(result, Ok(" after".to_string()));
    }

    #[test]
    fn test_nested_comment_across_lines() {
        let parser = block(Nestable::Nestable).ignore_then(crate::position::get_position());
        let result: Outcome<(usize, usize)> = run(&parser, "{- one\n- two }\n-}x");
        assert_eq!(result, Ok((3, 3)));
    }

    #[test]
    fn test_unclosed_comment() {
        for nestable in [Nestable::NotNestable, Nestable::Nestable] {
            let step = block(nestable).parse(State::new("{- open"));
            assert!(step.progress());
            let dead_ends = run(&block(nestable), "{- open").unwrap_err();
            assert_eq!(dead_ends[0].problem, "expecting -}");
            assert_eq!(dead_ends[0].col, 8);
        }
    }

    #[test]
    fn test_missing_open_fails_without_progress() {
        let step = block(Nestable::Nestable).parse(State::new("x"));
        assert!(!step.progress());
        let dead_ends = run(&block(Nestable::NotNestable), "x").unwrap_err();
        assert_eq!(dead_ends[0].problem, "expecting {-");
    }

    #[test]
    fn test_empty_delimiter() {
        let parser: MultiComment<(), &str> = multi_comment(
            Token::new("", "empty open"),
            Token::new("*/", "close"),
            Nestable::Nestable,
        );
        let dead_ends = run(&parser, "*/").unwrap_err();
        assert_eq!(dead_ends[0].problem, "empty open");
    }
}
