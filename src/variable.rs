use std::collections::HashSet;
use std::marker::PhantomData;

use crate::parser::Parser;
use crate::scanner::{self, SubChar};
use crate::state::State;
use crate::step::Step;

/// Shape of an identifier: a `start` character, any number of `inner`
/// characters, and a set of names that are not allowed.
#[derive(Debug, Clone)]
pub struct VariableConfig<X, S, I> {
    pub start: S,
    pub inner: I,
    pub reserved: HashSet<String>,
    pub expecting: X,
}

/// Parser for identifiers described by a [`VariableConfig`]
#[derive(Debug, Clone)]
pub struct Variable<C, X, S, I> {
    config: VariableConfig<X, S, I>,
    _marker: PhantomData<fn() -> C>,
}

impl<C, X, S, I> Parser for Variable<C, X, S, I>
where
    C: Clone,
    X: Clone,
    S: Fn(char) -> bool,
    I: Fn(char) -> bool,
{
    type Context = C;
    type Problem = X;
    type Output = String;

    fn parse(&self, state: State<C>) -> Step<C, X, String> {
        let start = state.offset();
        let first = scanner::is_sub_char(&self.config.start, start, state.source());
        if let SubChar::Miss = first {
            return Step::bad(false, self.config.expecting.clone(), &state);
        }

        let mut next = state.clone().chomp_char(first);
        loop {
            match scanner::is_sub_char(&self.config.inner, next.offset(), next.source()) {
                SubChar::Miss => break,
                step => next = next.chomp_char(step),
            }
        }

        let name = next.slice(start, next.offset());
        if self.config.reserved.contains(&name) {
            Step::bad(false, self.config.expecting.clone(), &state)
        } else {
            Step::good(true, name, next)
        }
    }
}

pub fn variable<C, X, S, I>(config: VariableConfig<X, S, I>) -> Variable<C, X, S, I>
where
    S: Fn(char) -> bool,
    I: Fn(char) -> bool,
{
    Variable {
        config,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeadEnd, run};

    type Outcome<T> = Result<T, Vec<DeadEnd<(), &'static str>>>;

    fn is_inner(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    fn lower_var() -> Variable<(), &'static str, fn(char) -> bool, fn(char) -> bool> {
        variable(VariableConfig {
            start: char::is_lowercase as fn(char) -> bool,
            inner: is_inner as fn(char) -> bool,
            reserved: ["let", "in", "case", "of"].into_iter().map(String::from).collect(),
            expecting: "expecting variable",
        })
    }

    #[test]
    fn test_variable() {
        let result: Outcome<String> = run(&lower_var(), "user_id2 = 1");
        assert_eq!(result, Ok("user_id2".to_string()));
    }

    #[test]
    fn test_single_character() {
        let result: Outcome<String> = run(&lower_var(), "x");
        assert_eq!(result, Ok("x".to_string()));
    }

    #[test]
    fn test_bad_start() {
        let step = lower_var().parse(State::new("Upper"));
        assert!(!step.progress());
        let dead_ends = run(&lower_var(), "1abc").unwrap_err();
        assert_eq!(dead_ends[0].problem, "expecting variable");
    }

    #[test]
    fn test_reserved_name_fails_without_progress() {
        let step = lower_var().parse(State::new("let"));
        assert!(!step.is_good());
        assert!(!step.progress());

        // a reserved word is only rejected as a whole name
        let result: Outcome<String> = run(&lower_var(), "letter");
        assert_eq!(result, Ok("letter".to_string()));
    }

    #[test]
    fn test_unicode_names() {
        let result: Outcome<String> = run(&lower_var(), "éte🦀");
        assert_eq!(result, Ok("éte".to_string()));
    }
}
