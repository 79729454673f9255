use std::fmt;
use std::sync::Arc;

use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Type-erased, cheaply clonable parser.
///
/// Useful for alternatives of different concrete types in `one_of` and for
/// naming the return type of recursive grammar functions.
pub struct BoxedParser<C, X, T> {
    inner: Arc<dyn Parser<Context = C, Problem = X, Output = T> + Send + Sync>,
}

impl<C, X, T> Clone for BoxedParser<C, X, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, X, T> fmt::Debug for BoxedParser<C, X, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

impl<C: Clone, X: Clone, T> BoxedParser<C, X, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Context = C, Problem = X, Output = T> + Send + Sync + 'static,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<C: Clone, X: Clone, T> Parser for BoxedParser<C, X, T> {
    type Context = C;
    type Problem = X;
    type Output = T;

    fn parse(&self, state: State<C>) -> Step<C, X, T> {
        self.inner.parse(state)
    }
}

pub trait BoxedExt: Parser + Sized + Send + Sync + 'static {
    fn boxed(self) -> BoxedParser<Self::Context, Self::Problem, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::token::{Token, token};
    use crate::{DeadEnd, run};

    type Outcome<T> = Result<T, Vec<DeadEnd<(), &'static str>>>;

    #[test]
    fn test_boxed_clones_share_parser() {
        let parser = token::<(), &str>(Token::new("hi", "hi")).map(|()| "greeting").boxed();
        let copy = parser.clone();
        let result: Outcome<&str> = run(&copy, "hi");
        assert_eq!(result, Ok("greeting"));
        let result: Outcome<&str> = run(&parser, "hi");
        assert_eq!(result, Ok("greeting"));
    }

    #[test]
    fn test_boxed_parsers_of_different_types_share_a_vec() {
        let parsers: Vec<BoxedParser<(), &str, u8>> = vec![
            token(Token::new("a", "a")).map(|()| 1).boxed(),
            token(Token::new("b", "b")).map(|()| 2).map(|n| n * 10).boxed(),
        ];
        let result: Outcome<u8> = run(&parsers[1], "b");
        assert_eq!(result, Ok(20));
    }
}
