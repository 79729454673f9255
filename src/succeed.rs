use std::marker::PhantomData;

use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser that always succeeds with a value, consuming nothing
#[derive(Debug, Clone)]
pub struct Succeed<C, X, T> {
    value: T,
    _marker: PhantomData<fn() -> (C, X)>,
}

impl<C: Clone, X: Clone, T: Clone> Parser for Succeed<C, X, T> {
    type Context = C;
    type Problem = X;
    type Output = T;

    fn parse(&self, state: State<C>) -> Step<C, X, T> {
        Step::good(false, self.value.clone(), state)
    }
}

pub fn succeed<C, X, T>(value: T) -> Succeed<C, X, T> {
    Succeed {
        value,
        _marker: PhantomData,
    }
}

/// Parser that always fails with a caller-supplied problem
#[derive(Debug, Clone)]
pub struct Fail<C, X, T> {
    problem: X,
    _marker: PhantomData<fn() -> (C, T)>,
}

impl<C: Clone, X: Clone, T> Parser for Fail<C, X, T> {
    type Context = C;
    type Problem = X;
    type Output = T;

    fn parse(&self, state: State<C>) -> Step<C, X, T> {
        Step::bad(false, self.problem.clone(), &state)
    }
}

/// Fail at the current position without consuming anything
pub fn problem<C, X, T>(problem: X) -> Fail<C, X, T> {
    Fail {
        problem,
        _marker: PhantomData,
    }
}

/// Alias of [`problem`]
pub fn fail<C, X, T>(x: X) -> Fail<C, X, T> {
    problem(x)
}

/// Parser that succeeds and claims progress, committing the enclosing
/// `one_of` to the current branch
#[derive(Debug, Clone)]
pub struct Commit<C, X, T> {
    value: T,
    _marker: PhantomData<fn() -> (C, X)>,
}

impl<C: Clone, X: Clone, T: Clone> Parser for Commit<C, X, T> {
    type Context = C;
    type Problem = X;
    type Output = T;

    fn parse(&self, state: State<C>) -> Step<C, X, T> {
        Step::good(true, self.value.clone(), state)
    }
}

pub fn commit<C, X, T>(value: T) -> Commit<C, X, T> {
    Commit {
        value,
        _marker: PhantomData,
    }
}

/// Parser that only succeeds at the end of the input
#[derive(Debug, Clone)]
pub struct End<C, X> {
    problem: X,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Clone, X: Clone> Parser for End<C, X> {
    type Context = C;
    type Problem = X;
    type Output = ();

    fn parse(&self, state: State<C>) -> Step<C, X, ()> {
        if state.is_at_end() {
            Step::good(false, (), state)
        } else {
            Step::bad(false, self.problem.clone(), &state)
        }
    }
}

pub fn end<C, X>(problem: X) -> End<C, X> {
    End {
        problem,
        _marker: PhantomData,
    }
}
