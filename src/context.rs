//! Context regions and indentation.
//!
//! A context region names a part of the grammar ("a list", "a record field")
//! so dead ends can report where they happened in terms of the grammar, and so
//! [`debug_run`](crate::debug_run) can report what each region consumed.

use tracing::trace;

use crate::parser::Parser;
use crate::state::{State, TraceEntry};
use crate::step::Step;

/// Parser combinator that runs a parser inside a named context region
#[derive(Debug, Clone)]
pub struct InContext<P, C> {
    context: C,
    parser: P,
}

impl<P, C> Parser for InContext<P, C>
where
    P: Parser<Context = C>,
    C: Clone,
{
    type Context = C;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(&self, state: State<C>) -> Step<C, P::Problem, P::Output> {
        let start = state.offset();
        let outer = state.context().clone();
        let state = state.push_context(self.context.clone());
        let entered = state.context().clone();

        match self.parser.parse(state) {
            Step::Good {
                progress,
                value,
                state,
            } => {
                let mut state = state.with_context(outer);
                if state.offset() != start {
                    let consumed = state.slice(start, state.offset());
                    trace!(
                        depth = entered.len(),
                        consumed = %consumed,
                        "context region consumed input"
                    );
                    state = state.record_trace(TraceEntry {
                        consumed,
                        context: entered.into_iter().collect(),
                    });
                }
                Step::good(progress, value, state)
            }
            bad => bad,
        }
    }
}

/// Example:
/// ```
/// use chompcomb::{Token, in_context, run, token};
///
/// let assignment = in_context("assignment", token::<&str, _>(Token::new("=", "expecting =")));
/// let dead_ends = run(&assignment, "x").unwrap_err();
/// assert_eq!(dead_ends[0].problem, "expecting =");
/// assert_eq!(dead_ends[0].context_stack[0].context, "assignment");
/// ```
pub fn in_context<P, C>(context: C, parser: P) -> InContext<P, C>
where
    P: Parser<Context = C>,
    C: Clone,
{
    InContext { context, parser }
}

/// Parser combinator that runs a parser with a different indentation baseline
#[derive(Debug, Clone)]
pub struct WithIndent<P> {
    indent: usize,
    parser: P,
}

impl<P: Parser> Parser for WithIndent<P> {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, P::Output> {
        let restore = state.indent();
        match self.parser.parse(state.with_indent(self.indent)) {
            Step::Good {
                progress,
                value,
                state,
            } => Step::good(progress, value, state.with_indent(restore)),
            bad => bad,
        }
    }
}

pub fn with_indent<P: Parser>(indent: usize, parser: P) -> WithIndent<P> {
    WithIndent { indent, parser }
}

pub trait ContextExt: Parser + Sized {
    fn in_context(self, context: Self::Context) -> InContext<Self, Self::Context> {
        in_context(context, self)
    }

    fn with_indent(self, indent: usize) -> WithIndent<Self> {
        with_indent(indent, self)
    }
}

impl<P> ContextExt for P where P: Parser {}
