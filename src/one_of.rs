use crate::error::Bag;
use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// Parser combinator that tries alternatives from left to right.
///
/// The first alternative that succeeds, or that fails after consuming input,
/// decides the outcome. Alternatives that fail without consuming input are
/// skipped and their dead ends kept; when every alternative fails that way the
/// dead ends of all of them are reported, first alternative first.
#[derive(Debug, Clone)]
pub struct OneOf<P> {
    parsers: Vec<P>,
}

impl<P: Parser> Parser for OneOf<P> {
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = P::Output;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, P::Output> {
        let mut bag = Bag::empty();
        let mut trace = state.trace().clone();

        for parser in &self.parsers {
            match parser.parse(state.clone()) {
                Step::Bad {
                    progress: false,
                    bag: failed,
                    trace: failed_trace,
                } => {
                    bag = bag.append(failed);
                    trace = failed_trace;
                }
                step => return step,
            }
        }

        Step::Bad {
            progress: false,
            bag,
            trace,
        }
    }
}

/// Try `parsers` in order; see [`OneOf`].
///
/// Example:
/// ```
/// use chompcomb::{BoxedExt, MapExt, Token, one_of, run, token};
///
/// let boolean = one_of(vec![
///     token::<(), _>(Token::new("true", "expecting true")).map(|()| true).boxed(),
///     token(Token::new("false", "expecting false")).map(|()| false).boxed(),
/// ]);
/// assert_eq!(run(&boolean, "false"), Ok(false));
///
/// let problems: Vec<_> = run(&boolean, "maybe")
///     .unwrap_err()
///     .into_iter()
///     .map(|dead_end| dead_end.problem)
///     .collect();
/// assert_eq!(problems, vec!["expecting true", "expecting false"]);
/// ```
pub fn one_of<P: Parser>(parsers: Vec<P>) -> OneOf<P> {
    OneOf { parsers }
}

/// Two-way choice over closures with the same rules as [`OneOf`]
pub(crate) fn either<C, X, T, A, B>(state: State<C>, first: A, second: B) -> Step<C, X, T>
where
    C: Clone,
    A: FnOnce(State<C>) -> Step<C, X, T>,
    B: FnOnce(State<C>) -> Step<C, X, T>,
{
    match first(state.clone()) {
        Step::Bad {
            progress: false,
            bag,
            ..
        } => match second(state) {
            Step::Bad {
                progress: false,
                bag: more,
                trace,
            } => Step::Bad {
                progress: false,
                bag: bag.append(more),
                trace,
            },
            step => step,
        },
        step => step,
    }
}
