use crate::parser::Parser;
use crate::state::State;
use crate::step::Step;

/// What a loop body decided: run again with a new accumulator, or stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopStep<S, T> {
    Loop(S),
    Done(T),
}

/// Parser that repeatedly runs a body built from an accumulator.
///
/// The loop runs in constant stack space. A body that returns `Loop` without
/// consuming input will run forever; the body is responsible for reaching
/// `Done` when nothing more can be consumed.
#[derive(Debug, Clone)]
pub struct Looping<S, F> {
    initial: S,
    step: F,
}

impl<S, F, P, T> Parser for Looping<S, F>
where
    S: Clone,
    F: Fn(S) -> P,
    P: Parser<Output = LoopStep<S, T>>,
{
    type Context = P::Context;
    type Problem = P::Problem;
    type Output = T;

    fn parse(&self, state: State<P::Context>) -> Step<P::Context, P::Problem, T> {
        let mut progress = false;
        let mut accumulator = self.initial.clone();
        let mut state = state;

        loop {
            match (self.step)(accumulator).parse(state) {
                Step::Good {
                    progress: moved,
                    value: LoopStep::Loop(next),
                    state: next_state,
                } => {
                    progress |= moved;
                    accumulator = next;
                    state = next_state;
                }
                Step::Good {
                    progress: moved,
                    value: LoopStep::Done(value),
                    state,
                } => return Step::good(progress || moved, value, state),
                Step::Bad {
                    progress: moved,
                    bag,
                    trace,
                } => {
                    return Step::Bad {
                        progress: progress || moved,
                        bag,
                        trace,
                    };
                }
            }
        }
    }
}

pub fn looping<S, F, P, T>(initial: S, step: F) -> Looping<S, F>
where
    S: Clone,
    F: Fn(S) -> P,
    P: Parser<Output = LoopStep<S, T>>,
{
    Looping { initial, step }
}
