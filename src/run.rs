use tracing::debug;

use crate::error::DeadEnd;
use crate::parser::Parser;
use crate::state::{State, TraceEntry};
use crate::step::Step;

/// Run a parser over `source`.
///
/// Succeeds with the parser's value even when input remains; add
/// [`end`](crate::succeed::end) to require the whole input be consumed. On
/// failure every collected dead end is returned, in the order the
/// alternatives were tried.
pub fn run<P: Parser>(
    parser: &P,
    source: &str,
) -> Result<P::Output, Vec<DeadEnd<P::Context, P::Problem>>> {
    debug_run(parser, source).1
}

/// Like [`run`], also returning the execution trace, most recent region first.
///
/// The trace lists the text consumed by each [`in_context`](crate::context::in_context)
/// region that finished, successfully, before the run ended.
pub fn debug_run<P: Parser>(
    parser: &P,
    source: &str,
) -> (
    Vec<TraceEntry<P::Context>>,
    Result<P::Output, Vec<DeadEnd<P::Context, P::Problem>>>,
) {
    debug!(len = source.len(), "parse started");

    match parser.parse(State::new(source)) {
        Step::Good { value, state, .. } => {
            debug!(
                offset = state.offset(),
                row = state.row(),
                col = state.col(),
                "parse succeeded"
            );
            (state.into_trace().into_iter().collect(), Ok(value))
        }
        Step::Bad { bag, trace, .. } => {
            let dead_ends = bag.to_list();
            debug!(dead_ends = dead_ends.len(), "parse failed");
            (trace.into_iter().collect(), Err(dead_ends))
        }
    }
}
