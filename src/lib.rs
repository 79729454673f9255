//! # ChompComb - Parser Combinator Library
//!
//! Parsers are values built from small primitives and combined with
//! combinators. Every parser reports whether it consumed input, and choice is
//! driven by that: an alternative that fails after consuming input is
//! committed, unless it was wrapped in [`backtrackable`].
//!
//! - **Positions**: offsets are UTF-16 code units; rows and columns are
//!   1-based and count characters
//! - **Rich error reporting**: failures collect every dead end with its row,
//!   column and the stack of [`in_context`] regions that were active
//! - **Zero panics**: failures are values, returned from [`run`]
//! - **Persistent state**: the state is cheap to clone, so alternatives always
//!   restart from the state they were given
//!
//! ```
//! use chompcomb::{AndExt, DeadEnd, Token, int, run, symbol};
//!
//! let point = symbol(Token::new("(", "expecting ("))
//!     .ignore_then(int("expecting int", "invalid int"))
//!     .then_ignore(symbol(Token::new(",", "expecting ,")))
//!     .and(int("expecting int", "invalid int"))
//!     .then_ignore(symbol(Token::new(")", "expecting )")));
//!
//! let result: Result<(u64, u64), Vec<DeadEnd<(), &str>>> = run(&point, "(3,4)");
//! assert_eq!(result, Ok((3, 4)));
//!
//! let dead_ends = run(&point, "(3;4)").unwrap_err();
//! assert_eq!((dead_ends[0].col, dead_ends[0].problem), (3, "expecting ,"));
//! ```
//!
//! The [`simple`] module fixes the problem type for grammars that do not need
//! their own.

pub mod and;
pub mod and_then;
pub mod ascii;
pub mod backtrackable;
pub mod boxed;
pub mod chomp;
pub mod context;
pub mod error;
pub mod lazy;
pub mod looping;
pub mod map;
pub mod one_of;
pub mod or;
pub mod parser;
pub mod position;
pub mod run;
pub mod scanner;
pub mod sequence;
pub mod simple;
pub mod state;
pub mod step;
pub mod succeed;
pub mod token;
pub mod variable;

pub use and::{AndExt, and, ignorer, keeper, map2};
pub use and_then::{AndThenExt, and_then};
pub use ascii::{
    MultiComment, Nestable, Number, NumberConfig, float, int, line_comment, multi_comment, number,
    spaces,
};
pub use backtrackable::{BacktrackableExt, backtrackable};
pub use boxed::{BoxedExt, BoxedParser};
pub use chomp::{chomp_if, chomp_until, chomp_until_end_or, chomp_while};
pub use context::{ContextExt, in_context, with_indent};
pub use error::{Bag, DeadEnd, render};
pub use lazy::lazy;
pub use looping::{LoopStep, looping};
pub use map::{MapExt, get_chomped_string, map, map_chomped_string};
pub use one_of::one_of;
pub use or::{OrExt, or};
pub use parser::Parser;
pub use position::{
    PositionExt, Span, get_col, get_indent, get_offset, get_position, get_row, get_source,
    with_span,
};
pub use run::{debug_run, run};
pub use sequence::{Sequence, SequenceConfig, Trailing, sequence};
pub use state::{Located, State, TraceEntry};
pub use step::Step;
pub use succeed::{commit, end, fail, problem, succeed};
pub use token::{Token, keyword, symbol, token};
pub use variable::{VariableConfig, variable};
