pub mod number;
pub mod whitespace;

pub use number::{Number, NumberConfig, float, int, number};
pub use whitespace::{MultiComment, Nestable, line_comment, multi_comment, spaces};
