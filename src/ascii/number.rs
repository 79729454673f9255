//! Numeric literals.
//!
//! A single scanner handles decimal integers, floats and the `0x`, `0o` and
//! `0b` prefixed bases. Each kind is switched on or off through
//! [`NumberConfig`]; the [`int`] and [`float`] presets cover the common cases.

use std::fmt;
use std::marker::PhantomData;

use crate::error::Bag;
use crate::parser::Parser;
use crate::scanner;
use crate::state::State;
use crate::step::Step;

/// Which numeric literals to accept and how to turn them into values.
///
/// A handler set to `Err(x)` disables that kind of literal: meeting one fails
/// with `x` after consuming input.
pub struct NumberConfig<X, T> {
    pub int: Result<fn(u64) -> T, X>,
    pub hex: Result<fn(u64) -> T, X>,
    pub octal: Result<fn(u64) -> T, X>,
    pub binary: Result<fn(u64) -> T, X>,
    pub float: Result<fn(f64) -> T, X>,
    /// Reported for malformed literals such as `0x` or `1e`
    pub invalid: X,
    /// Reported when there is no number at all
    pub expecting: X,
}

impl<X: Clone, T> Clone for NumberConfig<X, T> {
    fn clone(&self) -> Self {
        NumberConfig {
            int: self.int.clone(),
            hex: self.hex.clone(),
            octal: self.octal.clone(),
            binary: self.binary.clone(),
            float: self.float.clone(),
            invalid: self.invalid.clone(),
            expecting: self.expecting.clone(),
        }
    }
}

impl<X: fmt::Debug, T> fmt::Debug for NumberConfig<X, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberConfig")
            .field("int", &self.int.is_ok())
            .field("hex", &self.hex.is_ok())
            .field("octal", &self.octal.is_ok())
            .field("binary", &self.binary.is_ok())
            .field("float", &self.float.is_ok())
            .field("invalid", &self.invalid)
            .field("expecting", &self.expecting)
            .finish()
    }
}

/// Parser for numeric literals configured by a [`NumberConfig`]
#[derive(Debug, Clone)]
pub struct Number<C, X, T> {
    config: NumberConfig<X, T>,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Clone, X: Clone, T> Number<C, X, T> {
    fn finalize_int(
        &self,
        handler: &Result<fn(u64) -> T, X>,
        start: usize,
        (end, value): (usize, Option<u64>),
        state: State<C>,
    ) -> Step<C, X, T> {
        let to_value = match handler {
            Ok(to_value) => to_value,
            Err(x) => return Step::bad(true, x.clone(), &state),
        };

        if start == end {
            let progress = state.offset() < start;
            return Step::bad(progress, self.config.invalid.clone(), &state);
        }

        match value {
            Some(n) => Step::good(true, to_value(n), state.bump_offset(end)),
            None => Step::bad(true, self.config.invalid.clone(), &state),
        }
    }

    fn finalize_float(
        &self,
        (int_end, int_value): (usize, Option<u64>),
        state: State<C>,
    ) -> Step<C, X, T> {
        let offset = state.offset();

        let end = match consume_dot_and_exp(int_end, state.source()) {
            Ok(end) => end,
            Err(at) => {
                // exponent marker without digits
                let col = state.col() + (at - offset);
                return Step::Bad {
                    progress: true,
                    bag: Bag::from_info(state.row(), col, self.config.invalid.clone(), &state),
                    trace: state.trace().clone(),
                };
            }
        };

        if end == offset {
            return Step::bad(false, self.config.expecting.clone(), &state);
        }

        if end == int_end {
            return self.finalize_int(&self.config.int, offset, (int_end, int_value), state);
        }

        let to_value = match &self.config.float {
            Ok(to_value) => to_value,
            Err(x) => return Step::bad(true, x.clone(), &state),
        };

        match state.slice(offset, end).parse::<f64>() {
            Ok(n) => Step::good(true, to_value(n), state.bump_offset(end)),
            Err(_) => Step::bad(true, self.config.invalid.clone(), &state),
        }
    }
}

impl<C: Clone, X: Clone, T> Parser for Number<C, X, T> {
    type Context = C;
    type Problem = X;
    type Output = T;

    fn parse(&self, state: State<C>) -> Step<C, X, T> {
        let offset = state.offset();
        let source = state.source();

        if !scanner::is_ascii_code(b'0', offset, source) {
            let digits = scanner::consume_base(10, offset, source);
            return self.finalize_float(digits, state);
        }

        let zero = offset + 1;
        let base = zero + 1;

        if scanner::is_ascii_code(b'x', zero, source) {
            let digits = scanner::consume_base16(base, source);
            self.finalize_int(&self.config.hex, base, digits, state)
        } else if scanner::is_ascii_code(b'o', zero, source) {
            let digits = scanner::consume_base(8, base, source);
            self.finalize_int(&self.config.octal, base, digits, state)
        } else if scanner::is_ascii_code(b'b', zero, source) {
            let digits = scanner::consume_base(2, base, source);
            self.finalize_int(&self.config.binary, base, digits, state)
        } else {
            // a leading zero is never followed by more integer digits
            self.finalize_float((zero, Some(0)), state)
        }
    }
}

/// Skip an optional `.digits` fraction and an optional exponent.
///
/// `Err(at)` means an exponent marker had no digits; `at` is where they were
/// expected.
fn consume_dot_and_exp(offset: usize, source: &[u16]) -> Result<usize, usize> {
    if scanner::is_ascii_code(b'.', offset, source) {
        consume_exp(scanner::chomp_base10(offset + 1, source), source)
    } else {
        consume_exp(offset, source)
    }
}

fn consume_exp(offset: usize, source: &[u16]) -> Result<usize, usize> {
    let is_marker = |code| scanner::is_ascii_code(code, offset, source);
    if !is_marker(b'e') && !is_marker(b'E') {
        return Ok(offset);
    }

    let marker = offset + 1;
    let is_sign = |code| scanner::is_ascii_code(code, marker, source);
    let digits = if is_sign(b'+') || is_sign(b'-') {
        marker + 1
    } else {
        marker
    };

    match scanner::chomp_base10(digits, source) {
        end if end == digits => Err(end),
        end => Ok(end),
    }
}

/// Example:
/// ```
/// use chompcomb::{Number, NumberConfig, number, run};
///
/// #[derive(Debug, PartialEq)]
/// enum Literal {
///     Int(u64),
///     Float(f64),
/// }
///
/// let literal: Number<(), &str, Literal> = number(NumberConfig {
///     int: Ok(Literal::Int),
///     hex: Ok(Literal::Int),
///     octal: Err("no octal"),
///     binary: Err("no binary"),
///     float: Ok(Literal::Float),
///     invalid: "invalid number",
///     expecting: "expecting number",
/// });
/// assert_eq!(run(&literal, "0x1F"), Ok(Literal::Int(31)));
/// assert_eq!(run(&literal, "2.5"), Ok(Literal::Float(2.5)));
/// assert_eq!(run(&literal, "0b1").unwrap_err()[0].problem, "no binary");
/// ```
pub fn number<C, X, T>(config: NumberConfig<X, T>) -> Number<C, X, T> {
    Number {
        config,
        _marker: PhantomData,
    }
}

fn identity<T>(value: T) -> T {
    value
}

fn widen(n: u64) -> f64 {
    n as f64
}

/// Decimal integers only; every other literal is reported as `invalid`
///
/// Example:
/// ```
/// use chompcomb::{int, run};
///
/// let parser = int::<(), _>("expecting int", "invalid int");
/// assert_eq!(run(&parser, "42"), Ok(42));
/// assert_eq!(run(&parser, "0x2A").unwrap_err()[0].problem, "invalid int");
/// ```
pub fn int<C, X: Clone>(expecting: X, invalid: X) -> Number<C, X, u64> {
    number(NumberConfig {
        int: Ok(identity::<u64>),
        hex: Err(invalid.clone()),
        octal: Err(invalid.clone()),
        binary: Err(invalid.clone()),
        float: Err(invalid.clone()),
        invalid,
        expecting,
    })
}

/// Decimal integers and floats, both produced as `f64`
pub fn float<C, X: Clone>(expecting: X, invalid: X) -> Number<C, X, f64> {
    number(NumberConfig {
        int: Ok(widen),
        hex: Err(invalid.clone()),
        octal: Err(invalid.clone()),
        binary: Err(invalid.clone()),
        float: Ok(identity::<f64>),
        invalid,
        expecting,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::chomp::chomp_while;
    use crate::map::MapExt;
    use crate::{DeadEnd, run};

    type Outcome<T> = Result<T, Vec<DeadEnd<(), &'static str>>>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Literal {
        Int(u64),
        Hex(u64),
        Octal(u64),
        Binary(u64),
        Float(f64),
    }

    fn literal() -> Number<(), &'static str, Literal> {
        number(NumberConfig {
            int: Ok(Literal::Int),
            hex: Ok(Literal::Hex),
            octal: Ok(Literal::Octal),
            binary: Ok(Literal::Binary),
            float: Ok(Literal::Float),
            invalid: "invalid",
            expecting: "expecting number",
        })
    }

    fn failure<T>(result: Outcome<T>) -> (usize, &'static str) {
        match result {
            Ok(_) => panic!("expected a failure"),
            Err(dead_ends) => (dead_ends[0].col, dead_ends[0].problem),
        }
    }

    #[test]
    fn test_int() {
        let result: Outcome<u64> = run(&int("int", "invalid"), "1234 rest");
        assert_eq!(result, Ok(1234));
    }

    #[test]
    fn test_int_rejects_other_literals() {
        let parser = int::<(), _>("int", "invalid");
        for input in ["1.5", "0x1F", "0b10", "1e3"] {
            let step = parser.parse(State::new(input));
            assert!(step.progress(), "{input}");
            assert!(!step.is_good(), "{input}");
        }
    }

    #[test]
    fn test_no_number_is_expecting_without_progress() {
        let step = int::<(), _>("int", "invalid").parse(State::new("abc"));
        assert!(!step.progress());
        assert_eq!(failure(run(&int("int", "invalid"), "abc")), (1, "int"));
    }

    #[test]
    fn test_leading_zero_parses_only_zero() {
        let digits = chomp_while(|c: char| c.is_ascii_digit()).get_chomped_string();
        let parser = int("int", "invalid").and(digits);
        let result: Outcome<(u64, String)> = run(&parser, "0123");
        assert_eq!(result, Ok((0, "123".to_string())));
    }

    #[test]
    fn test_bases() {
        let parser = literal();
        assert_eq!(run(&parser, "0x1F"), Ok(Literal::Hex(31)));
        assert_eq!(run(&parser, "0xff"), Ok(Literal::Hex(255)));
        assert_eq!(run(&parser, "0o17"), Ok(Literal::Octal(15)));
        assert_eq!(run(&parser, "0b101"), Ok(Literal::Binary(5)));
        assert_eq!(run(&parser, "0"), Ok(Literal::Int(0)));
        assert_eq!(run(&parser, "42"), Ok(Literal::Int(42)));
    }

    #[test]
    fn test_prefix_without_digits_is_invalid() {
        let step = literal().parse(State::new("0x"));
        assert!(step.progress());
        assert_eq!(failure(run(&literal(), "0xg")), (1, "invalid"));
    }

    #[test]
    fn test_floats() {
        let parser = float::<(), &str>("float", "invalid");
        assert_eq!(run(&parser, "3.25"), Ok(3.25));
        assert_eq!(run(&parser, "1e3"), Ok(1000.0));
        assert_eq!(run(&parser, "2.5E-1"), Ok(0.25));
        assert_eq!(run(&parser, "7"), Ok(7.0));
        assert_eq!(run(&literal(), "0.5"), Ok(Literal::Float(0.5)));
    }

    #[test]
    fn test_exponent_without_digits() {
        let parser = float("float", "invalid");
        assert_eq!(failure(run(&parser, "1e")), (3, "invalid"));
        assert_eq!(failure(run(&parser, "12.5e+x")), (7, "invalid"));
    }

    #[test]
    fn test_disabled_base_reports_its_problem() {
        let parser: Number<(), &str, u64> = number(NumberConfig {
            int: Ok(identity::<u64>),
            hex: Err("no hex"),
            octal: Err("no octal"),
            binary: Err("no binary"),
            float: Err("no float"),
            invalid: "invalid",
            expecting: "expecting",
        });
        assert_eq!(failure(run(&parser, "0x10")), (1, "no hex"));
        assert_eq!(failure(run(&parser, "0b10")), (1, "no binary"));
        assert_eq!(failure(run(&parser, "1.5")), (1, "no float"));
    }

    #[test]
    fn test_overflow_is_invalid() {
        let step = int::<(), _>("int", "invalid").parse(State::new("99999999999999999999"));
        assert!(step.progress());
        assert_eq!(failure(run(&int("int", "invalid"), "99999999999999999999")), (1, "invalid"));
        let result: Outcome<u64> = run(&int("int", "invalid"), "18446744073709551615");
        assert_eq!(result, Ok(u64::MAX));
    }

    #[test]
    fn test_number_inside_a_map() {
        let parser = int("int", "invalid").map(|n| n * 2);
        let result: Outcome<u64> = run(&parser, "21");
        assert_eq!(result, Ok(42));
    }
}
