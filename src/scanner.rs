//! Code-unit level inspection of UTF-16 text.
//!
//! Every offset in this module is an index into a `[u16]` slice. A logical
//! character is one code unit, or two when it is a surrogate pair (a "wide"
//! character). Rows advance only on `\n`; `\r` is an ordinary character that
//! occupies a column, so a CRLF line break costs one column before the row
//! changes.
//!
//! Nothing here allocates or knows about parser state.

const NEWLINE: u16 = 0x0A;

/// Result of testing a single logical character with [`is_sub_char`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubChar {
    /// Out of range, or the predicate rejected the character
    Miss,
    /// The predicate accepted a `\n`; the caller starts a new row
    Newline,
    /// The predicate accepted the character; holds the offset after it
    Next(usize),
}

/// Code unit at `offset`, or `None` past the end of `text`
pub fn char_code_at(offset: usize, text: &[u16]) -> Option<u16> {
    text.get(offset).copied()
}

/// True when `code` is half of a surrogate pair
pub fn is_wide(code: u16) -> bool {
    code & 0xF800 == 0xD800
}

/// Decode the logical character at `offset` together with its width in code units.
///
/// Lone surrogates decode to U+FFFD. A wide unit at the very end of the text
/// has width 1 so offsets never run past the end.
pub fn char_at(offset: usize, text: &[u16]) -> Option<(char, usize)> {
    let code = *text.get(offset)?;
    if !is_wide(code) {
        let ch = char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER);
        return Some((ch, 1));
    }

    match text.get(offset + 1) {
        Some(&low) => {
            let ch = char::decode_utf16([code, low])
                .next()
                .and_then(Result::ok)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            Some((ch, 2))
        }
        None => Some((char::REPLACEMENT_CHARACTER, 1)),
    }
}

/// Test `predicate` against the logical character at `offset`.
///
/// A surrogate pair is always consumed as a whole.
pub fn is_sub_char<F>(predicate: F, offset: usize, text: &[u16]) -> SubChar
where
    F: Fn(char) -> bool,
{
    let Some((ch, width)) = char_at(offset, text) else {
        return SubChar::Miss;
    };

    if !predicate(ch) {
        SubChar::Miss
    } else if text[offset] == NEWLINE {
        SubChar::Newline
    } else {
        SubChar::Next(offset + width)
    }
}

/// Match `needle` literally at `offset`.
///
/// On success returns the offset after the match with `row`/`col` advanced
/// over the matched characters. On failure returns `None` and the position
/// passed in.
pub fn is_sub_string(
    needle: &[u16],
    offset: usize,
    row: usize,
    col: usize,
    haystack: &[u16],
) -> (Option<usize>, usize, usize) {
    if offset + needle.len() > haystack.len() {
        return (None, row, col);
    }

    let (mut i, mut o, mut r, mut c) = (0, offset, row, col);
    while i < needle.len() {
        let code = haystack[o];
        if needle[i] != code {
            return (None, row, col);
        }
        i += 1;
        o += 1;

        if code == NEWLINE {
            r += 1;
            c = 1;
        } else {
            c += 1;
            if is_wide(code) {
                // a needle that ends halfway through a pair never matches
                if i >= needle.len() || needle[i] != haystack[o] {
                    return (None, row, col);
                }
                i += 1;
                o += 1;
            }
        }
    }

    (Some(o), r, c)
}

/// Find the first occurrence of `needle` at or after `offset`.
///
/// Returns the offset of the occurrence (not past it) and the 1-based
/// row/column of that offset. When `needle` does not occur the offset is
/// `None` and the position is the end of `haystack`. A zero `row` or `col`
/// means the caller has no position for `offset`; the position is then
/// recomputed from the start of `haystack`.
pub fn find_sub_string(
    needle: &[u16],
    offset: usize,
    row: usize,
    col: usize,
    haystack: &[u16],
) -> (Option<usize>, usize, usize) {
    let found = index_of(needle, offset, haystack);
    let target = found.unwrap_or(haystack.len());

    let (mut o, mut r, mut c) = if row == 0 || col == 0 {
        (0, 1, 1)
    } else {
        (offset, row, col)
    };

    while o < target {
        let code = haystack[o];
        o += 1;
        if code == NEWLINE {
            r += 1;
            c = 1;
        } else {
            c += 1;
            if is_wide(code) {
                o += 1;
            }
        }
    }

    (found, r, c)
}

fn index_of(needle: &[u16], from: usize, haystack: &[u16]) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|index| from + index)
}

/// True when the code unit at `offset` is the ASCII byte `code`
pub fn is_ascii_code(code: u8, offset: usize, text: &[u16]) -> bool {
    char_code_at(offset, text) == Some(u16::from(code))
}

/// Scan digits of `base` starting at `offset`.
///
/// `base` is clamped to `2..=36`. Returns the offset after the last digit and
/// the accumulated value, or `None` for the value when it does not fit in a
/// `u64`.
pub fn consume_base(base: u32, offset: usize, text: &[u16]) -> (usize, Option<u64>) {
    let base = base.clamp(2, 36);
    let mut total = Some(0u64);
    let mut o = offset;

    while let Some(digit) = char_code_at(o, text)
        .and_then(|code| char::from_u32(u32::from(code)))
        .and_then(|ch| ch.to_digit(base))
    {
        total = total
            .and_then(|t| t.checked_mul(u64::from(base)))
            .and_then(|t| t.checked_add(u64::from(digit)));
        o += 1;
    }

    (o, total)
}

/// Scan hexadecimal digits, accepting both letter cases
pub fn consume_base16(offset: usize, text: &[u16]) -> (usize, Option<u64>) {
    consume_base(16, offset, text)
}

/// Offset after the run of ASCII decimal digits starting at `offset`
pub fn chomp_base10(offset: usize, text: &[u16]) -> usize {
    let mut o = offset;
    while matches!(char_code_at(o, text), Some(code) if (0x30..=0x39).contains(&code)) {
        o += 1;
    }
    o
}
