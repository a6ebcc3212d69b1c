//! String literal scanning and escape resolution.
//!
//! Escapes start with `:`:
//! - `:)` newline, `:>` tab, `::` colon
//! - `:"` and `:'` the quote characters
//! - `:(hex)` the Unicode scalar value `hex`

use crate::lex_error::LexErrorKind;

/// Find the closing `delim` of a string whose opening quote was already
/// consumed. Returns the content length in bytes, or `None` when the line or
/// input ends first.
pub(crate) fn scan_yarn(rest: &str, delim: char) -> Option<usize> {
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => return None,
            ':' => match chars.next() {
                None | Some((_, '\n')) => return None,
                Some(_) => {}
            },
            c if c == delim => return Some(i),
            _ => {}
        }
    }
    None
}

/// Resolve escapes in string content (quotes already stripped).
pub(crate) fn cook_yarn(raw: &str) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != ':' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(')') => out.push('\n'),
            Some('>') => out.push('\t'),
            Some(':') => out.push(':'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('(') => out.push(code_point(&mut chars)?),
            Some(other) => return Err(LexErrorKind::UnknownEscape(other)),
            None => return Err(LexErrorKind::UnterminatedString),
        }
    }

    Ok(out)
}

/// Read `hex)` after `:(` and convert it to a `char`.
fn code_point(chars: &mut std::str::Chars<'_>) -> Result<char, LexErrorKind> {
    let mut hex = String::new();
    loop {
        match chars.next() {
            Some(')') => break,
            Some(c) => hex.push(c),
            None => return Err(LexErrorKind::InvalidCodePoint(hex)),
        }
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(LexErrorKind::InvalidCodePoint(hex))
}
