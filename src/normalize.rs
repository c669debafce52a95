//! Rewrites that turn what people type into what the scanner expects.
//!
//! Each step is a plain `&str -> String` pass; `validate::check_input` decides
//! the order they run in.

use crate::config::EXPONENT_EXPANSION;
use crate::debug::debug_println;
use crate::error::{CalcError, SyntaxError};

/// Collapses every run of `+`/`-` into one sign: `-` when the run holds an odd
/// number of `-`, `+` otherwise. `+-` and `-+` come out as `-`, so the result
/// has no adjacent signs left.
pub fn collapse_signs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '+' && c != '-' {
            out.push(c);
            continue;
        }
        let mut negative = c == '-';
        while let Some(&next) = chars.peek() {
            match next {
                '-' => negative = !negative,
                '+' => {}
                _ => break,
            }
            chars.next();
        }
        out.push(if negative { '-' } else { '+' });
    }

    out
}

/// `(-x` becomes `(0-x`, and a leading sign gets a `0` in front of it.
pub fn insert_implicit_zeros(input: &str) -> String {
    let mut out = input.replace("(-", "(0-");
    if out.len() > 1 && (out.starts_with('-') || out.starts_with('+')) {
        out.insert(0, '0');
    }
    out
}

/// Sign collapsing followed by zero insertion.
pub fn normalize_signs(input: &str) -> String {
    let out = insert_implicit_zeros(&collapse_signs(input));
    debug_println(&format!("Signs normalized: {}", out));
    out
}

pub fn expand_exponent(input: &str) -> String {
    input.replace('E', EXPONENT_EXPANSION)
}

/// How many `(` are still waiting for their `)`. Negative means too many `)`.
pub fn bracket_deficit(input: &str) -> isize {
    input.chars().fold(0isize, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}

/// Appends the missing `)`. Excess closing brackets are an error, never dropped.
pub fn close_brackets(input: &str) -> Result<String, CalcError> {
    let deficit = bracket_deficit(input);
    if deficit < 0 {
        return Err(CalcError::syntax(SyntaxError::ExcessClosingBracket));
    }
    let mut out = String::with_capacity(input.len() + deficit as usize);
    out.push_str(input);
    out.extend(std::iter::repeat(')').take(deficit as usize));
    Ok(out)
}
