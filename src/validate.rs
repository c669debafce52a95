//! Rejects malformed input before the scanner ever sees it.

use crate::config::{
    ALLOWED_SYMBOLS, BINARY_OPERATORS, FORBIDDEN_FIRST, FORBIDDEN_LAST, KNOWN_IDENTIFIERS,
    MAX_EXPRESSION_LEN,
};
use crate::debug::debug_println;
use crate::error::{CalcError, SyntaxError};
use crate::normalize::{close_brackets, expand_exponent, normalize_signs};

pub fn check_length(input: &str) -> Result<(), CalcError> {
    let len = input.chars().count();
    if len > MAX_EXPRESSION_LEN {
        return Err(CalcError::syntax_at(
            SyntaxError::TooLong(len),
            MAX_EXPRESSION_LEN,
        ));
    }
    Ok(())
}

/// Every maximal run of ASCII letters must be a known function or constant.
/// `si`, `sinn` and `x` all fail here.
pub fn check_identifiers(input: &str) -> Result<(), CalcError> {
    let bytes = input.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        if !bytes[index].is_ascii_alphabetic() {
            index += 1;
            continue;
        }
        let start = index;
        while index < bytes.len() && bytes[index].is_ascii_alphabetic() {
            index += 1;
        }
        let word = &input[start..index];
        if !KNOWN_IDENTIFIERS.contains(&word) {
            return Err(CalcError::syntax_at(
                SyntaxError::UnknownIdentifier(word.to_owned()),
                start,
            ));
        }
    }

    Ok(())
}

pub fn check_characters(input: &str) -> Result<(), CalcError> {
    match input
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_alphabetic() && !ALLOWED_SYMBOLS.contains(c))
    {
        Some((pos, c)) => Err(CalcError::syntax_at(SyntaxError::IllegalCharacter(c), pos)),
        None => Ok(()),
    }
}

/// Runs on the exponent-expanded string, before missing brackets are appended.
pub fn check_ends(input: &str) -> Result<(), CalcError> {
    let (first, last) = match (input.chars().next(), input.chars().last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(CalcError::syntax(SyntaxError::Empty)),
    };
    if FORBIDDEN_LAST.contains(last) {
        return Err(CalcError::syntax(SyntaxError::BadEnd(last)));
    }
    if FORBIDDEN_FIRST.contains(first) {
        return Err(CalcError::syntax(SyntaxError::BadStart(first)));
    }
    Ok(())
}

/// No binary operator may open or close the expression, or touch another one.
pub fn check_operator_adjacency(input: &str) -> Result<(), CalcError> {
    let bytes = input.as_bytes();
    let is_operator = |b: u8| BINARY_OPERATORS.as_bytes().contains(&b);

    for (i, &b) in bytes.iter().enumerate() {
        if !is_operator(b) {
            continue;
        }
        let at_edge = i == 0 || i == bytes.len() - 1;
        if at_edge || is_operator(bytes[i - 1]) || is_operator(bytes[i + 1]) {
            return Err(CalcError::syntax(SyntaxError::MisplacedOperator(
                b as char,
            )));
        }
    }

    Ok(())
}

/// Validates `input` and returns the normalized string the scanner runs on.
pub fn check_input(input: &str) -> Result<String, CalcError> {
    debug_println(&format!("Checking input: {}", input));
    check_length(input)?;
    check_identifiers(input)?;
    check_characters(input)?;

    let expanded = expand_exponent(input);
    check_ends(&expanded)?;
    let closed = close_brackets(&expanded)?;

    let normalized = normalize_signs(&closed);
    check_operator_adjacency(&normalized)?;

    debug_println(&format!("Normalized: {}", normalized));
    Ok(normalized)
}
