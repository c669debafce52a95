//! Arithmetic expression evaluator.
//!
//! `evaluate` takes text such as `"sin(0.5)+2^3"` and returns either a
//! fixed-point decimal string or the sentinel `"Error"`. `calculate` runs the
//! same pipeline but keeps the failure reason:
//!
//! raw string -> `validate::check_input` (checks + normalization)
//!            -> `eval::evaluate_normalized` (two-stack scan)
//!            -> `format::format_result`
//!
//! Nothing is cached or shared between calls.

pub mod config;
pub mod debug;
pub mod error;
pub mod eval;
pub mod format;
pub mod normalize;
pub mod token;
pub mod validate;

pub use config::ERROR_SENTINEL;
pub use debug::{debug_enabled, set_debug, toggle_debug};
pub use error::{CalcError, DomainError, ErrorKind, StructuralError, SyntaxError};
pub use token::Operator;

use debug::debug_println;

fn run(expression: &str) -> Result<f64, CalcError> {
    let normalized = validate::check_input(expression)?;
    eval::evaluate_normalized(&normalized)
}

/// Evaluates `expression` and returns its finite numeric value.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let value = run(expression)?;
    if !value.is_finite() {
        return Err(CalcError::NonFinite(value));
    }
    Ok(value)
}

/// Like `calculate`, but returns the formatted result.
pub fn calculate_formatted(expression: &str) -> Result<String, CalcError> {
    format::format_result(run(expression)?)
}

/// String in, string out. Every failure becomes [`ERROR_SENTINEL`].
pub fn evaluate(expression: &str) -> String {
    match calculate_formatted(expression) {
        Ok(result) => result,
        Err(err) => {
            debug_println(&format!("{:?} rejected: {}", expression, err));
            ERROR_SENTINEL.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_hides_the_reason() {
        assert_eq!(evaluate("10/0"), "Error");
        assert_eq!(evaluate("si(1)"), "Error");
        assert_eq!(evaluate("sqrt(-1)"), "Error");
    }

    #[test]
    fn calculate_keeps_the_reason() {
        assert_eq!(calculate("10/0").unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(calculate("si(1)").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(calculate("sqrt(-1)").unwrap_err().kind(), ErrorKind::Numeric);
        assert_eq!(calculate("2sin(1)").unwrap_err().kind(), ErrorKind::Structural);
        assert_eq!(calculate("2+3*4"), Ok(14.0));
    }

    #[test]
    fn formatted_and_plain_agree() {
        assert_eq!(calculate_formatted("1/3").unwrap(), "0.3333333");
        assert_eq!(evaluate("1/3"), "0.3333333");
    }
}
