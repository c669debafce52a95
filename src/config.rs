/// Longest accepted expression, in characters. Longer input is rejected, never truncated.
pub const MAX_EXPRESSION_LEN: usize = 255;

/// Digits kept after the decimal point before trailing zeros are stripped.
pub const FRACTION_DIGITS: usize = 7;

/// Threshold for the tangent pole check and for snapping tiny tangents to zero.
pub const TAN_EPSILON: f64 = 1e-7;

/// The only thing callers ever see when something goes wrong.
pub const ERROR_SENTINEL: &str = "Error";

/// Non-alphabetic characters allowed anywhere in an expression.
pub const ALLOWED_SYMBOLS: &str = "+-*/^().0123456789";

/// Binary operators, as checked for adjacency after sign normalization.
pub const BINARY_OPERATORS: &str = "*/^+-";

/// Every alphabetic run in the input must be exactly one of these.
pub const KNOWN_IDENTIFIERS: [&str; 12] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "mod", "ln", "Pi", "E", "sqrt",
];

/// Characters an expression may not end with (checked before auto-closing brackets).
pub const FORBIDDEN_LAST: &str = "+-*/^d(E";

/// Characters an expression may not start with.
pub const FORBIDDEN_FIRST: &str = "mE*/";

/// What `E` expands to: `1E5` reads as `1*(10)^5`.
pub const EXPONENT_EXPANSION: &str = "*(10)^";
