use crate::config::FRACTION_DIGITS;
use crate::error::CalcError;

/// Fixed 7-digit decimal, then trailing fractional zeros and a bare `.` go.
/// NaN and infinities never make it into a string.
pub fn format_result(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite(value));
    }
    let fixed = format!("{:.*}", FRACTION_DIGITS, value);
    Ok(trim_zeros(fixed))
}

fn trim_zeros(mut number: String) -> String {
    if !number.contains('.') {
        return number;
    }
    let mut index = number.len();
    while index > 0 && number.as_bytes()[index - 1] == b'0' {
        index -= 1;
    }
    if index > 0 && number.as_bytes()[index - 1] == b'.' {
        index -= 1;
    }
    number.truncate(index);
    number
}
