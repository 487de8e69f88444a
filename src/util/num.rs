/// Formats a number the way the calculator displays it.
///
/// Finite values are written in their shortest decimal form that parses back
/// to the same `f64`, never in exponent notation. Negative zero is shown as
/// `0`. Non-finite values are written as `inf`, `-inf` or `NaN`.
///
/// ## Example
/// ```
/// use abacus::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
