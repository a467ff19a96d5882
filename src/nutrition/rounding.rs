//! Presentation rounding
//!
//! Report values are rounded to two decimals through correctly rounded
//! decimal formatting, so ties resolve half-to-even on the exact binary
//! value rather than on `x * 100`.

/// Number of decimal places shown in reports
pub const REPORT_DECIMALS: usize = 2;

/// Round a value to `REPORT_DECIMALS` places. Non-finite values are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", REPORT_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
