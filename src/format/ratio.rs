//! Dimensionless value/total quotients for percentage and rate output.

use crate::format::numeric::Scalable;
use crate::format::scale::{label, scale, PERCENT_UNIT, RATE_UNITS};

/// A value/total quotient, built once and formatted immediately.
///
/// A zero total yields a zero ratio rather than a division fault, so
/// progress output over an empty workload prints "0.00%" instead of
/// panicking. The quotient is not clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(f64);

impl Ratio {
    /// Compute `value / total`, with `total == 0` defined as ratio 0.
    pub fn new<T: Scalable, U: Scalable>(value: T, total: U) -> Self {
        let total = total.to_f64();
        if total == 0.0 {
            return Ratio(0.0);
        }
        Ratio(value.to_f64() / total)
    }

    /// Append the ratio as a percentage with two decimal digits.
    pub fn push_percent(self, out: &mut String) {
        label(out, self.0, PERCENT_UNIT);
    }

    /// Append the ratio as a scaled transfer rate, e.g. "1.50 kilobyte/s".
    ///
    /// The ratio is treated as bytes per second: construct it as
    /// `Ratio::new(bytes, seconds)`.
    pub fn push_rate(self, out: &mut String) {
        scale(out, self.0, RATE_UNITS);
    }
}
