//! Magnitude selection and fixed-point rendering for scaled output.

use crate::format::numeric::Scalable;

/// A scale factor paired with the label appended after the rendered value.
///
/// The factor expresses how many of this unit equal one base unit, so it
/// is applied multiplicatively: 1500 bytes at factor 1e-3 renders as 1.50
/// kilobytes. Labels carry their own leading space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unit {
    pub factor: f64,
    pub label: &'static str,
}

/// Cardinal counts: bare number up to 999, then thousand/million/...
const CARDINAL_UNITS: &[Unit] = &[
    Unit { factor: 1.0, label: "" },
    Unit { factor: 1e-3, label: " thousand" },
    Unit { factor: 1e-6, label: " million" },
    Unit { factor: 1e-9, label: " billion" },
    Unit { factor: 1e-12, label: " trillion" },
];

/// Byte sizes in decimal (SI) steps.
const SIZE_UNITS: &[Unit] = &[
    Unit { factor: 1.0, label: " byte" },
    Unit { factor: 1e-3, label: " kilobyte" },
    Unit { factor: 1e-6, label: " megabyte" },
    Unit { factor: 1e-9, label: " gigabyte" },
    Unit { factor: 1e-12, label: " terabyte" },
];

/// Transfer rates, same steps as [`SIZE_UNITS`].
pub(crate) const RATE_UNITS: &[Unit] = &[
    Unit { factor: 1.0, label: " byte/s" },
    Unit { factor: 1e-3, label: " kilobyte/s" },
    Unit { factor: 1e-6, label: " megabyte/s" },
    Unit { factor: 1e-9, label: " gigabyte/s" },
    Unit { factor: 1e-12, label: " terabyte/s" },
];

/// Percentages always render through this single unit.
pub(crate) const PERCENT_UNIT: Unit = Unit { factor: 100.0, label: "%" };

/// Append `value` as a scaled cardinal count, e.g. `1500` -> "1.50 thousand".
pub fn push_cardinal<T: Scalable>(out: &mut String, value: T) {
    scale(out, value.to_f64(), CARDINAL_UNITS);
}

/// Append `value` as a scaled byte size, e.g. `1500` -> "1.50 kilobyte".
pub fn push_size<T: Scalable>(out: &mut String, value: T) {
    scale(out, value.to_f64(), SIZE_UNITS);
}

/// Select a unit from `units` and render `value` with it.
///
/// Takes the first unit whose scaled value stays below 1000, falling back
/// to the last (largest) unit when every scaled value is at or above it.
/// Negative values satisfy the comparison immediately and always land on
/// the first unit; callers rely on that staying put.
pub(crate) fn scale(out: &mut String, value: f64, units: &[Unit]) {
    let mut selected = Unit { factor: 1.0, label: "" };
    for &unit in units {
        selected = unit;
        if unit.factor * value < 1000.0 {
            break;
        }
    }
    label(out, value, selected);
}

/// Render `value` through `unit`: fixed-point number, then the label.
///
/// The base unit (factor exactly 1) renders with no decimal digits since
/// raw counts read as integers; every scaled unit gets two.
pub(crate) fn label(out: &mut String, value: f64, unit: Unit) {
    let precision = if unit.factor == 1.0 { 0 } else { 2 };
    let scaled = unit.factor * value;
    out.push_str(&format!("{scaled:.precision$}"));
    out.push_str(unit.label);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardinal(value: f64) -> String {
        let mut out = String::new();
        push_cardinal(&mut out, value);
        out
    }

    fn size(value: i64) -> String {
        let mut out = String::new();
        push_size(&mut out, value);
        out
    }

    #[test]
    fn test_cardinal_below_threshold() {
        assert_eq!(cardinal(0.0), "0");
        assert_eq!(cardinal(42.0), "42");
        assert_eq!(cardinal(999.0), "999");
    }

    #[test]
    fn test_cardinal_scaled() {
        assert_eq!(cardinal(1500.0), "1.50 thousand");
        assert_eq!(cardinal(1_000_000.0), "1.00 million");
        assert_eq!(cardinal(2_500_000_000.0), "2.50 billion");
        assert_eq!(cardinal(7_100_000_000_000.0), "7.10 trillion");
    }

    #[test]
    fn test_threshold_boundary() {
        // 999 stays on the base unit, 1000 rolls over
        assert_eq!(cardinal(999.0), "999");
        assert_eq!(cardinal(1000.0), "1.00 thousand");
    }

    #[test]
    fn test_size_units() {
        assert_eq!(size(0), "0 byte");
        assert_eq!(size(512), "512 byte");
        assert_eq!(size(1500), "1.50 kilobyte");
        assert_eq!(size(2_000_000), "2.00 megabyte");
        assert_eq!(size(3_200_000_000), "3.20 gigabyte");
    }

    #[test]
    fn test_largest_unit_fallback() {
        // Past the table's reach the largest unit soaks up the rest,
        // even though the scaled value is back above 1000.
        assert_eq!(cardinal(5e15), "5000.00 trillion");
        assert_eq!(size(9_000_000_000_000_000), "9000.00 terabyte");
    }

    #[test]
    fn test_negative_collapses_to_base_unit() {
        // Negative products are always below the threshold, so negative
        // values render with the base unit no matter their magnitude.
        // Long-standing behavior, kept as is.
        assert_eq!(size(-5000), "-5000 byte");
        assert_eq!(cardinal(-1_500_000.0), "-1500000");
    }

    #[test]
    fn test_append_preserves_prefix() {
        let mut out = String::from("total: ");
        push_size(&mut out, 1500u32);
        assert_eq!(out, "total: 1.50 kilobyte");
    }

    #[test]
    fn test_integer_and_float_inputs_agree() {
        let mut from_int = String::new();
        push_cardinal(&mut from_int, 1500u16);
        assert_eq!(from_int, cardinal(1500.0));
    }
}
