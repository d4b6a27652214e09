//! Unit conversion between millimeters and inches.
//!
//! Source tables record piece dimensions in millimeters; drawings are laid
//! out in inches. The conversion factor is the exact definition of the
//! inch, and values are only rounded at display time.

/// Millimeters per inch, by definition.
pub const MM_PER_INCH: f32 = 25.4;

/// Converts a length in millimeters to inches.
///
/// No rounding is applied; callers format for display with
/// [`format_inches`].
///
/// # Examples
///
/// ```
/// # use counterdraw_core::units::mm_to_inches;
/// let width = mm_to_inches(1000.0);
/// assert!((width - 39.370_08).abs() < 0.0001);
/// ```
pub fn mm_to_inches(mm: f32) -> f32 {
    mm / MM_PER_INCH
}

/// Formats a length in inches for display, rounded to two decimal places
/// with the `" in"` suffix.
///
/// # Examples
///
/// ```
/// # use counterdraw_core::units::{format_inches, mm_to_inches};
/// assert_eq!(format_inches(mm_to_inches(1000.0)), "39.37 in");
/// assert_eq!(format_inches(mm_to_inches(500.0)), "19.69 in");
/// ```
pub fn format_inches(value: f32) -> String {
    format!("{value:.2} in")
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn mm_strategy() -> impl Strategy<Value = f32> {
        0.0f32..100_000.0
    }

    /// Conversion is linear: converting a sum equals the sum of conversions.
    fn check_conversion_is_linear(a: f32, b: f32) -> Result<(), TestCaseError> {
        let combined = mm_to_inches(a + b);
        let separate = mm_to_inches(a) + mm_to_inches(b);

        prop_assert!(approx_eq!(f32, combined, separate, epsilon = 0.01));
        Ok(())
    }

    /// Converting to inches and scaling back by the factor recovers the input.
    fn check_conversion_roundtrip(mm: f32) -> Result<(), TestCaseError> {
        let back = mm_to_inches(mm) * MM_PER_INCH;

        prop_assert!(approx_eq!(f32, back, mm, epsilon = 0.05));
        Ok(())
    }

    /// Formatted output always carries two decimals and the inch suffix.
    fn check_format_shape(mm: f32) -> Result<(), TestCaseError> {
        let formatted = format_inches(mm_to_inches(mm));

        prop_assert!(formatted.ends_with(" in"));
        let number = formatted.trim_end_matches(" in");
        let decimals = number.split('.').nth(1).unwrap_or("");
        prop_assert_eq!(decimals.len(), 2, "expected two decimals in {}", formatted);
        Ok(())
    }

    proptest! {
        #[test]
        fn conversion_is_linear(a in mm_strategy(), b in mm_strategy()) {
            check_conversion_is_linear(a, b)?;
        }

        #[test]
        fn conversion_roundtrip(mm in mm_strategy()) {
            check_conversion_roundtrip(mm)?;
        }

        #[test]
        fn format_shape(mm in mm_strategy()) {
            check_format_shape(mm)?;
        }
    }
}
