//! Typed counter piece records elaborated from table rows.
//!
//! [`CounterRecord`] is the validated form the drawing layout consumes.
//! Required dimensions are checked here (present, numeric, positive,
//! finite), and optional fields are resolved once at construction:
//! absent or empty cells become `None`, and the display accessors
//! substitute their declared defaults in one place.

use counterdraw_core::units::mm_to_inches;

use crate::{error::RecordError, table::Row};

/// Placeholder shown for optional fields with no value.
pub const NOT_AVAILABLE: &str = "N/A";

/// One counter piece, as selected from the source table.
///
/// Construction always validates the dimensions, so a `CounterRecord` can
/// be laid out without further checks.
///
/// # Examples
///
/// ```
/// # use counterdraw_table::CounterRecord;
/// let record = CounterRecord::new("Kitchen-1", "AHU-3", "1", 1000.0, 500.0)
///     .unwrap()
///     .with_finish(Some("Matte".to_string()));
///
/// assert!((record.width_in() - 39.37).abs() < 0.01);
/// assert_eq!(record.finish(), "Matte");
/// assert_eq!(record.backsplash(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRecord {
    location: String,
    ahu: String,
    priority: String,
    width_mm: f32,
    depth_mm: f32,
    finish: Option<String>,
    rolled_width: Option<String>,
    backsplash: Option<String>,
    cap_lh: Option<String>,
    cap_rh: Option<String>,
    comments: Option<String>,
}

impl CounterRecord {
    /// Creates a record from its required fields, validating the
    /// dimensions. Optional fields start empty; use the `with_*` builders
    /// to fill them.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonPositive`] when a dimension is zero,
    /// negative, or not finite.
    pub fn new(
        location: impl Into<String>,
        ahu: impl Into<String>,
        priority: impl Into<String>,
        width_mm: f32,
        depth_mm: f32,
    ) -> Result<Self, RecordError> {
        validate_dimension("Width", width_mm)?;
        validate_dimension("Depth", depth_mm)?;

        Ok(Self {
            location: location.into(),
            ahu: ahu.into(),
            priority: priority.into(),
            width_mm,
            depth_mm,
            finish: None,
            rolled_width: None,
            backsplash: None,
            cap_lh: None,
            cap_rh: None,
            comments: None,
        })
    }

    /// Elaborates one table row into a validated record.
    ///
    /// Optional columns may be missing entirely; their cells resolve the
    /// same way as empty values.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when a required value is missing or a
    /// dimension fails to parse or is non-positive.
    pub fn from_row(row: &Row<'_>) -> Result<Self, RecordError> {
        let location = required_value(row, "Location")?;
        let ahu = required_value(row, "AHU")?;
        let priority = raw_value(row, "Priority");
        let width_mm = dimension_value(row, "Width")?;
        let depth_mm = dimension_value(row, "Depth")?;

        let record = Self::new(location, ahu, priority, width_mm, depth_mm)?
            .with_finish(optional_value(row, "Finish"))
            .with_rolled_width(optional_value(row, "Rolled width"))
            .with_backsplash(optional_value(row, "Backsplash"))
            .with_cap_lh(optional_value(row, "Cap LH"))
            .with_cap_rh(optional_value(row, "Cap RH"))
            .with_comments(optional_value(row, "Comments"));

        Ok(record)
    }

    /// Sets the finish field (builder style).
    pub fn with_finish(mut self, finish: Option<String>) -> Self {
        self.finish = finish;
        self
    }

    /// Sets the rolled width field (builder style).
    pub fn with_rolled_width(mut self, rolled_width: Option<String>) -> Self {
        self.rolled_width = rolled_width;
        self
    }

    /// Sets the backsplash field (builder style).
    pub fn with_backsplash(mut self, backsplash: Option<String>) -> Self {
        self.backsplash = backsplash;
        self
    }

    /// Sets the left cap field (builder style).
    pub fn with_cap_lh(mut self, cap_lh: Option<String>) -> Self {
        self.cap_lh = cap_lh;
        self
    }

    /// Sets the right cap field (builder style).
    pub fn with_cap_rh(mut self, cap_rh: Option<String>) -> Self {
        self.cap_rh = cap_rh;
        self
    }

    /// Sets the comments field (builder style).
    pub fn with_comments(mut self, comments: Option<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Returns the location identifier.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the AHU zone label.
    pub fn ahu(&self) -> &str {
        &self.ahu
    }

    /// Returns the priority label exactly as it appears in the table.
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Returns the piece width in millimeters.
    pub fn width_mm(&self) -> f32 {
        self.width_mm
    }

    /// Returns the piece depth in millimeters.
    pub fn depth_mm(&self) -> f32 {
        self.depth_mm
    }

    /// Returns the piece width in inches.
    pub fn width_in(&self) -> f32 {
        mm_to_inches(self.width_mm)
    }

    /// Returns the piece depth in inches.
    pub fn depth_in(&self) -> f32 {
        mm_to_inches(self.depth_mm)
    }

    /// Returns the finish for display, defaulting to [`NOT_AVAILABLE`].
    pub fn finish(&self) -> &str {
        self.finish.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the rolled width for display, defaulting to [`NOT_AVAILABLE`].
    pub fn rolled_width(&self) -> &str {
        self.rolled_width.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the backsplash for display, defaulting to [`NOT_AVAILABLE`].
    pub fn backsplash(&self) -> &str {
        self.backsplash.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the left cap for display, defaulting to [`NOT_AVAILABLE`].
    pub fn cap_lh(&self) -> &str {
        self.cap_lh.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the right cap for display, defaulting to [`NOT_AVAILABLE`].
    pub fn cap_rh(&self) -> &str {
        self.cap_rh.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the comments for display, defaulting to the empty string
    /// (not [`NOT_AVAILABLE`]).
    pub fn comments(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }
}

/// Reads a cell that must carry a non-empty value.
fn required_value(row: &Row<'_>, column: &str) -> Result<String, RecordError> {
    match row.value(column).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(RecordError::MissingValue {
            column: column.to_string(),
        }),
    }
}

/// Reads a cell verbatim, treating a missing cell as empty.
fn raw_value(row: &Row<'_>, column: &str) -> String {
    row.value(column).unwrap_or_default().trim().to_string()
}

/// Reads an optional cell, resolving absent and empty values to `None`.
fn optional_value(row: &Row<'_>, column: &str) -> Option<String> {
    match row.value(column).map(str::trim) {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => None,
    }
}

/// Reads and validates a millimeter dimension cell.
fn dimension_value(row: &Row<'_>, column: &str) -> Result<f32, RecordError> {
    let raw = required_value(row, column)?;
    let value: f32 = raw
        .parse()
        .map_err(|_| RecordError::InvalidNumber {
            column: column.to_string(),
            value: raw.clone(),
        })?;
    validate_dimension(column, value)?;
    Ok(value)
}

fn validate_dimension(column: &str, value: f32) -> Result<(), RecordError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RecordError::NonPositive {
            column: column.to_string(),
            value,
        });
    }
    Ok(())
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn dimension_strategy() -> impl Strategy<Value = f32> {
        0.1f32..100_000.0
    }

    /// A record built from positive dimensions always converts both
    /// dimensions with the same fixed factor.
    fn check_conversion_consistency(width: f32, depth: f32) -> Result<(), TestCaseError> {
        let record = CounterRecord::new("A", "B", "1", width, depth).unwrap();

        prop_assert!((record.width_in() * 25.4 - width).abs() < width * 0.001 + 0.01);
        prop_assert!((record.depth_in() * 25.4 - depth).abs() < depth * 0.001 + 0.01);
        Ok(())
    }

    /// Non-positive dimensions are always rejected.
    fn check_non_positive_rejected(value: f32) -> Result<(), TestCaseError> {
        prop_assert!(CounterRecord::new("A", "B", "1", -value, 100.0).is_err());
        prop_assert!(CounterRecord::new("A", "B", "1", 100.0, -value).is_err());
        Ok(())
    }

    proptest! {
        #[test]
        fn conversion_consistency(width in dimension_strategy(), depth in dimension_strategy()) {
            check_conversion_consistency(width, depth)?;
        }

        #[test]
        fn non_positive_rejected(value in 0.0f32..100_000.0) {
            check_non_positive_rejected(value)?;
        }
    }
}
