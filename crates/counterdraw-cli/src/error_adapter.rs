//! Error adapter for converting CounterDrawError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. None of
//! the library errors carry source spans, so the adapter supplies stable
//! error codes and optional help text only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use counterdraw::CounterDrawError;

/// Adapter wrapping a [`CounterDrawError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a CounterDrawError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CounterDrawError::Io(_) => "counterdraw::io",
            CounterDrawError::Table(_) => "counterdraw::table",
            CounterDrawError::Record(_) => "counterdraw::record",
            CounterDrawError::Selection(_) => "counterdraw::selection",
            CounterDrawError::Export(_) => "counterdraw::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CounterDrawError::Record(_) => {
                "check the Width and Depth cells of the selected row in the source table"
            }
            CounterDrawError::Selection(_) => {
                "run with --list-locations to see the available locations"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use counterdraw_table::RecordError;

    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let selection = CounterDrawError::Selection("location `X` not found".to_string());
        assert_eq!(
            ErrorAdapter(&selection).code().unwrap().to_string(),
            "counterdraw::selection"
        );

        let record = CounterDrawError::Record(RecordError::NonPositive {
            column: "Width".to_string(),
            value: -1.0,
        });
        assert_eq!(
            ErrorAdapter(&record).code().unwrap().to_string(),
            "counterdraw::record"
        );
    }

    #[test]
    fn test_display_passes_through() {
        let err = CounterDrawError::Selection("table has no locations to select".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "selection error: table has no locations to select"
        );
    }

    #[test]
    fn test_help_only_where_actionable() {
        let selection = CounterDrawError::Selection("nope".to_string());
        assert!(ErrorAdapter(&selection).help().is_some());

        let io = CounterDrawError::Io(std::io::Error::other("disk on fire"));
        assert!(ErrorAdapter(&io).help().is_none());
    }
}
