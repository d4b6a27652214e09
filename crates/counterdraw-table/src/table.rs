//! The in-memory table parsed from a spreadsheet's CSV export.
//!
//! A [`SheetTable`] is a header-indexed, row-oriented view of the CSV
//! text. It supports the two operations selection needs: listing the
//! unique `Location` values in first-seen order, and returning the first
//! row matching a chosen location.

use indexmap::IndexSet;
use log::debug;

use crate::error::TableError;

/// Column holding the selection key.
pub const COLUMN_LOCATION: &str = "Location";

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Location", "AHU", "Priority", "Width", "Depth"];

/// A parsed source table: headers plus data rows.
///
/// Rows may be ragged (spreadsheet exports often drop trailing empty
/// cells); lookups past the end of a row behave like empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Parses CSV text into a table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Csv`] for malformed CSV and
    /// [`TableError::MissingColumn`] when any of [`REQUIRED_COLUMNS`] is
    /// absent from the header row.
    pub fn parse(csv_text: &str) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == required) {
                return Err(TableError::MissingColumn {
                    name: required.to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|value| value.to_string()).collect());
        }

        debug!(row_count = rows.len(); "Parsed source table");

        Ok(Self { headers, rows })
    }

    /// Returns the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the unique `Location` values in first-seen order.
    ///
    /// Duplicate locations appear once; their first row is the one
    /// selection will return.
    pub fn locations(&self) -> Vec<&str> {
        let index = self
            .column_index(COLUMN_LOCATION)
            .expect("Location column presence is validated at parse time");

        let unique: IndexSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(String::as_str)
            .collect();

        unique.into_iter().collect()
    }

    /// Returns the first row whose `Location` equals the given value.
    pub fn row_for_location(&self, location: &str) -> Option<Row<'_>> {
        let index = self
            .column_index(COLUMN_LOCATION)
            .expect("Location column presence is validated at parse time");

        self.rows
            .iter()
            .find(|row| row.get(index).map(String::as_str) == Some(location))
            .map(|values| Row {
                table: self,
                values,
            })
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// A borrowed view of one table row with header-based cell access.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a SheetTable,
    values: &'a [String],
}

impl Row<'_> {
    /// Returns the cell under the named column.
    ///
    /// `None` when the column does not exist or the (ragged) row is too
    /// short to reach it.
    pub fn value(&self, column: &str) -> Option<&str> {
        let index = self.table.column_index(column)?;
        self.values.get(index).map(String::as_str)
    }
}
