//! The explicit table cache.
//!
//! Repeated selections reuse the already-fetched table instead of hitting
//! the source again. The cache is keyed by source address and invalidated
//! only on request or process restart; it is an ordinary value the caller
//! owns and injects, not a process-wide global.

use std::{collections::HashMap, sync::Arc};

use log::{debug, info};

use crate::{error::TableError, source::TableSource, table::SheetTable};

/// A cache of parsed tables keyed by source address.
///
/// # Examples
///
/// ```no_run
/// # use counterdraw_table::{TableCache, source_for};
/// let mut cache = TableCache::new();
/// let source = source_for("counters.csv");
///
/// let table = cache.load(source.as_ref()).unwrap();
/// let again = cache.load(source.as_ref()).unwrap(); // no re-fetch
/// assert_eq!(table.len(), again.len());
/// ```
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<String, Arc<SheetTable>>,
}

impl TableCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for the source's address, fetching and
    /// parsing it on the first call.
    pub fn load(&mut self, source: &dyn TableSource) -> Result<Arc<SheetTable>, TableError> {
        if let Some(table) = self.entries.get(source.address()) {
            debug!(address = source.address(); "Table cache hit");
            return Ok(Arc::clone(table));
        }

        info!(address = source.address(); "Loading table");
        let csv_text = source.fetch()?;
        let table = Arc::new(SheetTable::parse(&csv_text)?);

        self.entries
            .insert(source.address().to_string(), Arc::clone(&table));

        Ok(table)
    }

    /// Removes the cached table for an address. Returns true if an entry
    /// was present.
    pub fn invalidate(&mut self, address: &str) -> bool {
        self.entries.remove(address).is_some()
    }

    /// Drops every cached table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if a table is cached for the address.
    pub fn contains(&self, address: &str) -> bool {
        self.entries.contains_key(address)
    }
}
