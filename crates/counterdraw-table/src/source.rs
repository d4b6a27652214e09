//! Table acquisition sources.
//!
//! A [`TableSource`] produces the raw CSV text of the spreadsheet export.
//! Two implementations exist: [`FileSource`] for local CSV files and
//! [`HttpSource`] for published sheet URLs. [`source_for`] picks between
//! them based on the address prefix.

use std::{fs, path::PathBuf};

use log::info;

use crate::error::TableError;

/// Something that can produce the source table's CSV text.
///
/// The address doubles as the cache key in
/// [`TableCache`](crate::TableCache), so two sources with the same
/// address are treated as the same table.
pub trait TableSource {
    /// Returns the address identifying this source (path or URL).
    fn address(&self) -> &str;

    /// Fetches the CSV text.
    fn fetch(&self) -> Result<String, TableError>;
}

/// A CSV file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    address: String,
}

impl FileSource {
    /// Creates a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let address = path.to_string_lossy().to_string();
        Self { path, address }
    }
}

impl TableSource for FileSource {
    fn address(&self) -> &str {
        &self.address
    }

    fn fetch(&self) -> Result<String, TableError> {
        info!(path = self.address; "Reading table from file");
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// A CSV export published at an HTTP(S) URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    /// Creates a source fetching from the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl TableSource for HttpSource {
    fn address(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, TableError> {
        info!(url = self.url; "Fetching table over HTTP");

        let response = ureq::get(&self.url)
            .call()
            .map_err(|err| TableError::Fetch {
                address: self.url.clone(),
                message: err.to_string(),
            })?;

        response.into_string().map_err(TableError::Io)
    }
}

/// Builds the right source for an address: URLs go over HTTP, everything
/// else is read as a file path.
pub fn source_for(address: &str) -> Box<dyn TableSource> {
    if address.starts_with("http://") || address.starts_with("https://") {
        Box::new(HttpSource::new(address))
    } else {
        Box::new(FileSource::new(address))
    }
}
