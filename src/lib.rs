//! A library for importing RIS bibliographic files into BibTeX-style entries.
//!
//! `risbib` reads the RIS tagged format exported by reference managers and literature
//! databases and converts every record into a [`BibEntry`]: an entry type plus a map of
//! BibTeX field names to values.
//!
//! # Key Features
//!
//! - **Lenient Parsing**: Malformed lines and records never fail an import
//!   - Wrapped values are joined back onto their tag
//!   - Preamble text before the first record is ignored
//!   - CRLF and LF line endings are both accepted
//!
//! - **Field Mapping**:
//!   - RIS reference types mapped to BibTeX entry types
//!   - Title, journal and secondary title precedence
//!   - Date priority across `Y1`, `PY`, `DA` and `Y2`
//!   - DOI prefix stripping and page range assembly
//!
//! - **Pluggable Author Normalization** through the [`AuthorNormalizer`] trait
//!
//! # Basic Usage
//!
//! ```rust
//! use risbib::{Importer, RisImporter};
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Article
//! AU  - Smith, John
//! ER  -"#;
//!
//! let importer = RisImporter::new();
//! let result = importer.import_database(input).unwrap();
//! println!("Title: {:?}", result.entries()[0].field("title"));
//! ```
//!
//! # Parallel Import
//!
//! ```rust
//! use risbib::{Importer, ImporterConfig, RisImporter};
//!
//! let config = ImporterConfig {
//!     run_in_parallel: true,
//!     ..Default::default()
//! };
//!
//! let importer = RisImporter::new().with_config(config);
//! let result = importer
//!     .import_database("TY  - BOOK\nT1  - First\nER  - \nTY  - BOOK\nT1  - Second\nER  - \n")
//!     .unwrap();
//! assert_eq!(result.len(), 2);
//! ```
//!
//! # Error Handling
//!
//! The library uses a custom [`Result`] type that wraps [`ImportError`]. Only I/O failures
//! and, when requested, unrecognized input are reported as errors:
//!
//! ```rust
//! use risbib::{ImportError, Importer, ImporterConfig, RisImporter};
//!
//! let importer = RisImporter::new().with_config(ImporterConfig {
//!     require_recognized_format: true,
//!     ..Default::default()
//! });
//! match importer.import_database("invalid input") {
//!     Ok(result) => println!("Imported {} entries", result.len()),
//!     Err(ImportError::UnrecognizedFormat(format)) => eprintln!("Not a {format} file"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! # Thread Safety
//!
//! The importer holds no mutable state and can be shared between threads.
//! Record mapping can run on the rayon thread pool through the `run_in_parallel` option.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod author;
pub mod entry;
mod regex;
pub mod ris;
mod utils;

// Reexports
pub use author::{AuthorNormalizer, LastNameFirst};
pub use entry::{BibEntry, EntryType, Month};
pub use ris::{ImporterConfig, RisImporter};

/// A specialized Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Represents errors that can occur during an import.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is not in {0} format")]
    UnrecognizedFormat(String),
}

/// The entries produced by one import, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserResult {
    entries: Vec<BibEntry>,
}

impl ParserResult {
    pub fn new(entries: Vec<BibEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BibEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<BibEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ParserResult {
    type Item = BibEntry;
    type IntoIter = std::vec::IntoIter<BibEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Trait for implementing bibliographic importers.
pub trait Importer {
    /// Short name of the format, e.g. `RIS`.
    fn name(&self) -> &str;

    /// File extensions associated with the format, without the leading dot.
    fn extensions(&self) -> &[&str];

    fn description(&self) -> &str;

    /// Check whether the input looks like this format.
    fn is_recognized_format(&self, input: &str) -> bool;

    /// Import a string containing zero or more records.
    ///
    /// # Arguments
    ///
    /// * `input` - The full text of the file
    ///
    /// # Returns
    ///
    /// A Result containing the imported entries or an ImportError
    fn import_database(&self, input: &str) -> Result<ParserResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_error_display() {
        let error = ImportError::UnrecognizedFormat("RIS".to_string());
        assert_eq!(error.to_string(), "Input is not in RIS format");
    }

    #[test]
    fn test_io_error_conversion() {
        let error: ImportError = std::io::Error::other("broken pipe").into();
        assert_eq!(error.to_string(), "IO error: broken pipe");
    }

    #[test]
    fn test_parser_result_accessors() {
        let mut entry = BibEntry::new(EntryType::Book);
        entry.set_field(entry::field::TITLE, "A");
        let result = ParserResult::new(vec![entry.clone(), BibEntry::default()]);
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.entries()[0], entry);
        assert_eq!(result.into_iter().next(), Some(entry));
        assert!(ParserResult::default().is_empty());
    }

    #[test]
    fn test_importer_as_trait_object() {
        let importers: Vec<Box<dyn Importer>> = vec![Box::new(RisImporter::new())];
        let importer = importers
            .iter()
            .find(|importer| importer.extensions().contains(&"ris"))
            .unwrap();
        assert!(importer.is_recognized_format("TY  - JOUR\nER  - \n"));
        assert_eq!(importer.import_database("").unwrap().len(), 0);
    }
}
