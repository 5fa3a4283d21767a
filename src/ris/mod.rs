//! RIS format importer implementation.
//!
//! Converts RIS tagged files into [`BibEntry`] values with BibTeX-style fields.
//!
//! # Example
//!
//! ```
//! use risbib::{Importer, RisImporter, EntryType};
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Title
//! AU  - Smith, John
//! PY  - 2019/05
//! ER  - "#;
//!
//! let importer = RisImporter::new();
//! assert!(importer.is_recognized_format(input));
//!
//! let result = importer.import_database(input).unwrap();
//! let entry = &result.entries()[0];
//! assert_eq!(entry.entry_type(), EntryType::Article);
//! assert_eq!(entry.field("title"), Some("Example Title"));
//! assert_eq!(entry.field("year"), Some("2019"));
//! assert_eq!(entry.field("month"), Some("#may#"));
//! ```

mod date;
mod parse;
mod split;
mod structure;
mod tags;
mod whole_lines;

use crate::author::{AuthorNormalizer, LastNameFirst};
use crate::{BibEntry, ImportError, Importer, ParserResult, Result};
use parse::{is_recognized, is_start_of_record, ris_parse};
use std::io::BufRead;
use tracing::debug;

/// Configuration options for the RIS importer.
///
/// # Examples
///
/// ```
/// use risbib::{ImporterConfig, RisImporter};
///
/// let config = ImporterConfig {
///     run_in_parallel: true,
///     require_recognized_format: true,
/// };
/// let importer = RisImporter::new().with_config(config);
/// assert!(importer.config().run_in_parallel);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ImporterConfig {
    /// Whether to map records on the rayon thread pool.
    /// Ignored unless the `parallel` feature is enabled. Entry order is unaffected.
    pub run_in_parallel: bool,
    /// Whether input without any `TY  - ` line is rejected with
    /// [`ImportError::UnrecognizedFormat`] instead of being imported.
    pub require_recognized_format: bool,
}

/// Importer for RIS format files.
///
/// RIS is a tagged format for bibliographic citations that uses two-letter
/// tags at the start of each line to denote different citation fields.
/// Author and editor lists are normalized with `N`, [`LastNameFirst`] by default.
#[derive(Debug, Default, Clone)]
pub struct RisImporter<N = LastNameFirst> {
    config: ImporterConfig,
    normalizer: N,
}

impl RisImporter {
    /// Creates a new RIS importer instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use risbib::RisImporter;
    /// let importer = RisImporter::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: AuthorNormalizer> RisImporter<N> {
    /// Replaces the importer configuration.
    #[must_use]
    pub fn with_config(mut self, config: ImporterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// Replaces the normalizer applied to author and editor lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use risbib::{Importer, RisImporter};
    ///
    /// let importer = RisImporter::new().with_author_normalizer(|names: &str| names.to_uppercase());
    /// let result = importer.import_database("TY  - BOOK\nAU  - Smith, John\nER  - \n").unwrap();
    /// assert_eq!(result.entries()[0].field("author"), Some("SMITH, JOHN"));
    /// ```
    #[must_use]
    pub fn with_author_normalizer<M: AuthorNormalizer>(self, normalizer: M) -> RisImporter<M> {
        RisImporter {
            config: self.config,
            normalizer,
        }
    }

    /// Checks a reader for a RIS record start, stopping at the first match.
    ///
    /// The reader is consumed up to the matching line, so importing afterwards needs a
    /// fresh reader over the same data.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Io`] if reading a line fails.
    pub fn is_recognized_reader<R: BufRead>(&self, reader: R) -> Result<bool> {
        for line in reader.lines() {
            if is_start_of_record(&line?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Reads all lines from `reader` and imports them.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Io`] if reading fails; nothing is imported in that case.
    pub fn import_reader<R: BufRead>(&self, reader: R) -> Result<ParserResult> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        self.import_database(&lines.join("\n"))
    }

    fn parse_entries(&self, input: &str) -> Vec<BibEntry> {
        #[cfg(feature = "parallel")]
        if self.config.run_in_parallel {
            return parse::ris_parse_parallel(input, &self.normalizer);
        }
        #[cfg(not(feature = "parallel"))]
        if self.config.run_in_parallel {
            debug!("parallel feature disabled, importing sequentially");
        }
        ris_parse(input, &self.normalizer)
    }
}

impl<N: AuthorNormalizer> Importer for RisImporter<N> {
    fn name(&self) -> &str {
        "RIS"
    }

    fn extensions(&self) -> &[&str] {
        &["ris"]
    }

    fn description(&self) -> &str {
        "Imports a Biblioscape Tag File."
    }

    fn is_recognized_format(&self, input: &str) -> bool {
        is_recognized(input)
    }

    /// Imports every record of a RIS formatted string.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::UnrecognizedFormat`] if
    /// [`ImporterConfig::require_recognized_format`] is set and the input has no
    /// `TY  - ` line. Malformed records never fail the import.
    fn import_database(&self, input: &str) -> Result<ParserResult> {
        if self.config.require_recognized_format && !is_recognized(input) {
            debug!("rejecting input without a RIS record start");
            return Err(ImportError::UnrecognizedFormat(self.name().to_string()));
        }
        Ok(ParserResult::new(self.parse_entries(input)))
    }
}
