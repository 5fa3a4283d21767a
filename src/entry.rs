//! Bibliographic entry model produced by the importers.
//!
//! An entry is a BibTeX-style record: an [`EntryType`] plus a flat map of field names to
//! string values. Field names written by the RIS importer are listed in [`field`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Names of the fields written by the importers.
pub mod field {
    pub const ABSTRACT: &str = "abstract";
    pub const ADDRESS: &str = "address";
    pub const AUTHOR: &str = "author";
    pub const BOOKTITLE: &str = "booktitle";
    pub const COMMENT: &str = "comment";
    pub const DOI: &str = "doi";
    pub const EDITION: &str = "edition";
    pub const EDITOR: &str = "editor";
    pub const EPRINT: &str = "eprint";
    pub const EPRINTTYPE: &str = "eprinttype";
    pub const EVENTTITLE: &str = "eventtitle";
    pub const ISSN: &str = "issn";
    pub const JOURNAL: &str = "journal";
    pub const KEYWORDS: &str = "keywords";
    pub const LANGUAGE: &str = "language";
    pub const MONTH: &str = "month";
    pub const NOTE: &str = "note";
    pub const NUMBER: &str = "number";
    pub const PAGES: &str = "pages";
    pub const PUBLISHER: &str = "publisher";
    pub const SCHOOL: &str = "school";
    pub const SERIES: &str = "series";
    pub const SHORTTITLE: &str = "shorttitle";
    pub const TITLE: &str = "title";
    pub const TRANSLATOR: &str = "translator";
    pub const URL: &str = "url";
    pub const VOLUME: &str = "volume";
    pub const YEAR: &str = "year";

    // No direct BibTeX counterpart.
    pub const ARCHIVE_LOCATION: &str = "archive_location";
    pub const CALL_NUMBER: &str = "call-number";
    pub const CAPTION: &str = "caption";
    pub const DATABASE: &str = "database";
    pub const NUMBER_OF_VOLUMES: &str = "number-of-volumes";
    pub const ORIGINAL_TITLE: &str = "original-title";
    pub const REFID: &str = "refid";
    pub const REVIEWED_TITLE: &str = "reviewed-title";
    pub const SECTION: &str = "section";
    pub const STATUS: &str = "status";
}

/// Type of a bibliographic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Article,
    Book,
    InCollection,
    InProceedings,
    Patent,
    PhdThesis,
    TechReport,
    Unpublished,
    #[default]
    Other,
}

impl EntryType {
    /// Resolves a type name such as `"article"` or `"InProceedings"`.
    ///
    /// Unknown and empty names resolve to [`EntryType::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use risbib::EntryType;
    ///
    /// assert_eq!(EntryType::from_name("phdthesis"), EntryType::PhdThesis);
    /// assert_eq!(EntryType::from_name("dataset"), EntryType::Other);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "article" => EntryType::Article,
            "book" => EntryType::Book,
            "incollection" => EntryType::InCollection,
            "inproceedings" => EntryType::InProceedings,
            "patent" => EntryType::Patent,
            "phdthesis" => EntryType::PhdThesis,
            "techreport" => EntryType::TechReport,
            "unpublished" => EntryType::Unpublished,
            _ => EntryType::Other,
        }
    }

    /// The lower-case name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Article => "article",
            EntryType::Book => "book",
            EntryType::InCollection => "incollection",
            EntryType::InProceedings => "inproceedings",
            EntryType::Patent => "patent",
            EntryType::PhdThesis => "phdthesis",
            EntryType::TechReport => "techreport",
            EntryType::Unpublished => "unpublished",
            EntryType::Other => "other",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Returns the month for a 1-based month number.
    ///
    /// # Examples
    ///
    /// ```
    /// use risbib::Month;
    ///
    /// assert_eq!(Month::from_number(5), Some(Month::May));
    /// assert_eq!(Month::from_number(13), None);
    /// ```
    pub fn from_number(number: i32) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| MONTHS.get(index))
            .copied()
    }

    /// Parses a month from its number (`"5"`, `"05"`), its short or full English name
    /// (`"may"`, `"May"`), or its JabRef form (`"#may#"`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let value = value
            .strip_prefix('#')
            .and_then(|v| v.strip_suffix('#'))
            .unwrap_or(value);

        if let Ok(number) = value.parse::<i32>() {
            return Self::from_number(number);
        }

        let lower = value.to_lowercase();
        MONTHS
            .iter()
            .find(|month| month.short_name() == lower || month.full_name().to_lowercase() == lower)
            .copied()
    }

    /// 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Three-letter BibTeX month name, e.g. `"may"`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Month::January => "jan",
            Month::February => "feb",
            Month::March => "mar",
            Month::April => "apr",
            Month::May => "may",
            Month::June => "jun",
            Month::July => "jul",
            Month::August => "aug",
            Month::September => "sep",
            Month::October => "oct",
            Month::November => "nov",
            Month::December => "dec",
        }
    }

    /// English month name, e.g. `"May"`.
    pub fn full_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// The month as a BibTeX string constant wrapped in `#`, e.g. `"#may#"`.
    pub fn jabref_format(&self) -> String {
        format!("#{}#", self.short_name())
    }
}

/// A single bibliographic entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Type of the entry
    #[serde(rename = "type")]
    entry_type: EntryType,
    /// Field values keyed by field name
    fields: BTreeMap<String, String>,
}

impl BibEntry {
    /// Creates an entry of the given type without fields.
    #[must_use]
    pub fn new(entry_type: EntryType) -> Self {
        Self {
            entry_type,
            fields: BTreeMap::new(),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        self.entry_type = entry_type;
    }

    /// Returns the value of a field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Sets a field, returning the previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Sets all given fields, overwriting existing values with the same name.
    pub fn set_fields<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn clear_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// All fields, ordered by name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// The month stored in the `month` field, in any form [`Month::parse`] accepts.
    pub fn month(&self) -> Option<Month> {
        self.field(field::MONTH).and_then(Month::parse)
    }

    /// Stores the month in JabRef format (`#may#`).
    pub fn set_month(&mut self, month: Month) {
        self.fields
            .insert(field::MONTH.to_string(), month.jabref_format());
    }
}
