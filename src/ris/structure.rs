//! RIS record assembly.
//!
//! [`RawRisRecord`] accumulates the tags of one record in file order and is then
//! turned into a [`BibEntry`].
//!
//! # Design Decision
//!
//! ## Tag dispatch
//! - **Ordered**: tags are matched by a single `match` whose arms are tried top to bottom,
//!   so a tag listed in two arms is handled by the first one that applies.
//! - **Shadowed arms**: `JF` always sets the journal and never reaches the
//!   conference booktitle arm, `N1` always lands in the comment and never in `note`,
//!   and `DB` always sets `database` (a later `archive` mapping for it is never reached).
//! - **Merge rules**: titles, abstracts, keywords, authors, editors and comments are
//!   appended; every other field is overwritten by later tags.
//! - **Name lists**: the author and editor accumulators are passed through the
//!   [`AuthorNormalizer`] after every tag, so each new name is appended to an already
//!   normalized list.
//! - **Derived fields**: author, editor, comment and pages are written once the whole
//!   record has been read.

use crate::author::AuthorNormalizer;
use crate::entry::field;
use crate::ris::date::DateResolver;
use crate::ris::tags::{RisTag, entry_type_name};
use crate::ris::whole_lines::TagValue;
use crate::utils::{collapse_whitespace, strip_doi_prefix};
use crate::{BibEntry, EntryType};
use std::collections::BTreeMap;

/// Accumulated data of one RIS record.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawRisRecord {
    /// Entry type name resolved from the `TY` tag, empty until one is seen.
    entry_type: &'static str,
    /// Field values by field name.
    fields: BTreeMap<String, String>,
    /// Normalized `" and "`-separated author list.
    author: String,
    /// Normalized `" and "`-separated editor list.
    editor: String,
    /// Newline-separated comments.
    comment: String,
    start_page: String,
    /// End page, already prefixed with `--` when non-empty.
    end_page: String,
    dates: DateResolver,
}

impl RawRisRecord {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Build a record from the tagged values of one record body.
    pub(crate) fn from_tag_values<N: AuthorNormalizer + ?Sized>(
        values: impl IntoIterator<Item = TagValue>,
        normalizer: &N,
    ) -> Self {
        let mut record = Self::new();
        for TagValue { tag, value } in values {
            record.apply(&tag, value);
            record.normalize_names(normalizer);
        }
        record
    }

    /// Re-normalize the non-empty author and editor lists in place.
    fn normalize_names<N: AuthorNormalizer + ?Sized>(&mut self, normalizer: &N) {
        if !self.author.is_empty() {
            self.author = normalizer.normalize(&self.author);
        }
        if !self.editor.is_empty() {
            self.editor = normalizer.normalize(&self.editor);
        }
    }

    fn set(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
    }

    fn journal_is_empty(&self) -> bool {
        self.fields
            .get(field::JOURNAL)
            .is_none_or(|journal| journal.is_empty())
    }

    fn append_title(&mut self, value: &str) {
        let title = match self.fields.get(field::TITLE) {
            None => value.to_string(),
            Some(old) if old.ends_with([':', '.', '?']) => format!("{old} {value}"),
            Some(old) => format!("{old}: {value}"),
        };
        self.set(field::TITLE, collapse_whitespace(&title));
    }

    fn append_field(&mut self, name: &str, separator: &str, value: &str) {
        self.fields
            .entry(name.to_string())
            .and_modify(|old| {
                old.push_str(separator);
                old.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Apply one tag to the record.
    ///
    /// Unknown tags are ignored. Arms are tried in order, see the module documentation.
    pub(crate) fn apply(&mut self, tag: &RisTag, value: String) {
        match tag {
            RisTag::Type => self.entry_type = entry_type_name(&value),
            RisTag::TitleAlternative | RisTag::Title => self.append_title(&value),
            RisTag::BookTitle => self.set(field::BOOKTITLE, value),
            RisTag::SecondaryTitle
            | RisTag::JournalAbbreviationAlternative
            | RisTag::JournalAbbreviation
                if self.journal_is_empty() =>
            {
                self.set(field::JOURNAL, value)
            }
            RisTag::JournalFullAlternative
            | RisTag::JournalUserAbbreviation
            | RisTag::JournalFull => self.set(field::JOURNAL, value),
            RisTag::TertiaryTitle => self.set(field::SERIES, value),
            tag if tag.is_author_tag() => push_name(&mut self.author, &value),
            RisTag::Editor => push_name(&mut self.editor, &value),
            // JF is taken by the journal arm above, only JA gets here.
            RisTag::JournalAbbreviation => {
                if self.entry_type == "inproceedings" {
                    self.set(field::BOOKTITLE, value)
                } else {
                    self.set(field::JOURNAL, value)
                }
            }
            RisTag::Language => self.set(field::LANGUAGE, value),
            RisTag::Caption => self.set(field::CAPTION, value),
            RisTag::Database => self.set(field::DATABASE, value),
            RisTag::Issue
            | RisTag::AccessionNumber
            | RisTag::ArticleNumber
            | RisTag::Miscellaneous => self.set(field::NUMBER, value),
            RisTag::StartPage => self.start_page = value,
            RisTag::Publisher => {
                if self.entry_type == "phdthesis" {
                    self.set(field::SCHOOL, value)
                } else {
                    self.set(field::PUBLISHER, value)
                }
            }
            RisTag::Address | RisTag::City | RisTag::PlaceOfPublication => {
                self.set(field::ADDRESS, value)
            }
            RisTag::EndPage => {
                self.end_page = if value.is_empty() {
                    value
                } else {
                    format!("--{value}")
                }
            }
            RisTag::Edition => self.set(field::EDITION, value),
            RisTag::SerialNumber => self.set(field::ISSN, value),
            RisTag::Volume => self.set(field::VOLUME, value),
            RisTag::AbstractAlternative | RisTag::Abstract => {
                self.append_field(field::ABSTRACT, "\n", &value)
            }
            RisTag::Url | RisTag::LinkFullText | RisTag::Link => self.set(field::URL, value),
            tag if tag.is_date_tag() && value.chars().count() >= 4 => {
                self.dates.offer(tag, &value)
            }
            RisTag::Keywords => self.append_field(field::KEYWORDS, ", ", &value),
            RisTag::UserDefined1 | RisTag::UserDefined2 | RisTag::Notes => {
                if !self.comment.is_empty() {
                    self.comment.push('\n');
                }
                self.comment.push_str(&value);
            }
            RisTag::TypeOfWork | RisTag::Doi => {
                if let Some(doi) = strip_doi_prefix(&value) {
                    self.set(field::DOI, doi)
                }
            }
            RisTag::ProceedingsTitle => self.set(field::EVENTTITLE, value),
            // N1 is taken by the comment arm above, only RN gets here.
            RisTag::ResearchNotes => self.set(field::NOTE, value),
            RisTag::ShortTitle => self.set(field::SHORTTITLE, value),
            RisTag::PubMedId => {
                self.set(field::EPRINT, value);
                self.set(field::EPRINTTYPE, "pubmed".to_string());
            }
            RisTag::TranslatedAuthor => self.set(field::TRANSLATOR, value),
            RisTag::ArchiveLocation => self.set(field::ARCHIVE_LOCATION, value),
            RisTag::CallNumber | RisTag::VolumeAlternative => {
                self.set(field::CALL_NUMBER, value)
            }
            RisTag::NumberOfVolumes => self.set(field::NUMBER_OF_VOLUMES, value),
            RisTag::OriginalPublication => self.set(field::ORIGINAL_TITLE, value),
            RisTag::ReviewedItem => self.set(field::REVIEWED_TITLE, value),
            RisTag::ReprintStatus => self.set(field::STATUS, value),
            RisTag::Section => self.set(field::SECTION, value),
            RisTag::ReferenceId => self.set(field::REFID, value),
            _ => {}
        }
    }

    /// Finish the record: write the derived fields, resolve the date, drop blank fields.
    pub(crate) fn into_entry(self) -> BibEntry {
        let mut fields = self.fields;

        if !self.author.is_empty() {
            fields.insert(field::AUTHOR.to_string(), self.author);
        }
        if !self.editor.is_empty() {
            fields.insert(field::EDITOR.to_string(), self.editor);
        }
        if !self.comment.is_empty() {
            fields.insert(field::COMMENT.to_string(), self.comment);
        }
        fields.insert(
            field::PAGES.to_string(),
            format!("{}{}", self.start_page, self.end_page),
        );

        let date = self.dates.resolve();
        if let Some(date) = &date {
            fields.insert(field::YEAR.to_string(), date.year.clone());
        }

        fields.retain(|_, value| !value.trim().is_empty());

        let mut entry = BibEntry::new(EntryType::from_name(self.entry_type));
        entry.set_fields(fields);
        if let Some(month) = date.and_then(|date| date.month) {
            entry.set_month(month);
        }
        entry
    }
}

/// Append a name to an `" and "`-separated list.
fn push_name(names: &mut String, name: &str) {
    if !names.is_empty() {
        names.push_str(" and ");
    }
    names.push_str(name);
}
