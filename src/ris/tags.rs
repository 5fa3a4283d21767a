//! RIS format tags and their definitions.
//!
//! This module defines the RIS tags the importer maps onto entry fields.
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

/// RIS format tags.
///
/// Tags the importer has no mapping for are kept as [`RisTag::Unknown`].
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum RisTag {
    /// TY - Type of reference
    Type,
    /// TI - Primary title
    Title,
    /// T1 - Primary title (alternative)
    TitleAlternative,
    /// BT - Book title
    BookTitle,
    /// T2 - Secondary title (journal or book title)
    SecondaryTitle,
    /// T3 - Tertiary title (series)
    TertiaryTitle,
    /// ST - Short title
    ShortTitle,
    /// OP - Original publication
    OriginalPublication,
    /// RI - Reviewed item
    ReviewedItem,
    /// AU - Author
    Author,
    /// A1 - Primary author
    AuthorPrimary,
    /// A2 - Secondary author
    AuthorSecondary,
    /// A3 - Tertiary author
    AuthorTertiary,
    /// A4 - Subsidiary author
    AuthorSubsidiary,
    /// ED - Editor
    Editor,
    /// TA - Translated author
    TranslatedAuthor,
    /// JF - Journal/Periodical name: full format
    JournalFull,
    /// JO - Journal/Periodical name: full format (alternative)
    JournalFullAlternative,
    /// J1 - Journal/Periodical name: user abbreviation 1
    JournalUserAbbreviation,
    /// JA - Journal/Periodical name: standard abbreviation
    JournalAbbreviation,
    /// J2 - Alternate title (journal abbreviation alternative)
    JournalAbbreviationAlternative,
    /// Y1 - Primary date
    DatePrimary,
    /// PY - Publication year
    PublicationYear,
    /// DA - Date
    Date,
    /// Y2 - Access date
    DateAccess,
    /// VL - Volume number
    Volume,
    /// VO - Volume (call number alternative)
    VolumeAlternative,
    /// NV - Number of volumes
    NumberOfVolumes,
    /// IS - Issue number
    Issue,
    /// AN - Accession number
    AccessionNumber,
    /// C7 - Article number
    ArticleNumber,
    /// M1 - Miscellaneous 1 (number)
    Miscellaneous,
    /// SP - Start page
    StartPage,
    /// EP - End page
    EndPage,
    /// SE - Section
    Section,
    /// ET - Edition
    Edition,
    /// PB - Publisher
    Publisher,
    /// AD - Address
    Address,
    /// CY - Place published
    City,
    /// PP - Place of publication
    PlaceOfPublication,
    /// SN - ISSN/ISBN
    SerialNumber,
    /// LA - Language
    Language,
    /// AB - Abstract
    Abstract,
    /// N2 - Abstract (alternative)
    AbstractAlternative,
    /// KW - Keywords
    Keywords,
    /// N1 - Notes
    Notes,
    /// RN - Research notes
    ResearchNotes,
    /// U1 - User definable 1
    UserDefined1,
    /// U2 - User definable 2
    UserDefined2,
    /// UR - Web/URL
    Url,
    /// L2 - Link to full text
    LinkFullText,
    /// LK - Website link
    Link,
    /// DO - DOI
    Doi,
    /// M3 - Type of work
    TypeOfWork,
    /// C2 - PubMed identifier
    PubMedId,
    /// C3 - Proceedings title / event title
    ProceedingsTitle,
    /// CA - Caption
    Caption,
    /// DB - Name of database
    Database,
    /// AV - Availability / archive location
    ArchiveLocation,
    /// CN - Call number
    CallNumber,
    /// RP - Reprint status
    ReprintStatus,
    /// ID - Reference ID
    ReferenceId,
    /// ER - End of reference
    EndOfReference,
    /// Unknown tag
    Unknown(String),
}

impl RisTag {
    /// Convert a string tag to a RisTag enum.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TY" => RisTag::Type,
            "TI" => RisTag::Title,
            "T1" => RisTag::TitleAlternative,
            "BT" => RisTag::BookTitle,
            "T2" => RisTag::SecondaryTitle,
            "T3" => RisTag::TertiaryTitle,
            "ST" => RisTag::ShortTitle,
            "OP" => RisTag::OriginalPublication,
            "RI" => RisTag::ReviewedItem,
            "AU" => RisTag::Author,
            "A1" => RisTag::AuthorPrimary,
            "A2" => RisTag::AuthorSecondary,
            "A3" => RisTag::AuthorTertiary,
            "A4" => RisTag::AuthorSubsidiary,
            "ED" => RisTag::Editor,
            "TA" => RisTag::TranslatedAuthor,
            "JF" => RisTag::JournalFull,
            "JO" => RisTag::JournalFullAlternative,
            "J1" => RisTag::JournalUserAbbreviation,
            "JA" => RisTag::JournalAbbreviation,
            "J2" => RisTag::JournalAbbreviationAlternative,
            "Y1" => RisTag::DatePrimary,
            "PY" => RisTag::PublicationYear,
            "DA" => RisTag::Date,
            "Y2" => RisTag::DateAccess,
            "VL" => RisTag::Volume,
            "VO" => RisTag::VolumeAlternative,
            "NV" => RisTag::NumberOfVolumes,
            "IS" => RisTag::Issue,
            "AN" => RisTag::AccessionNumber,
            "C7" => RisTag::ArticleNumber,
            "M1" => RisTag::Miscellaneous,
            "SP" => RisTag::StartPage,
            "EP" => RisTag::EndPage,
            "SE" => RisTag::Section,
            "ET" => RisTag::Edition,
            "PB" => RisTag::Publisher,
            "AD" => RisTag::Address,
            "CY" => RisTag::City,
            "PP" => RisTag::PlaceOfPublication,
            "SN" => RisTag::SerialNumber,
            "LA" => RisTag::Language,
            "AB" => RisTag::Abstract,
            "N2" => RisTag::AbstractAlternative,
            "KW" => RisTag::Keywords,
            "N1" => RisTag::Notes,
            "RN" => RisTag::ResearchNotes,
            "U1" => RisTag::UserDefined1,
            "U2" => RisTag::UserDefined2,
            "UR" => RisTag::Url,
            "L2" => RisTag::LinkFullText,
            "LK" => RisTag::Link,
            "DO" => RisTag::Doi,
            "M3" => RisTag::TypeOfWork,
            "C2" => RisTag::PubMedId,
            "C3" => RisTag::ProceedingsTitle,
            "CA" => RisTag::Caption,
            "DB" => RisTag::Database,
            "AV" => RisTag::ArchiveLocation,
            "CN" => RisTag::CallNumber,
            "RP" => RisTag::ReprintStatus,
            "ID" => RisTag::ReferenceId,
            "ER" => RisTag::EndOfReference,
            _ => RisTag::Unknown(tag.to_string()),
        }
    }

    /// Convert a RisTag enum back to its string representation.
    pub fn as_tag(&self) -> &str {
        match self {
            RisTag::Type => "TY",
            RisTag::Title => "TI",
            RisTag::TitleAlternative => "T1",
            RisTag::BookTitle => "BT",
            RisTag::SecondaryTitle => "T2",
            RisTag::TertiaryTitle => "T3",
            RisTag::ShortTitle => "ST",
            RisTag::OriginalPublication => "OP",
            RisTag::ReviewedItem => "RI",
            RisTag::Author => "AU",
            RisTag::AuthorPrimary => "A1",
            RisTag::AuthorSecondary => "A2",
            RisTag::AuthorTertiary => "A3",
            RisTag::AuthorSubsidiary => "A4",
            RisTag::Editor => "ED",
            RisTag::TranslatedAuthor => "TA",
            RisTag::JournalFull => "JF",
            RisTag::JournalFullAlternative => "JO",
            RisTag::JournalUserAbbreviation => "J1",
            RisTag::JournalAbbreviation => "JA",
            RisTag::JournalAbbreviationAlternative => "J2",
            RisTag::DatePrimary => "Y1",
            RisTag::PublicationYear => "PY",
            RisTag::Date => "DA",
            RisTag::DateAccess => "Y2",
            RisTag::Volume => "VL",
            RisTag::VolumeAlternative => "VO",
            RisTag::NumberOfVolumes => "NV",
            RisTag::Issue => "IS",
            RisTag::AccessionNumber => "AN",
            RisTag::ArticleNumber => "C7",
            RisTag::Miscellaneous => "M1",
            RisTag::StartPage => "SP",
            RisTag::EndPage => "EP",
            RisTag::Section => "SE",
            RisTag::Edition => "ET",
            RisTag::Publisher => "PB",
            RisTag::Address => "AD",
            RisTag::City => "CY",
            RisTag::PlaceOfPublication => "PP",
            RisTag::SerialNumber => "SN",
            RisTag::Language => "LA",
            RisTag::Abstract => "AB",
            RisTag::AbstractAlternative => "N2",
            RisTag::Keywords => "KW",
            RisTag::Notes => "N1",
            RisTag::ResearchNotes => "RN",
            RisTag::UserDefined1 => "U1",
            RisTag::UserDefined2 => "U2",
            RisTag::Url => "UR",
            RisTag::LinkFullText => "L2",
            RisTag::Link => "LK",
            RisTag::Doi => "DO",
            RisTag::TypeOfWork => "M3",
            RisTag::PubMedId => "C2",
            RisTag::ProceedingsTitle => "C3",
            RisTag::Caption => "CA",
            RisTag::Database => "DB",
            RisTag::ArchiveLocation => "AV",
            RisTag::CallNumber => "CN",
            RisTag::ReprintStatus => "RP",
            RisTag::ReferenceId => "ID",
            RisTag::EndOfReference => "ER",
            RisTag::Unknown(tag) => tag,
        }
    }

    /// Check if this tag represents an author field.
    pub fn is_author_tag(&self) -> bool {
        matches!(
            self,
            RisTag::Author
                | RisTag::AuthorPrimary
                | RisTag::AuthorSecondary
                | RisTag::AuthorTertiary
                | RisTag::AuthorSubsidiary
        )
    }

    /// Check if this tag carries one of the candidate dates.
    pub fn is_date_tag(&self) -> bool {
        matches!(
            self,
            RisTag::DatePrimary | RisTag::PublicationYear | RisTag::Date | RisTag::DateAccess
        )
    }
}

/// Maps the value of a `TY` tag to an entry type name.
pub(crate) fn entry_type_name(ris_type: &str) -> &'static str {
    match ris_type {
        "BOOK" => "book",
        "JOUR" | "MGZN" => "article",
        "THES" => "phdthesis",
        "UNPB" => "unpublished",
        "RPRT" => "techreport",
        "CONF" => "inproceedings",
        "CHAP" => "incollection",
        "PAT" => "patent",
        _ => "other",
    }
}
