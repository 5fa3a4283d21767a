use crate::regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// ASCII whitespace only; U+00A0 and other Unicode spaces are kept.
static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\f\r]+").unwrap());

static NAME_SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+and\s+").unwrap());

/// Replaces the en dash with `-` and the em dash and horizontal bar with `--`.
///
/// Borrows the input when it contains none of them.
pub fn normalize_dashes(text: &str) -> Cow<'_, str> {
    if !text.contains(['\u{2013}', '\u{2014}', '\u{2015}']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2013}' => out.push('-'),
            '\u{2014}' | '\u{2015}' => out.push_str("--"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Collapses every run of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(text, " ").into_owned()
}

/// Extracts a DOI from a value carrying a `doi:` prefix.
///
/// The value is lower-cased and every `doi:` is removed. Values without the prefix yield `None`.
///
/// # Arguments
///
/// * `value` - The raw field value, e.g. `DOI:10.1000/xyz`
pub fn strip_doi_prefix(value: &str) -> Option<String> {
    let doi = value.to_lowercase();
    if doi.starts_with("doi:") {
        Some(doi.replace("doi:", "").trim().to_string())
    } else {
        None
    }
}

/// Splits an `and`-separated name list, skipping blank names.
pub fn split_names(names: &str) -> impl Iterator<Item = &str> {
    NAME_SEPARATOR_REGEX
        .split(names)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Helper function to parse author names in various formats
///
/// Handles "Lastname, Firstname", "Firstname Lastname" and names with a lower-case
/// particle such as "Ludwig van Beethoven" (family name "van Beethoven").
pub fn parse_author_name(name: &str) -> (String, String) {
    let name = name.trim();

    // Corporate names are kept whole: "{World Health Organization}"
    if name.starts_with('{') && name.ends_with('}') {
        return (name.to_string(), String::new());
    }

    if let Some((family, given)) = name.split_once(',') {
        let given = given
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        return (family.trim().to_string(), given);
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.len() {
        0 => (String::new(), String::new()),
        1 => (parts[0].to_string(), String::new()),
        n => {
            let family_start = parts[..n - 1]
                .iter()
                .skip(1)
                .position(|part| part.starts_with(|c: char| c.is_lowercase()))
                .map_or(n - 1, |pos| pos + 1);
            let family = parts[family_start..].join(" ");
            let given = parts[..family_start].join(" ");
            (family, given)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("pages 10\u{2013}20", "pages 10-20")]
    #[case("a\u{2014}b", "a--b")]
    #[case("a\u{2015}b", "a--b")]
    #[case("no dashes here", "no dashes here")]
    fn test_normalize_dashes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_dashes(input), expected);
    }

    #[test]
    fn test_normalize_dashes_borrows_plain_text() {
        assert!(matches!(normalize_dashes("plain - text"), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("a  b\t\tc\n d", "a b c d")]
    #[case("single", "single")]
    #[case("vertical\x0B\x0Ctab", "vertical tab")]
    #[case("A\u{a0}\u{a0}B", "A\u{a0}\u{a0}B")]
    #[case("A \u{2003} B", "A \u{2003} B")]
    fn test_collapse_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_whitespace(input), expected);
    }

    #[rstest]
    #[case("DOI:10.1000/xyz", Some("10.1000/xyz"))]
    #[case("doi: 10.1000/xyz ", Some("10.1000/xyz"))]
    #[case("Doi:10.1000/ABC", Some("10.1000/abc"))]
    #[case("10.1000/xyz", None)]
    #[case("https://doi.org/10.1000/xyz", None)]
    #[case("", None)]
    fn test_strip_doi_prefix(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(strip_doi_prefix(input).as_deref(), expected);
    }

    #[test]
    fn test_split_names() {
        assert_eq!(
            split_names("Smith, John and Doe, Jane  and   Roe").collect_vec(),
            vec!["Smith, John", "Doe, Jane", "Roe"]
        );
        assert_eq!(split_names("Alexander, Ann").collect_vec(), vec!["Alexander, Ann"]);
        assert!(split_names("").next().is_none());
    }

    #[rstest]
    #[case("Smith, John", "Smith", "John")]
    #[case("Duan, J.J.", "Duan", "J.J.")]
    #[case("Smith-Jones, John-Paul", "Smith-Jones", "John-Paul")]
    #[case("King, Jr., Martin Luther", "King", "Jr., Martin Luther")]
    #[case("John Smith", "Smith", "John")]
    #[case("Ludwig van Beethoven", "van Beethoven", "Ludwig")]
    #[case("Smith", "Smith", "")]
    #[case("{World Health Organization}", "{World Health Organization}", "")]
    #[case("", "", "")]
    fn test_parse_author_name(
        #[case] name: &str,
        #[case] family: &str,
        #[case] given: &str,
    ) {
        assert_eq!(parse_author_name(name), (family.to_string(), given.to_string()));
    }
}
