//! Author and editor name normalization.
//!
//! The RIS importer collects every author (and editor) of a record into one
//! `" and "`-separated string. An [`AuthorNormalizer`] turns that string into the
//! canonical `"Last, First and Last, First"` form stored in the entry.

use crate::utils::{parse_author_name, split_names};
use itertools::Itertools;

/// Converts a raw `and`-separated name list into its canonical form.
///
/// The importer calls it after every tag of a record with the list built so far: the
/// previously normalized list, plus `" and "` and the new name when the tag added one.
/// Implementations that are not idempotent see their own output again.
///
/// Implemented for [`LastNameFirst`] and for any `Fn(&str) -> String + Sync`, so a closure
/// can be handed to [`RisImporter::with_author_normalizer`](crate::RisImporter::with_author_normalizer).
pub trait AuthorNormalizer: Sync {
    fn normalize(&self, names: &str) -> String;
}

impl<F> AuthorNormalizer for F
where
    F: Fn(&str) -> String + Sync,
{
    fn normalize(&self, names: &str) -> String {
        self(names)
    }
}

/// Rewrites every name as `"Last, First"`.
///
/// Names already written last-name-first are only re-spaced, so normalizing twice gives the
/// same result as normalizing once.
///
/// # Examples
///
/// ```
/// use risbib::{AuthorNormalizer, LastNameFirst};
///
/// let names = LastNameFirst.normalize("John Smith and Doe,Jane");
/// assert_eq!(names, "Smith, John and Doe, Jane");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LastNameFirst;

impl AuthorNormalizer for LastNameFirst {
    fn normalize(&self, names: &str) -> String {
        split_names(names)
            .map(|name| match parse_author_name(name) {
                (family, given) if given.is_empty() => family,
                (family, given) => format!("{family}, {given}"),
            })
            .join(" and ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("Smith, John", "Smith, John")]
    #[case("John Smith", "Smith, John")]
    #[case("Smith, John and Jane Doe", "Smith, John and Doe, Jane")]
    #[case("Baranwal, Arun K and Singhi, Pratibha D", "Baranwal, Arun K and Singhi, Pratibha D")]
    #[case("Ludwig van Beethoven", "van Beethoven, Ludwig")]
    #[case("{World Health Organization} and Roe", "{World Health Organization} and Roe")]
    #[case("", "")]
    fn test_last_name_first(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(LastNameFirst.normalize(input), expected);
    }

    #[test]
    fn test_last_name_first_is_idempotent() {
        let once = LastNameFirst.normalize("John Smith and Ludwig van Beethoven");
        let twice = LastNameFirst.normalize(&once);
        assert_eq!(once, twice);
        assert_eq!(
            LastNameFirst.normalize(&format!("{once} and Jane Doe")),
            LastNameFirst.normalize("John Smith and Ludwig van Beethoven and Jane Doe")
        );
    }

    #[test]
    fn test_closure_normalizer() {
        let upper = |names: &str| names.to_uppercase();
        assert_eq!(upper.normalize("smith, john"), "SMITH, JOHN");
    }
}
