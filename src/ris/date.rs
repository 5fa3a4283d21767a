//! Selection of the publication date among the date tags of a record.
//!
//! A record may carry up to four date tags. They are ranked by [`DATE_TAG_PRIORITY`]
//! and the best-ranked one whose year parses wins, regardless of the order in which
//! the tags appear in the record.

use crate::Month;
use crate::ris::tags::RisTag;
use tracing::trace;

/// Date tags from highest to lowest priority.
pub(crate) static DATE_TAG_PRIORITY: [&str; 4] = ["Y1", "PY", "DA", "Y2"];

/// The date selected for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedDate {
    /// The first four characters of the date value
    pub(crate) year: String,
    pub(crate) month: Option<Month>,
}

#[derive(Debug, Clone)]
struct DateCandidate {
    tag: RisTag,
    value: String,
    priority: usize,
}

/// Keeps the best date candidate seen so far.
#[derive(Debug, Clone, Default)]
pub(crate) struct DateResolver {
    best: Option<DateCandidate>,
}

impl DateResolver {
    /// Priority of the best accepted candidate, or one past the lowest priority if none.
    fn best_priority(&self) -> usize {
        self.best
            .as_ref()
            .map_or(DATE_TAG_PRIORITY.len(), |best| best.priority)
    }

    /// Offer a date tag and its value.
    ///
    /// The candidate replaces the current one only if its tag ranks strictly higher and
    /// the first four characters of its value are a year.
    pub(crate) fn offer(&mut self, tag: &RisTag, value: &str) {
        let Some(priority) = date_priority(tag) else {
            return;
        };
        if priority >= self.best_priority() {
            return;
        }
        if !is_year(value) {
            trace!(tag = tag.as_tag(), value, "ignoring date with unparseable year");
            return;
        }
        self.best = Some(DateCandidate {
            tag: tag.clone(),
            value: value.to_string(),
            priority,
        });
    }

    /// The tag of the accepted candidate, if any.
    #[cfg(test)]
    fn best_tag(&self) -> Option<&RisTag> {
        self.best.as_ref().map(|best| &best.tag)
    }

    /// Decompose the accepted candidate into year and month.
    ///
    /// The month is the second `/`-separated segment of the value; a segment that is not a
    /// month number is ignored.
    pub(crate) fn resolve(self) -> Option<ResolvedDate> {
        let best = self.best?;
        trace!(tag = best.tag.as_tag(), value = %best.value, "resolved record date");
        let year = best.value.chars().take(4).collect();
        let month = best
            .value
            .split('/')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .and_then(|segment| match segment.parse::<i32>() {
                Ok(number) => Month::from_number(number),
                Err(_) => {
                    trace!(value = %best.value, "ignoring unparseable month");
                    None
                }
            });
        Some(ResolvedDate { year, month })
    }
}

/// Rank of a date tag, lower is better. `None` for tags that are not date tags.
pub(crate) fn date_priority(tag: &RisTag) -> Option<usize> {
    DATE_TAG_PRIORITY
        .iter()
        .position(|date_tag| *date_tag == tag.as_tag())
}

/// Whether the value starts with a four-digit year of the common era, `0001` to `9999`.
fn is_year(value: &str) -> bool {
    let year: String = value.chars().take(4).collect();
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) && year != "0000"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn resolve(dates: &[(&str, &str)]) -> Option<ResolvedDate> {
        let mut resolver = DateResolver::default();
        for (tag, value) in dates {
            resolver.offer(&RisTag::from_tag(tag), value);
        }
        resolver.resolve()
    }

    fn date(year: &str, month: Option<Month>) -> Option<ResolvedDate> {
        Some(ResolvedDate {
            year: year.to_string(),
            month,
        })
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&[("PY", "2020")], date("2020", None))]
    #[case(&[("PY", "2020"), ("Y1", "2019/05")], date("2019", Some(Month::May)))]
    #[case(&[("Y1", "2019/05"), ("PY", "2020")], date("2019", Some(Month::May)))]
    #[case(&[("Y1", "abcd"), ("PY", "2021")], date("2021", None))]
    #[case(&[("PY", "2021"), ("Y1", "abcd")], date("2021", None))]
    #[case(&[("Y2", "2001"), ("DA", "2002")], date("2002", None))]
    #[case(&[("DA", "2002"), ("Y2", "2001")], date("2002", None))]
    #[case(&[("PY", "2020"), ("PY", "2021")], date("2020", None))]
    #[case(&[("Y1", "1998///")], date("1998", None))]
    #[case(&[("PY", "2023/12/25/Christmas edition")], date("2023", Some(Month::December)))]
    #[case(&[("PY", "2023/Spring")], date("2023", None))]
    #[case(&[("PY", "2023/13")], date("2023", None))]
    #[case(&[("PY", "20x3")], None)]
    #[case(&[("Y1", "0000/05"), ("PY", "2020/03")], date("2020", Some(Month::March)))]
    #[case(&[("VL", "2020")], None)]
    fn test_resolve(#[case] dates: &[(&str, &str)], #[case] expected: Option<ResolvedDate>) {
        assert_eq!(resolve(dates), expected);
    }

    #[test]
    fn test_best_tag_follows_priority() {
        let mut resolver = DateResolver::default();
        resolver.offer(&RisTag::DateAccess, "2001");
        assert_eq!(resolver.best_tag(), Some(&RisTag::DateAccess));
        resolver.offer(&RisTag::PublicationYear, "2002");
        assert_eq!(resolver.best_tag(), Some(&RisTag::PublicationYear));
        resolver.offer(&RisTag::Date, "2003");
        assert_eq!(resolver.best_tag(), Some(&RisTag::PublicationYear));
    }

    #[rstest]
    #[case(RisTag::DatePrimary, Some(0))]
    #[case(RisTag::PublicationYear, Some(1))]
    #[case(RisTag::Date, Some(2))]
    #[case(RisTag::DateAccess, Some(3))]
    #[case(RisTag::Title, None)]
    fn test_date_priority(#[case] tag: RisTag, #[case] expected: Option<usize>) {
        assert_eq!(date_priority(&tag), expected);
    }

    #[rstest]
    #[case("2019", true)]
    #[case("2019/05", true)]
    #[case("abcd", false)]
    #[case("201", false)]
    #[case("0000", false)]
    #[case("0001", true)]
    #[case("２０１９", false)]
    fn test_is_year(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_year(value), expected);
    }
}
