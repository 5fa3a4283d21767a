use crate::ris::tags::RisTag;
use std::iter::{Peekable, once};
use tracing::trace;

/// Separator between the two-letter tag and the value of a RIS line.
const TAG_SEPARATOR: &str = "  - ";

/// A tag and its value, with continuation lines already joined.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TagValue {
    pub(crate) tag: RisTag,
    pub(crate) value: String,
}

/// An [Iterator] which yields the tagged values of one RIS record.
///
/// A value may occupy several physical lines:
///
/// ```plain
/// AB  - The long abstract of an article which was
/// wrapped by the exporting tool.
/// ```
///
/// Every line that does not start a new tag (fewer than 6 characters, or no `"  - "` at
/// character offsets 2..6) is joined onto the value before it, so the iterator yields:
///
/// ```plain
/// (AB, "The long abstract of an article which was wrapped by the exporting tool.")
/// ```
///
/// Logical lines shorter than 6 characters, such as blank lines before the first tag,
/// are skipped.
pub(crate) struct TagLines<I: Iterator> {
    lines: Peekable<I>,
}

impl<'a, I: Iterator<Item = &'a str>> TagLines<I> {
    /// Create a new [TagLines].
    pub(crate) fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
        }
    }

    /// Consume continuation lines following `first_line` and return the joined logical line.
    fn consume_complete_value(&mut self, first_line: &'a str) -> String {
        let mut current = first_line.to_string();
        while let Some(line) = self.lines.next_if(|line| !starts_new_tag(line)) {
            join_line(&mut current, line);
        }
        current
    }
}

/// Whether `line` has the `"XX  - "` shape of a tagged line.
fn starts_new_tag(line: &str) -> bool {
    line.chars().skip(2).take(4).eq(TAG_SEPARATOR.chars())
}

/// Append a continuation line, inserting a space only where neither side already has
/// whitespace at the seam.
fn join_line(current: &mut String, continuation: &str) {
    if !current.is_empty()
        && !current.ends_with(char::is_whitespace)
        && !continuation.is_empty()
        && !continuation.starts_with(char::is_whitespace)
    {
        current.push(' ');
    }
    current.push_str(continuation);
}

/// Split a logical line into its tag and trimmed value.
///
/// Returns `None` for lines shorter than 6 characters.
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let mut boundaries = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(once(line.len()));
    let tag_end = boundaries.nth(2)?;
    let value_start = boundaries.nth(3)?;
    Some((&line[..tag_end], line[value_start..].trim()))
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for TagLines<I> {
    type Item = TagValue;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let first_line = self.lines.next()?;
            let line = self.consume_complete_value(first_line);
            match split_tag(&line) {
                Some((tag, value)) => {
                    return Some(TagValue {
                        tag: RisTag::from_tag(tag),
                        value: value.to_string(),
                    });
                }
                None => trace!(line = %line, "skipping short RIS line"),
            }
        }
    }
}
