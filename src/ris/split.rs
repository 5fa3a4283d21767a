/// Prefix of the line that closes a RIS record, e.g. `ER  - `.
const END_OF_RECORD: &str = "ER  -";

/// An [Iterator] which splits RIS text into record bodies on `ER  -` lines.
///
/// [Iterator::next] returns the lines of one record (without the closing `ER  -` line),
/// along with the line number the body starts on. Bodies that are empty or contain only
/// whitespace are skipped, so trailing blank lines after the last record never produce an
/// extra record. Text after the last `ER  -` line is returned as a final body.
pub(crate) struct RecordSplit<'a> {
    line_number: usize,
    text: &'a str,
}

impl<'a> RecordSplit<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            line_number: 1,
            text,
        }
    }

    /// Take the next body off the front of `self.text`, blank or not.
    fn next_body(&mut self) -> Option<(usize, &'a str)> {
        if self.text.is_empty() {
            return None;
        }
        let start_line = self.line_number;
        let mut consumed = 0;
        for line in self.text.split_inclusive('\n') {
            self.line_number += 1;
            if line.starts_with(END_OF_RECORD) {
                let body = &self.text[..consumed];
                self.text = &self.text[consumed + line.len()..];
                return Some((start_line, body));
            }
            consumed += line.len();
        }
        let body = self.text;
        self.text = "";
        Some((start_line, body))
    }
}

impl<'a> Iterator for RecordSplit<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line_number, body) = self.next_body()?;
            if !body.trim().is_empty() {
                return Some((line_number, body));
            }
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
    #[case("", &[])]
    #[case("\n\n", &[])]
    #[case("A\nER  -\nB\nER  -\n", &[(1, "A\n"), (3, "B\n")])]
    #[case(
        "TY  - JOUR\nT1  - A\nER  - \nTY  - BOOK\nT1  - B\nER  - \n",
        &[(1, "TY  - JOUR\nT1  - A\n"), (4, "TY  - BOOK\nT1  - B\n")]
    )]
    #[case("A\nER  - \n\n\n", &[(1, "A\n")])]
    #[case("A\nER  -", &[(1, "A\n")])]
    #[case("A\nER  - trailing text\nB", &[(1, "A\n"), (3, "B")])]
    #[case("A\r\nER  - \r\nB\r\n", &[(1, "A\r\n"), (3, "B\r\n")])]
    #[case("\nA\nER  -\n\nB\nER  -\n", &[(1, "\nA\n"), (4, "\nB\n")])]
    #[case("A\nER  -\nER  -\nB\nER  -\n", &[(1, "A\n"), (4, "B\n")])]
    #[case("A\n ER  - \nB", &[(1, "A\n ER  - \nB")])]
    #[case("no end marker", &[(1, "no end marker")])]
    fn test_record_split(#[case] text: &str, #[case] expected: &[(usize, &str)]) {
        let actual = RecordSplit::new(text).collect_vec();
        assert_eq!(&actual, expected);
    }
}
