//! Document text and position mapping.
//!
//! A [`Document`] is built once per lint run. It splits the text into
//! lines, derives the lexical views of every line, and converts byte
//! offsets found by regex scans into UTF-16 [`Position`]s.

use crate::diagnostic::{Position, Range};
use crate::lexical;

/// Identifier pattern shared by the declaration and usage scanners.
pub const IDENT: &str = "[a-zA-Z_][a-zA-Z0-9_]*";

/// One line of a document in all of its views.
#[derive(Debug, Clone, Copy)]
pub struct Line<'d> {
    /// Zero-based line number.
    pub number: u32,
    /// The line as written, without its terminator.
    pub raw: &'d str,
    /// Comments blanked.
    pub code: &'d str,
    /// Comments and literal interiors blanked.
    pub bare: &'d str,
}

/// A document prepared for checking.
#[derive(Debug)]
pub struct Document<'a> {
    raw: Vec<&'a str>,
    code: Vec<String>,
    bare: Vec<String>,
    bare_text: String,
    line_starts: Vec<usize>,
}

impl<'a> Document<'a> {
    /// Split `text` into lines and classify them.
    ///
    /// Lines end at `\n`; a trailing `\r` is dropped.
    pub fn new(text: &'a str) -> Self {
        let raw: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let code = lexical::classify_lines(raw.iter().copied());
        let bare: Vec<String> = code.iter().map(|c| lexical::mask_literals(c)).collect();

        let mut line_starts = Vec::with_capacity(bare.len());
        let mut bare_text = String::with_capacity(text.len());
        for (i, line) in bare.iter().enumerate() {
            if i > 0 {
                bare_text.push('\n');
            }
            line_starts.push(bare_text.len());
            bare_text.push_str(line);
        }

        Self {
            raw,
            code,
            bare,
            bare_text,
            line_starts,
        }
    }

    /// Number of lines (at least one).
    pub fn line_count(&self) -> usize {
        self.raw.len()
    }

    /// Access one line by index.
    pub fn line(&self, index: usize) -> Option<Line<'_>> {
        Some(Line {
            number: to_u32(index),
            raw: self.raw.get(index).copied()?,
            code: self.code.get(index).map(String::as_str)?,
            bare: self.bare.get(index).map(String::as_str)?,
        })
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        (0..self.raw.len()).filter_map(|i| self.line(i))
    }

    /// The literal-free view of the whole document, lines joined by `\n`.
    ///
    /// Byte offsets into this string map back to positions via
    /// [`Document::span_at`].
    pub fn bare_text(&self) -> &str {
        &self.bare_text
    }

    /// UTF-16 length of a raw line.
    pub fn line_len(&self, line: u32) -> u32 {
        self.raw
            .get(line as usize)
            .map_or(0, |raw| utf16_col(raw, raw.len()))
    }

    /// Range on one line between two byte offsets of that line.
    pub fn span(&self, line: u32, start: usize, end: usize) -> Range {
        let raw = self.raw.get(line as usize).copied().unwrap_or_default();
        Range::on_line(line, utf16_col(raw, start), utf16_col(raw, end))
    }

    /// Range covering a whole raw line.
    pub fn full_line(&self, line: u32) -> Range {
        Range::on_line(line, 0, self.line_len(line))
    }

    /// Map a byte offset in [`Document::bare_text`] to a line and byte column.
    pub fn locate(&self, offset: usize) -> (u32, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = offset - self.line_starts.get(line).copied().unwrap_or(0);
        (to_u32(line), column)
    }

    /// Range for a `[start, end)` byte span of [`Document::bare_text`].
    ///
    /// Spans are expected to stay on one line.
    pub fn span_at(&self, start: usize, end: usize) -> Range {
        let (line, column) = self.locate(start);
        self.span(line, column, column + (end - start))
    }

    /// Position of a byte offset in [`Document::bare_text`].
    pub fn position_at(&self, offset: usize) -> Position {
        self.span_at(offset, offset).start
    }
}

/// UTF-16 column of a byte offset within a line.
///
/// Offsets that fall inside a multi-byte character count that character
/// as preceding the offset only if it starts before it.
pub fn utf16_col(line: &str, byte: usize) -> u32 {
    let units: usize = line
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .map(|(_, c)| c.len_utf16())
        .sum();
    to_u32(units)
}

/// Returns `true` if `s` is a well-formed identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_drops_carriage_returns() {
        let doc = Document::new("int a;\r\nint b;\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(0).unwrap().raw, "int a;");
        assert_eq!(doc.line(2).unwrap().raw, "");
    }

    #[test]
    fn empty_text_has_one_line() {
        let doc = Document::new("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_len(0), 0);
    }

    #[test]
    fn utf16_columns_count_surrogate_pairs() {
        assert_eq!(utf16_col("a😀b", 0), 0);
        assert_eq!(utf16_col("a😀b", 1), 1);
        assert_eq!(utf16_col("a😀b", 5), 3);
        assert_eq!(utf16_col("é=1", 2), 1);
    }

    #[test]
    fn locate_maps_offsets_to_lines() {
        let doc = Document::new("ab\ncde\nf");
        assert_eq!(doc.locate(0), (0, 0));
        assert_eq!(doc.locate(3), (1, 0));
        assert_eq!(doc.locate(5), (1, 2));
        assert_eq!(doc.locate(7), (2, 0));
    }

    #[test]
    fn span_at_uses_raw_line_columns() {
        let doc = Document::new("// é\nint ζ_x;");
        let offset = doc.bare_text().find("ζ_x").unwrap();
        let range = doc.span_at(offset, offset + "ζ_x".len());
        assert_eq!(range, Range::on_line(1, 4, 7));
    }

    #[test]
    fn bare_view_hides_comments_and_literals() {
        let doc = Document::new("s = \"x\"; // y");
        let line = doc.line(0).unwrap();
        assert_eq!(line.bare.trim_end(), "s = \" \";");
        assert_eq!(line.code.trim_end(), "s = \"x\";");
    }

    #[test]
    fn identifier_shape() {
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("OnInit"));
        assert!(!is_identifier("2nd"));
        assert!(!is_identifier("my-func"));
        assert!(!is_identifier(""));
    }
}
