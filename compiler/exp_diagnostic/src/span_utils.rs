//! Line and column lookup for spans.

/// Pre-computed line start offsets for O(log L) line/column lookup.
///
/// ```
/// use exp_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "var a = 1\nprintln(a)";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 10), (2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert.max(1),
        }
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let end = offset.min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, col + 1)
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let Some(&start) = self.offsets.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .offsets
            .get(line)
            .map_or(source.len(), |next| next.saturating_sub(1));
        source
            .get(start..end.max(start))
            .unwrap_or("")
            .trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line() {
        let source = "abc\ndef";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    }

    #[test]
    fn newline_belongs_to_its_line() {
        let source = "abc\ndef";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 3), (1, 4));
        assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    }

    #[test]
    fn columns_count_chars() {
        let source = "// é\nx";
        let table = LineOffsetTable::build(source);
        // 'é' is two bytes; offset 5 is the newline
        assert_eq!(table.offset_to_line_col(source, 5), (1, 5));
        assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
    }

    #[test]
    fn line_text_strips_newline() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), "first");
        assert_eq!(table.line_text(source, 2), "second");
        assert_eq!(table.line_text(source, 3), "third");
        assert_eq!(table.line_text(source, 4), "");
        assert_eq!(table.line_text(source, 0), "");
    }
}
