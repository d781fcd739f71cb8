//! Support for three-column CSV lines: `identifier,"text","comment"`.
//!
//! Cells are located by a small state machine so that delimiters and doubled
//! quote marks inside quote-delimited cells never split a cell. An empty
//! identifier cell marks a comment-only line.

use crate::{
    dialect::Dialect,
    error::Error,
    quoting::{column_of, csv_quote, csv_unquote},
    types::LocalizationEntry,
};

/// Number of cells in every record.
pub const CELL_COUNT: usize = 3;

/// Scanner state while walking a CSV line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any quotes; a delimiter ends the cell.
    Unquoted,
    /// Inside quotes; delimiters are literal.
    InQuotedCell,
    /// Just saw a quote inside a quoted cell. Another quote means an escaped
    /// quote, a delimiter ends the cell, anything else resumes scanning.
    AfterPossibleCloseQuote,
    /// The last quote turned out to be internal. The next quote is the next
    /// closing candidate; a delimiter or the end of the line ends the cell.
    ResumedQuotedCell,
}

/// Byte range of one cell inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub start: usize,
    pub end: usize,
    /// Whether a quote opened a quote-delimited section in this cell.
    pub quoted: bool,
}

impl CellSpan {
    /// The raw text of the cell, including any quote marks.
    pub fn raw<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }

    /// The logical value of the cell: quote-delimited cells are unquoted,
    /// other cells are taken verbatim.
    pub fn value(&self, line: &str, dialect: &Dialect) -> String {
        let raw = self.raw(line);
        if self.quoted {
            csv_unquote(raw, dialect)
        } else {
            raw.to_string()
        }
    }
}

/// Splits one CSV line into cell spans.
///
/// Fails with [`Error::MalformedQuoting`] when a quoted cell is still open at
/// the end of the line; the reported column is that of the opening quote.
///
/// # Example
/// ```rust
/// use stringsheet::{Dialect, formats::csv::split_cells};
///
/// let line = r#"id,"a, b","c""#;
/// let cells = split_cells(line, &Dialect::default())?;
/// assert_eq!(cells.len(), 3);
/// assert_eq!(cells[1].raw(line), r#""a, b""#);
/// # Ok::<(), stringsheet::Error>(())
/// ```
pub fn split_cells(line: &str, dialect: &Dialect) -> Result<Vec<CellSpan>, Error> {
    let mut cells = Vec::with_capacity(CELL_COUNT);
    let mut state = ScanState::Unquoted;
    let mut start = 0;
    let mut quoted = false;
    let mut opened_at = 0;

    for (idx, c) in line.char_indices() {
        state = match state {
            ScanState::Unquoted
            | ScanState::AfterPossibleCloseQuote
            | ScanState::ResumedQuotedCell
                if c == dialect.delimiter =>
            {
                cells.push(CellSpan {
                    start,
                    end: idx,
                    quoted,
                });
                start = idx + c.len_utf8();
                quoted = false;
                ScanState::Unquoted
            }
            ScanState::Unquoted if c == dialect.quote => {
                opened_at = idx;
                quoted = true;
                ScanState::InQuotedCell
            }
            ScanState::Unquoted => ScanState::Unquoted,
            ScanState::InQuotedCell if c == dialect.quote => ScanState::AfterPossibleCloseQuote,
            ScanState::InQuotedCell => ScanState::InQuotedCell,
            ScanState::AfterPossibleCloseQuote if c == dialect.quote => ScanState::InQuotedCell,
            ScanState::AfterPossibleCloseQuote => ScanState::ResumedQuotedCell,
            ScanState::ResumedQuotedCell if c == dialect.quote => {
                ScanState::AfterPossibleCloseQuote
            }
            ScanState::ResumedQuotedCell => ScanState::ResumedQuotedCell,
        };
    }

    if state == ScanState::InQuotedCell {
        return Err(Error::malformed(
            column_of(line, opened_at),
            "unterminated quoted cell",
        ));
    }

    cells.push(CellSpan {
        start,
        end: line.len(),
        quoted,
    });
    Ok(cells)
}

/// Parses one CSV line. Blank lines yield `None`.
///
/// # Example
/// ```rust
/// use stringsheet::{Dialect, LocalizationEntry, formats::csv};
///
/// let dialect = Dialect::default();
/// assert_eq!(
///     csv::parse_line(r#"greeting,"Hello","shown on launch""#, &dialect)?,
///     Some(LocalizationEntry::new("greeting", "Hello", "shown on launch"))
/// );
/// assert_eq!(
///     csv::parse_line(r#",,"TODO translate""#, &dialect)?,
///     Some(LocalizationEntry::comment_only("TODO translate"))
/// );
/// # Ok::<(), stringsheet::Error>(())
/// ```
pub fn parse_line(line: &str, dialect: &Dialect) -> Result<Option<LocalizationEntry>, Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let cells = split_cells(line, dialect)?;
    if cells.len() != CELL_COUNT {
        let column = cells
            .get(CELL_COUNT)
            .map_or(line.len(), |extra| extra.start);
        return Err(Error::malformed(
            column_of(line, column),
            format!("expected {CELL_COUNT} cells, found {}", cells.len()),
        ));
    }

    let identifier = cells[0].value(line, dialect);
    let text = cells[1].value(line, dialect);
    let comment = cells[2].value(line, dialect);

    if identifier.is_empty() {
        if !text.is_empty() {
            tracing::warn!(text = %text, "dropping text of a record without identifier");
        }
        return Ok(Some(LocalizationEntry::comment_only(comment)));
    }

    Ok(Some(LocalizationEntry::new(identifier, text, comment)))
}

/// Serializes one entry as a CSV line.
///
/// Text and comment are always quoted. The identifier is written bare unless
/// it contains a delimiter or quote mark, which a bare cell cannot carry.
pub fn write_line(entry: &LocalizationEntry, dialect: &Dialect) -> String {
    let d = dialect.delimiter;
    let comment = csv_quote(&entry.comment, dialect);
    match &entry.identifier {
        None => format!("{d}{d}{comment}"),
        Some(identifier) => {
            let identifier = if identifier.contains([dialect.delimiter, dialect.quote]) {
                csv_quote(identifier, dialect)
            } else {
                identifier.clone()
            };
            format!(
                "{identifier}{d}{}{d}{comment}",
                csv_quote(&entry.text, dialect)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<LocalizationEntry>, Error> {
        parse_line(line, &Dialect::default())
    }

    fn raw_cells(line: &str) -> Vec<String> {
        split_cells(line, &Dialect::default())
            .unwrap()
            .iter()
            .map(|cell| cell.raw(line).to_string())
            .collect()
    }

    #[test]
    fn test_split_plain_cells() {
        assert_eq!(raw_cells("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(raw_cells(",,"), vec!["", "", ""]);
        assert_eq!(raw_cells("solo"), vec!["solo"]);
    }

    #[test]
    fn test_split_keeps_delimiters_inside_quotes() {
        assert_eq!(
            raw_cells(r#"id,"a, b","c,d,e""#),
            vec!["id", r#""a, b""#, r#""c,d,e""#]
        );
    }

    #[test]
    fn test_split_doubled_quotes_stay_in_cell() {
        assert_eq!(
            raw_cells(r#"q,"He said ""hi, there""","""""#),
            vec!["q", r#""He said ""hi, there""""#, r#""""""#]
        );
    }

    #[test]
    fn test_split_resumes_after_internal_quote() {
        // The quote after `a` is not followed by a delimiter, so the cell continues.
        let cells = split_cells(r#""a"b"c",x"#, &Dialect::default()).unwrap();
        assert_eq!(cells.len(), 2);
        assert!(cells[0].quoted);
        assert!(!cells[1].quoted);
    }

    #[test]
    fn test_internal_quote_before_closing_quote_in_middle_cell() {
        let line = r#"id,"5" screen","c""#;
        assert_eq!(raw_cells(line), vec!["id", r#""5" screen""#, r#""c""#]);
        assert_eq!(
            parse(line).unwrap(),
            Some(LocalizationEntry::new("id", r#"5" screen"#, "c"))
        );
    }

    #[test]
    fn test_internal_quote_in_last_cell() {
        let cells = split_cells(r#""ab"c""#, &Dialect::default()).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].value(r#""ab"c""#, &Dialect::default()), r#"ab"c"#);

        let entry = parse(r#"id,"x","ab"c""#).unwrap().unwrap();
        assert_eq!(entry.comment, r#"ab"c"#);
    }

    #[test]
    fn test_split_unterminated_quote() {
        let err = split_cells(r#"id,"never closed, at all"#, &Dialect::default()).unwrap_err();
        match err {
            Error::MalformedQuoting { column, reason } => {
                assert_eq!(column, 3);
                assert_eq!(reason, "unterminated quoted cell");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_split_reports_character_column() {
        let err = split_cells(r#"ключ,"open"#, &Dialect::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedQuoting { column: 5, .. }));
    }

    #[test]
    fn test_parse_standard_triple() {
        assert_eq!(
            parse(r#"greeting,"Hello","shown on launch""#).unwrap(),
            Some(LocalizationEntry::new("greeting", "Hello", "shown on launch"))
        );
    }

    #[test]
    fn test_parse_embedded_comma() {
        let entry = parse(r#"id,"a, b","c""#).unwrap().unwrap();
        assert_eq!(entry.text, "a, b");
        assert_eq!(entry.comment, "c");
    }

    #[test]
    fn test_parse_doubled_quotes() {
        let entry = parse(r#"q,"He said ""hi""","""quoted"" note""#)
            .unwrap()
            .unwrap();
        assert_eq!(entry.text, r#"He said "hi""#);
        assert_eq!(entry.comment, r#""quoted" note"#);
    }

    #[test]
    fn test_parse_unquoted_cells() {
        let entry = parse("id,plain text,plain comment").unwrap().unwrap();
        assert_eq!(entry, LocalizationEntry::new("id", "plain text", "plain comment"));
    }

    #[test]
    fn test_parse_comment_only() {
        assert_eq!(
            parse(r#",,"TODO translate""#).unwrap(),
            Some(LocalizationEntry::comment_only("TODO translate"))
        );
    }

    #[test]
    fn test_parse_empty_identifier_drops_text() {
        assert_eq!(
            parse(r#","orphan","note""#).unwrap(),
            Some(LocalizationEntry::comment_only("note"))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("  ").unwrap(), None);
    }

    #[test]
    fn test_parse_wrong_cell_count() {
        let err = parse(r#"id,"only two""#).unwrap_err();
        match err {
            Error::MalformedQuoting { column, reason } => {
                assert_eq!(column, 13);
                assert_eq!(reason, "expected 3 cells, found 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse(r#"id,"a","b","c""#).unwrap_err();
        match err {
            Error::MalformedQuoting { column, reason } => {
                assert_eq!(column, 11);
                assert_eq!(reason, "expected 3 cells, found 4");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unterminated_text_cell() {
        let err = parse(r#"id,"oops,"c""#).unwrap_err();
        assert!(matches!(err, Error::MalformedQuoting { .. }));
    }

    #[test]
    fn test_write_standard_triple() {
        let entry = LocalizationEntry::new("greeting", "Hello", "shown on launch");
        assert_eq!(
            write_line(&entry, &Dialect::default()),
            r#"greeting,"Hello","shown on launch""#
        );
    }

    #[test]
    fn test_write_comment_only() {
        let entry = LocalizationEntry::comment_only("TODO translate");
        assert_eq!(write_line(&entry, &Dialect::default()), r#",,"TODO translate""#);
    }

    #[test]
    fn test_write_quotes_awkward_identifier() {
        let entry = LocalizationEntry::new("a,b", "x", "");
        let line = write_line(&entry, &Dialect::default());
        assert_eq!(line, r#""a,b","x","""#);
        assert_eq!(parse(&line).unwrap(), Some(entry));
    }

    #[test]
    fn test_alternate_delimiter() {
        let dialect = Dialect::default().with_delimiter(';');
        let entry = parse_line(r#"id;"a, b; c";"n""#, &dialect).unwrap().unwrap();
        assert_eq!(entry, LocalizationEntry::new("id", "a, b; c", "n"));
        assert_eq!(write_line(&entry, &dialect), r#"id;"a, b; c";"n""#);
    }
}
