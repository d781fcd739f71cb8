//! Support for `.strings` lines.
//!
//! A line is either `"<identifier>" = "<text>"; //<comment>`, a comment-only
//! line `//<comment>`, or blank. Values are passed through literally: a quote
//! escaped as `\"` stays in the value together with its backslash.

use crate::{
    dialect::Dialect,
    error::Error,
    quoting::{column_of, find_from, find_unescaped_quote},
    types::LocalizationEntry,
};

/// Parses one `.strings` line. Blank lines yield `None`.
///
/// # Example
/// ```rust
/// use stringsheet::{Dialect, LocalizationEntry, formats::strings};
///
/// let entry = strings::parse_line(r#""greeting" = "Hello"; //shown on launch"#, &Dialect::default())?;
/// assert_eq!(entry, Some(LocalizationEntry::new("greeting", "Hello", "shown on launch")));
/// # Ok::<(), stringsheet::Error>(())
/// ```
pub fn parse_line(line: &str, dialect: &Dialect) -> Result<Option<LocalizationEntry>, Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if is_comment_only(line, dialect) {
        return Ok(Some(LocalizationEntry::comment_only(comment_after(
            line, 0, dialect,
        ))));
    }

    let (identifier, identifier_end) = quoted_value(line, 0, dialect, "identifier")?;
    let (text, text_end) = quoted_value(line, identifier_end, dialect, "text")?;
    let comment = comment_after(line, text_end, dialect);

    Ok(Some(LocalizationEntry::new(identifier, text, comment)))
}

/// Serializes one entry as a `.strings` line.
///
/// Comment-only entries become `//<comment>`; everything else becomes
/// `"<identifier>" = "<text>"; //<comment>`.
pub fn write_line(entry: &LocalizationEntry, dialect: &Dialect) -> String {
    match &entry.identifier {
        None => format!("{}{}", dialect.comment_marker, entry.comment),
        Some(identifier) => {
            let q = dialect.quote;
            format!(
                "{q}{identifier}{q}{}{q}{}{q}{}{}{}",
                dialect.assignment,
                entry.text,
                dialect.terminator,
                dialect.comment_marker,
                entry.comment,
            )
        }
    }
}

/// A line is comment-only when its comment marker precedes the first quote
/// mark, or the line has a comment marker and no quote mark at all.
pub fn is_comment_only(line: &str, dialect: &Dialect) -> bool {
    match line.find(dialect.comment_marker.as_str()) {
        Some(marker) => line
            .find(dialect.quote)
            .is_none_or(|quote| marker < quote),
        None => false,
    }
}

/// Everything after the first comment marker found at or after `from`.
fn comment_after(line: &str, from: usize, dialect: &Dialect) -> String {
    find_from(line, &dialect.comment_marker, from)
        .map(|idx| line[idx + dialect.comment_marker.len()..].to_string())
        .unwrap_or_default()
}

/// Finds the next quoted value at or after `start`, returning it together with
/// the byte index just past its closing quote.
fn quoted_value(
    line: &str,
    start: usize,
    dialect: &Dialect,
    what: &str,
) -> Result<(String, usize), Error> {
    let quote_len = dialect.quote.len_utf8();

    let open = find_unescaped_quote(line, start, dialect).ok_or_else(|| {
        Error::malformed(
            column_of(line, line.len()),
            format!("missing opening quote for {what}"),
        )
    })?;
    let close = find_unescaped_quote(line, open + quote_len, dialect).ok_or_else(|| {
        Error::malformed(
            column_of(line, open),
            format!("missing closing quote for {what}"),
        )
    })?;

    Ok((line[open + quote_len..close].to_string(), close + quote_len))
}
