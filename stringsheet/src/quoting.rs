//! Cell quoting codec and the scanning helpers shared by both formats.
//!
//! CSV cells escape a quote mark by doubling it and are always wrapped in
//! quote marks on output. Strings values are passed through literally; a quote
//! preceded by an odd run of escape characters belongs to the value.

use crate::dialect::Dialect;

/// Quotes a value as a CSV cell.
///
/// # Example
/// ```rust
/// use stringsheet::{Dialect, quoting::csv_quote};
/// assert_eq!(csv_quote(r#"He said "hi""#, &Dialect::default()), r#""He said ""hi""""#);
/// assert_eq!(csv_quote("", &Dialect::default()), r#""""#);
/// ```
pub fn csv_quote(value: &str, dialect: &Dialect) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(dialect.quote);
    for c in value.chars() {
        if c == dialect.quote {
            quoted.push(dialect.quote);
        }
        quoted.push(c);
    }
    quoted.push(dialect.quote);
    quoted
}

/// Reverses [`csv_quote`]: strips one leading and one trailing quote mark and
/// collapses every doubled quote mark into one.
///
/// # Example
/// ```rust
/// use stringsheet::{Dialect, quoting::csv_unquote};
/// assert_eq!(csv_unquote(r#""He said ""hi""""#, &Dialect::default()), r#"He said "hi""#);
/// ```
pub fn csv_unquote(cell: &str, dialect: &Dialect) -> String {
    let inner = cell.strip_prefix(dialect.quote).unwrap_or(cell);
    let inner = inner.strip_suffix(dialect.quote).unwrap_or(inner);
    inner.replace(&dialect.doubled_quote(), &dialect.quote.to_string())
}

/// Byte index of the first `needle` at or after `start`.
pub fn find_from(haystack: &str, needle: &str, start: usize) -> Option<usize> {
    haystack
        .get(start..)
        .and_then(|rest| rest.find(needle))
        .map(|idx| idx + start)
}

/// Byte index of the first quote mark at or after `start` that is not escaped.
///
/// A quote is escaped when it is preceded by an odd number of consecutive
/// escape characters, so `\"` is literal while `\\"` closes the value.
pub fn find_unescaped_quote(line: &str, start: usize, dialect: &Dialect) -> Option<usize> {
    let rest = line.get(start..)?;
    let mut escapes = 0usize;
    for (idx, c) in rest.char_indices() {
        if c == dialect.quote && escapes % 2 == 0 {
            return Some(start + idx);
        }
        if c == dialect.escape {
            escapes += 1;
        } else {
            escapes = 0;
        }
    }
    None
}

/// 0-based character column of a byte index, for error reporting.
pub(crate) fn column_of(line: &str, byte_idx: usize) -> usize {
    line.get(..byte_idx)
        .map_or_else(|| line.chars().count(), |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_quote_doubles_quotes() {
        let dialect = Dialect::default();
        assert_eq!(csv_quote(r#"He said "hi""#, &dialect), r#""He said ""hi""""#);
        assert_eq!(csv_quote("plain", &dialect), r#""plain""#);
        assert_eq!(csv_quote("a, b", &dialect), r#""a, b""#);
        assert_eq!(csv_quote(r#"""#, &dialect), r#""""""#);
    }

    #[test]
    fn test_csv_unquote_inverts_quote() {
        let dialect = Dialect::default();
        for value in ["", "plain", r#"He said "hi""#, r#""""#, "a, b", "Café, ünïcode"] {
            assert_eq!(csv_unquote(&csv_quote(value, &dialect), &dialect), value);
        }
    }

    #[test]
    fn test_csv_unquote_strips_only_one_quote_each_side() {
        let dialect = Dialect::default();
        assert_eq!(csv_unquote(r#""""x""""#, &dialect), r#""x""#);
        assert_eq!(csv_unquote("bare", &dialect), "bare");
    }

    #[test]
    fn test_csv_quote_with_alternate_quote() {
        let dialect = Dialect::default().with_quote('\'');
        assert_eq!(csv_quote("it's", &dialect), "'it''s'");
        assert_eq!(csv_unquote("'it''s'", &dialect), "it's");
    }

    #[test]
    fn test_find_from() {
        assert_eq!(find_from("a//b//c", "//", 0), Some(1));
        assert_eq!(find_from("a//b//c", "//", 2), Some(4));
        assert_eq!(find_from("a//b", "//", 10), None);
        assert_eq!(find_from("abc", "//", 0), None);
    }

    #[test]
    fn test_find_unescaped_quote() {
        let dialect = Dialect::default();
        assert_eq!(find_unescaped_quote(r#"ab"c"#, 0, &dialect), Some(2));
        assert_eq!(find_unescaped_quote(r#"a\"b"c"#, 0, &dialect), Some(4));
        assert_eq!(find_unescaped_quote(r#"a\\"b"#, 0, &dialect), Some(3));
        assert_eq!(find_unescaped_quote(r#""x""#, 1, &dialect), Some(2));
        assert_eq!(find_unescaped_quote("none", 0, &dialect), None);
    }
}
