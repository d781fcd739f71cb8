//! The two line formats and the transforms between them.
//!
//! [`Encoder`] turns `.strings` lines into CSV lines and [`Decoder`] turns CSV
//! lines back into `.strings` lines. Both implement [`LineTransform`], so the
//! caller picks a direction by picking a value rather than passing a mode flag.

pub mod csv;
pub mod strings;

use crate::{
    dialect::Dialect,
    error::Error,
    traits::LineTransform,
    types::{Direction, LocalizationEntry},
};

/// `.strings` → CSV line transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoder {
    pub dialect: Dialect,
}

impl Encoder {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl LineTransform for Encoder {
    fn direction(&self) -> Direction {
        Direction::StringsToCsv
    }

    fn parse(&self, line: &str) -> Result<Option<LocalizationEntry>, Error> {
        strings::parse_line(line, &self.dialect)
    }

    fn serialize(&self, entry: &LocalizationEntry) -> String {
        csv::write_line(entry, &self.dialect)
    }
}

/// CSV → `.strings` line transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoder {
    pub dialect: Dialect,
}

impl Decoder {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl LineTransform for Decoder {
    fn direction(&self) -> Direction {
        Direction::CsvToStrings
    }

    fn parse(&self, line: &str) -> Result<Option<LocalizationEntry>, Error> {
        csv::parse_line(line, &self.dialect)
    }

    fn serialize(&self, entry: &LocalizationEntry) -> String {
        strings::write_line(entry, &self.dialect)
    }
}

/// Converts one `.strings` line into one CSV line using the default dialect.
pub fn encode(line: &str) -> Result<String, Error> {
    Encoder::default().transform(line)
}

/// Converts one CSV line into one `.strings` line using the default dialect.
pub fn decode(line: &str) -> Result<String, Error> {
    Decoder::default().transform(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_standard_triple() {
        assert_eq!(
            encode(r#""greeting" = "Hello"; //shown on launch"#).unwrap(),
            r#"greeting,"Hello","shown on launch""#
        );
    }

    #[test]
    fn test_encode_comment_only() {
        assert_eq!(encode("//TODO translate").unwrap(), r#",,"TODO translate""#);
    }

    #[test]
    fn test_encode_quotes_in_comment() {
        assert_eq!(
            encode(r#""k" = "v"; //say "cheese""#).unwrap(),
            r#"k,"v","say ""cheese""""#
        );
    }

    #[test]
    fn test_decode_standard_triple() {
        assert_eq!(
            decode(r#"greeting,"Hello","shown on launch""#).unwrap(),
            r#""greeting" = "Hello"; //shown on launch"#
        );
    }

    #[test]
    fn test_decode_comment_only() {
        assert_eq!(decode(r#",,"TODO translate""#).unwrap(), "//TODO translate");
    }

    #[test]
    fn test_decode_embedded_comma() {
        assert_eq!(decode(r#"id,"a, b","c""#).unwrap(), r#""id" = "a, b"; //c"#);
    }

    #[test]
    fn test_empty_lines_pass_through() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
        assert_eq!(encode("   ").unwrap(), "");
        assert_eq!(decode("\t").unwrap(), "");
    }

    #[test]
    fn test_decode_unterminated_quote_is_recoverable() {
        let err = decode(r#"id,"unterminated,"note"#).unwrap_err();
        assert!(matches!(err, Error::MalformedQuoting { .. }));
        // The transform stays usable for the next line.
        assert_eq!(decode(r#"ok,"fine","""#).unwrap(), r#""ok" = "fine"; //"#);
    }

    #[test]
    fn test_round_trips() {
        let strings_line = r#""welcome" = "Welcome, friend"; //home screen"#;
        assert_eq!(decode(&encode(strings_line).unwrap()).unwrap(), strings_line);

        let csv_line = r#"farewell,"Bye, ""friend""","exit, dialog""#;
        let decoded = decode(csv_line).unwrap();
        assert_eq!(decoded, r#""farewell" = "Bye, "friend""; //exit, dialog"#);
    }

    #[test]
    fn test_placeholder_lines() {
        assert_eq!(Encoder::default().placeholder("MALFORMED: x"), r#",,"MALFORMED: x""#);
        assert_eq!(Decoder::default().placeholder("MALFORMED: x"), "//MALFORMED: x");
    }
}
