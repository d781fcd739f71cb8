//! Core data types shared by both line formats.

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use serde::Serialize;

use crate::{
    dialect::Dialect,
    error::Error,
    formats::{Decoder, Encoder},
    traits::LineTransform,
};

/// One logical localization record, parsed from a single line.
///
/// The identifier is absent only for comment-only lines, such as
/// `//TODO translate` in a `.strings` file or `,,"TODO translate"` in CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizationEntry {
    /// The key of the entry; `None` for comment-only lines.
    pub identifier: Option<String>,
    /// The translated value, possibly empty.
    pub text: String,
    /// Trailing annotation without its comment marker, possibly empty.
    pub comment: String,
}

impl LocalizationEntry {
    /// Creates an entry with an identifier.
    pub fn new(
        identifier: impl Into<String>,
        text: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            identifier: Some(identifier.into()),
            text: text.into(),
            comment: comment.into(),
        }
    }

    /// Creates an entry representing a comment-only line.
    pub fn comment_only(comment: impl Into<String>) -> Self {
        Self {
            identifier: None,
            text: String::new(),
            comment: comment.into(),
        }
    }

    pub fn is_comment_only(&self) -> bool {
        self.identifier.is_none()
    }
}

/// The two conversion directions.
///
/// The direction is always chosen by the caller; line content is never used
/// to guess it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// `.strings` lines in, CSV lines out.
    StringsToCsv,
    /// CSV lines in, `.strings` lines out.
    CsvToStrings,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::StringsToCsv => write!(f, "strings-to-csv"),
            Direction::CsvToStrings => write!(f, "csv-to-strings"),
        }
    }
}

/// Accepts `strings-to-csv`, `strings2csv` and `encode` for
/// [`Direction::StringsToCsv`], and `csv-to-strings`, `csv2strings` and
/// `decode` for [`Direction::CsvToStrings`]. Case, `-` and `_` are ignored.
///
/// # Example
/// ```rust
/// use stringsheet::Direction;
/// use std::str::FromStr;
/// assert_eq!(Direction::from_str("strings_to_csv").unwrap(), Direction::StringsToCsv);
/// assert_eq!(Direction::from_str("DECODE").unwrap(), Direction::CsvToStrings);
/// assert!(Direction::from_str("sideways").is_err());
/// ```
impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "stringstocsv" | "strings2csv" | "encode" => Ok(Direction::StringsToCsv),
            "csvtostrings" | "csv2strings" | "decode" => Ok(Direction::CsvToStrings),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// File extension of documents this direction reads.
    pub fn source_extension(&self) -> &'static str {
        match self {
            Direction::StringsToCsv => "strings",
            Direction::CsvToStrings => "csv",
        }
    }

    /// File extension of documents this direction writes.
    pub fn target_extension(&self) -> &'static str {
        match self {
            Direction::StringsToCsv => "csv",
            Direction::CsvToStrings => "strings",
        }
    }

    /// Infers the direction from file extensions.
    ///
    /// The input extension decides; when an output path is given its
    /// extension must agree with the inferred target.
    ///
    /// # Example
    /// ```rust
    /// use stringsheet::Direction;
    /// assert_eq!(
    ///     Direction::infer("en.lproj/Localizable.strings", Some("sheet.csv")).unwrap(),
    ///     Direction::StringsToCsv
    /// );
    /// assert_eq!(Direction::infer("sheet.csv", None::<&str>).unwrap(), Direction::CsvToStrings);
    /// assert!(Direction::infer("notes.txt", None::<&str>).is_err());
    /// ```
    pub fn infer<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Option<Q>) -> Result<Self, Error> {
        let input = input.as_ref();
        let extension = extension_of(input);
        let direction = [Direction::StringsToCsv, Direction::CsvToStrings]
            .into_iter()
            .find(|d| extension.as_deref() == Some(d.source_extension()))
            .ok_or_else(|| {
                Error::DirectionInference(format!(
                    "unsupported input extension {:?} for `{}`, expected `.{}` or `.{}`",
                    extension,
                    input.display(),
                    Direction::StringsToCsv.source_extension(),
                    Direction::CsvToStrings.source_extension()
                ))
            })?;

        if let Some(output) = output {
            let output = output.as_ref();
            match extension_of(output) {
                Some(ext) if ext == direction.target_extension() => {}
                other => {
                    return Err(Error::DirectionInference(format!(
                        "output `{}` has extension {:?}, expected `.{}` for {}",
                        output.display(),
                        other,
                        direction.target_extension(),
                        direction
                    )));
                }
            }
        }

        Ok(direction)
    }

    /// Returns the line transform for this direction.
    pub fn transformer(&self, dialect: Dialect) -> Box<dyn LineTransform> {
        match self {
            Direction::StringsToCsv => Box::new(Encoder::new(dialect)),
            Direction::CsvToStrings => Box::new(Decoder::new(dialect)),
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}
