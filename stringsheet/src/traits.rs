//! The line-transform interface implemented by both conversion directions.

use crate::{
    error::Error,
    types::{Direction, LocalizationEntry},
};

/// Converts single lines from a source format into a target format.
///
/// Implementors only provide parsing of the source format and serialization
/// into the target format; [`LineTransform::transform`] glues them together.
///
/// # Example
///
/// ```rust
/// use stringsheet::{Decoder, LineTransform};
///
/// let decoder = Decoder::default();
/// let entry = decoder.parse(r#"id,"a, b","c""#)?.unwrap();
/// assert_eq!(entry.text, "a, b");
/// assert_eq!(decoder.serialize(&entry), r#""id" = "a, b"; //c"#);
/// # Ok::<(), stringsheet::Error>(())
/// ```
pub trait LineTransform: Send + Sync {
    /// The direction this transform converts in.
    fn direction(&self) -> Direction;

    /// Parses one source line. Blank lines parse to `None`.
    fn parse(&self, line: &str) -> Result<Option<LocalizationEntry>, Error>;

    /// Serializes one entry as a target line.
    fn serialize(&self, entry: &LocalizationEntry) -> String;

    /// Converts one source line into one target line.
    ///
    /// Blank lines become empty lines.
    fn transform(&self, line: &str) -> Result<String, Error> {
        Ok(self
            .parse(line)?
            .map(|entry| self.serialize(&entry))
            .unwrap_or_default())
    }

    /// A comment-only target line, used in place of a line that failed to parse.
    fn placeholder(&self, comment: &str) -> String {
        self.serialize(&LocalizationEntry::comment_only(comment))
    }
}

impl<T: LineTransform + ?Sized> LineTransform for Box<T> {
    fn direction(&self) -> Direction {
        (**self).direction()
    }

    fn parse(&self, line: &str) -> Result<Option<LocalizationEntry>, Error> {
        (**self).parse(line)
    }

    fn serialize(&self, entry: &LocalizationEntry) -> String {
        (**self).serialize(entry)
    }

    fn transform(&self, line: &str) -> Result<String, Error> {
        (**self).transform(line)
    }

    fn placeholder(&self, comment: &str) -> String {
        (**self).placeholder(comment)
    }
}
