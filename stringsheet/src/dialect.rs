//! The character set shared by both line formats.

/// Immutable set of marker characters used by the encoder and the decoder.
///
/// [`Dialect::default`] is the fixed set the tool ships with:
/// quote `"`, delimiter `,`, escape `\`, comment marker `//`,
/// assignment ` = ` and terminator `; `.
///
/// # Example
///
/// ```rust
/// use stringsheet::{Dialect, Encoder, LineTransform};
///
/// let semicolons = Dialect::default().with_delimiter(';');
/// let line = Encoder::new(semicolons).transform(r#""a" = "b"; //c"#)?;
/// assert_eq!(line, r#"a;"b";"c""#);
/// # Ok::<(), stringsheet::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Quote mark wrapping strings values and quote-delimited CSV cells.
    pub quote: char,
    /// CSV cell delimiter.
    pub delimiter: char,
    /// Escape character that makes a quote inside a strings value literal.
    pub escape: char,
    /// Marker introducing a comment in strings lines.
    pub comment_marker: String,
    /// Separator between identifier and text in strings lines.
    pub assignment: String,
    /// Marker written after the text, before the comment marker.
    pub terminator: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            quote: '"',
            delimiter: ',',
            escape: '\\',
            comment_marker: "//".to_string(),
            assignment: " = ".to_string(),
            terminator: "; ".to_string(),
        }
    }
}

impl Dialect {
    /// Creates the default dialect.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    pub fn with_assignment(mut self, assignment: impl Into<String>) -> Self {
        self.assignment = assignment.into();
        self
    }

    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// A doubled quote mark, the CSV escape for one literal quote.
    pub(crate) fn doubled_quote(&self) -> String {
        let mut doubled = String::with_capacity(self.quote.len_utf8() * 2);
        doubled.push(self.quote);
        doubled.push(self.quote);
        doubled
    }
}
