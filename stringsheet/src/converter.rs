//! Document-level conversion on top of a [`LineTransform`].
//!
//! Lines are converted independently. A malformed line is recorded as a
//! [`LineFailure`] and handled according to the [`ErrorPolicy`]; I/O errors
//! abort the whole document.

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use rayon::prelude::*;

use crate::{
    error::Error,
    io::{read_document, write_document},
    traits::LineTransform,
};

/// Prefix of the comment written in place of a malformed line.
pub const PLACEHOLDER_PREFIX: &str = "MALFORMED: ";

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Leave the line out of the output.
    Skip,
    /// Emit a comment-only line `MALFORMED: <raw line>` in the target format,
    /// keeping output lines aligned with input lines.
    #[default]
    Placeholder,
    /// Stop at the first malformed line.
    Halt,
}

impl Display for ErrorPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::Skip => write!(f, "skip"),
            ErrorPolicy::Placeholder => write!(f, "placeholder"),
            ErrorPolicy::Halt => write!(f, "halt"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(ErrorPolicy::Skip),
            "placeholder" => Ok(ErrorPolicy::Placeholder),
            "halt" => Ok(ErrorPolicy::Halt),
            _ => Err(format!(
                "Unknown error policy: '{}'. Supported policies: skip, placeholder, halt",
                s
            )),
        }
    }
}

/// Options for [`Converter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub on_error: ErrorPolicy,
    /// Convert lines on the rayon thread pool. Output order is unaffected.
    pub parallel: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_error(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// A line that could not be converted.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based line number.
    pub line: usize,
    /// The raw line as read.
    pub content: String,
    pub error: Error,
}

impl LineFailure {
    /// Column of the malformed token, when the error carries one.
    pub fn column(&self) -> Option<usize> {
        match &self.error {
            Error::MalformedQuoting { column, .. } => Some(*column),
            _ => None,
        }
    }
}

impl Display for LineFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// The result of converting a document.
#[derive(Debug, Default)]
pub struct Conversion {
    /// Output lines in input order.
    pub lines: Vec<String>,
    /// Malformed lines, in input order.
    pub failures: Vec<LineFailure>,
    /// Number of input lines seen.
    pub input_lines: usize,
}

impl Conversion {
    /// Joins the output lines with newlines.
    pub fn to_document(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of input lines converted without error.
    pub fn converted_count(&self) -> usize {
        self.input_lines - self.failures.len()
    }
}

/// Converts whole documents line by line.
///
/// # Example
///
/// ```rust
/// use stringsheet::{ConvertOptions, Converter, Decoder, ErrorPolicy};
///
/// let converter = Converter::new(Decoder::default())
///     .with_options(ConvertOptions::new().with_on_error(ErrorPolicy::Skip));
/// let conversion = converter.convert_str("a,\"A\",\"\"\nb,\"oops\n,,\"note\"")?;
/// assert_eq!(conversion.lines, vec![r#""a" = "A"; //"#, "//note"]);
/// assert_eq!(conversion.failures[0].line, 2);
/// # Ok::<(), stringsheet::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter<T: LineTransform> {
    transform: T,
    options: ConvertOptions,
}

impl<T: LineTransform> Converter<T> {
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Converts a sequence of raw lines.
    ///
    /// Fails only under [`ErrorPolicy::Halt`], with an [`Error::Line`] for the
    /// first malformed line.
    pub fn convert_lines<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Result<Conversion, Error> {
        let results: Vec<Result<String, Error>> = if self.options.parallel {
            lines
                .par_iter()
                .map(|line| self.transform.transform(line.as_ref()))
                .collect()
        } else {
            lines
                .iter()
                .map(|line| self.transform.transform(line.as_ref()))
                .collect()
        };

        let mut conversion = Conversion {
            lines: Vec::with_capacity(lines.len()),
            failures: Vec::new(),
            input_lines: lines.len(),
        };

        for (idx, (raw, result)) in lines.iter().zip(results).enumerate() {
            let line = idx + 1;
            let raw = raw.as_ref();
            match result {
                Ok(converted) => conversion.lines.push(converted),
                Err(error) => {
                    if self.options.on_error == ErrorPolicy::Halt {
                        return Err(error.at_line(line, raw));
                    }
                    tracing::warn!(line, error = %error, "malformed line");
                    if self.options.on_error == ErrorPolicy::Placeholder {
                        let comment = format!("{PLACEHOLDER_PREFIX}{}", raw.trim());
                        conversion.lines.push(self.transform.placeholder(&comment));
                    }
                    conversion.failures.push(LineFailure {
                        line,
                        content: raw.to_string(),
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            direction = %self.transform.direction(),
            lines = conversion.input_lines,
            failures = conversion.failures.len(),
            "converted document"
        );
        Ok(conversion)
    }

    /// Splits a document into lines and converts them.
    pub fn convert_str(&self, document: &str) -> Result<Conversion, Error> {
        let lines = document.lines().collect::<Vec<_>>();
        self.convert_lines(&lines)
    }

    /// Reads `input`, converts it and writes the result to `output`.
    ///
    /// Nothing is written when reading fails or the policy halts.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<Conversion, Error> {
        let document = read_document(&input)?;
        let conversion = self.convert_str(&document)?;
        write_document(&output, &conversion.lines)?;
        tracing::info!(
            input = %input.as_ref().display(),
            output = %output.as_ref().display(),
            "file saved"
        );
        Ok(conversion)
    }
}
