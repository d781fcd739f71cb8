#![forbid(unsafe_code)]
//! Line-level converter between `.strings` localization files and CSV sheets.
//!
//! A `.strings` line looks like `"greeting" = "Hello"; //shown on launch` and its
//! CSV counterpart like `greeting,"Hello","shown on launch"`. Every line is
//! converted on its own, so a malformed line is reported without disturbing its
//! neighbours.
//!
//! # Quick Start
//!
//! ```rust
//! use stringsheet::{decode, encode};
//!
//! let csv = encode(r#""greeting" = "Hello"; //shown on launch"#)?;
//! assert_eq!(csv, r#"greeting,"Hello","shown on launch""#);
//!
//! let strings = decode(&csv)?;
//! assert_eq!(strings, r#""greeting" = "Hello"; //shown on launch"#);
//! # Ok::<(), stringsheet::Error>(())
//! ```
//!
//! Whole documents go through a [`Converter`], which collects malformed lines
//! into a report instead of aborting:
//!
//! ```rust
//! use stringsheet::{Converter, Encoder};
//!
//! let conversion = Converter::new(Encoder::default())
//!     .convert_str("//Greetings\n\"hi\" = \"Hi\";\n\"broken = \"x\";")?;
//! assert_eq!(conversion.failures.len(), 1);
//! assert_eq!(conversion.failures[0].line, 3);
//! # Ok::<(), stringsheet::Error>(())
//! ```
//!
//! # Formats
//!
//! - **Strings**: `"<identifier>" = "<text>"; //<comment>`, `//<comment>` or a blank line
//! - **CSV**: `<identifier>,"<text>","<comment>"`, with an empty identifier for comment-only lines

pub mod converter;
pub mod dialect;
pub mod error;
pub mod formats;
pub mod io;
pub mod quoting;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{Conversion, ConvertOptions, Converter, ErrorPolicy, LineFailure},
    dialect::Dialect,
    error::Error,
    formats::{Decoder, Encoder, decode, encode},
    traits::LineTransform,
    types::{Direction, LocalizationEntry},
};
