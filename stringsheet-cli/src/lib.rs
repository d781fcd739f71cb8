//! CLI library for testing purposes

pub mod check;
pub mod convert;
pub mod debug;
pub mod validation;

pub use check::{CheckReport, check_file};
pub use convert::{ConvertCommandOptions, run_convert_command};
pub use validation::resolve_direction;
