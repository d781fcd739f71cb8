use serde::Serialize;
use stringsheet::{
    ConvertOptions, Converter, Dialect, Direction, ErrorPolicy, LineFailure, io::read_document,
};

use crate::validation::{resolve_direction, validate_file_path};

/// Machine-readable result of `stringsheet check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub direction: Direction,
    pub lines: usize,
    pub malformed: usize,
    pub failures: Vec<FailureReport>,
}

#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub line: usize,
    pub column: Option<usize>,
    pub content: String,
    pub message: String,
}

impl From<&LineFailure> for FailureReport {
    fn from(failure: &LineFailure) -> Self {
        FailureReport {
            line: failure.line,
            column: failure.column(),
            content: failure.content.clone(),
            message: failure.error.to_string(),
        }
    }
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.malformed == 0
    }
}

/// Parse every line of `input` and collect the malformed ones.
pub fn check_file(input: &str, direction: Option<Direction>) -> Result<CheckReport, String> {
    validate_file_path(input)?;
    let direction = resolve_direction(input, None, direction)?;

    let document = read_document(input).map_err(|e| format!("Error reading {}: {}", input, e))?;
    let conversion = Converter::new(direction.transformer(Dialect::default()))
        .with_options(ConvertOptions::new().with_on_error(ErrorPolicy::Skip))
        .convert_str(&document)
        .map_err(|e| format!("Error checking {}: {}", input, e))?;

    Ok(CheckReport {
        input: input.to_string(),
        direction,
        lines: conversion.input_lines,
        malformed: conversion.failures.len(),
        failures: conversion.failures.iter().map(FailureReport::from).collect(),
    })
}

/// Print a check report for humans or as JSON.
pub fn print_check_report(report: &CheckReport, json: bool) -> Result<(), String> {
    if json {
        let rendered = serde_json::to_string_pretty(report)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    if report.is_clean() {
        println!(
            "✅ {}: {} line(s), no malformed lines ({})",
            report.input, report.lines, report.direction
        );
        return Ok(());
    }

    println!(
        "❌ {}: {} malformed line(s) out of {} ({})",
        report.input, report.malformed, report.lines, report.direction
    );
    for failure in &report.failures {
        match failure.column {
            Some(column) => println!("  line {}, column {}: {}", failure.line, column, failure.message),
            None => println!("  line {}: {}", failure.line, failure.message),
        }
        println!("    {}", failure.content.trim());
    }
    Ok(())
}
