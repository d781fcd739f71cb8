use std::fs::File;
use std::io::Write;

use serde::Serialize;
use stringsheet::{Dialect, Direction, LineTransform, LocalizationEntry, io::read_document};

use crate::validation::{resolve_direction, validate_file_path, validate_output_path};

/// One parsed input line as shown by the debug command.
#[derive(Debug, Serialize)]
pub struct DebugLine {
    pub line: usize,
    /// `None` for blank and malformed lines.
    pub entry: Option<LocalizationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse every line of `input` in its source format.
pub fn parse_lines(input: &str, direction: Option<Direction>) -> Result<Vec<DebugLine>, String> {
    validate_file_path(input)?;
    let direction = resolve_direction(input, None, direction)?;
    let transform = direction.transformer(Dialect::default());

    let document = read_document(input).map_err(|e| format!("Error reading {}: {}", input, e))?;
    Ok(document
        .lines()
        .enumerate()
        .map(|(idx, line)| match transform.parse(line) {
            Ok(entry) => DebugLine {
                line: idx + 1,
                entry,
                error: None,
            },
            Err(e) => DebugLine {
                line: idx + 1,
                entry: None,
                error: Some(e.to_string()),
            },
        })
        .collect())
}

/// Run the debug command: parse a file and output its entries as JSON.
pub fn run_debug_command(
    input: &str,
    direction: Option<Direction>,
    output: Option<&str>,
) -> Result<(), String> {
    let lines = parse_lines(input, direction)?;
    let json = serde_json::to_string_pretty(&lines)
        .map_err(|e| format!("Error serializing to JSON: {}", e))?;

    match output {
        Some(output_path) => {
            validate_output_path(output_path)?;
            File::create(output_path)
                .and_then(|mut f| f.write_all(json.as_bytes()))
                .map_err(|e| format!("Error writing to {}: {}", output_path, e))?;
            println!("✅ Debug output written to: {}", output_path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
