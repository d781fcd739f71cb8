use std::path::Path;

use stringsheet::Direction;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate the output's parent directory exists
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if let Some(parent) = path_obj.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(format!("Output directory does not exist: {}", parent.display()));
    }

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    Ok(())
}

/// Pick the conversion direction: an explicit flag wins, otherwise it is
/// inferred from the file extensions.
pub fn resolve_direction(
    input: &str,
    output: Option<&str>,
    explicit: Option<Direction>,
) -> Result<Direction, String> {
    match explicit {
        Some(direction) => Ok(direction),
        None => Direction::infer(input, output).map_err(|e| {
            format!("{}. Pass --direction strings-to-csv or --direction csv-to-strings", e)
        }),
    }
}
