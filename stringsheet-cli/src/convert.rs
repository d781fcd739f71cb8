use std::io::Write;

use stringsheet::{
    Conversion, ConvertOptions, Converter, Dialect, Direction, ErrorPolicy, io::read_document,
};

use crate::validation::{resolve_direction, validate_file_path, validate_output_path};

/// Options of the `convert` subcommand.
#[derive(Debug, Clone)]
pub struct ConvertCommandOptions {
    pub direction: Option<Direction>,
    pub on_error: ErrorPolicy,
    pub parallel: bool,
}

/// Run the convert command. Writes to `output`, or to stdout when absent.
pub fn run_convert_command(
    input: &str,
    output: Option<&str>,
    options: &ConvertCommandOptions,
) -> Result<Conversion, String> {
    validate_file_path(input)?;
    if let Some(output) = output {
        validate_output_path(output)?;
    }

    let direction = resolve_direction(input, output, options.direction)?;
    tracing::info!(%direction, input, on_error = %options.on_error, "converting");
    let converter = Converter::new(direction.transformer(Dialect::default())).with_options(
        ConvertOptions::new()
            .with_on_error(options.on_error)
            .with_parallel(options.parallel),
    );

    let conversion = match output {
        Some(output) => converter
            .convert_file(input, output)
            .map_err(|e| format!("Error converting {}: {}", input, e))?,
        None => {
            let document =
                read_document(input).map_err(|e| format!("Error reading {}: {}", input, e))?;
            let conversion = converter
                .convert_str(&document)
                .map_err(|e| format!("Error converting {}: {}", input, e))?;
            let mut stdout = std::io::stdout().lock();
            for line in &conversion.lines {
                writeln!(stdout, "{}", line)
                    .map_err(|e| format!("Error writing to stdout: {}", e))?;
            }
            conversion
        }
    };

    report_failures(&conversion, options.on_error);

    match output {
        Some(output) => println!(
            "✅ Converted {} of {} line(s) ({}): {}",
            conversion.converted_count(),
            conversion.input_lines,
            direction,
            output
        ),
        None => eprintln!(
            "✅ Converted {} of {} line(s) ({})",
            conversion.converted_count(),
            conversion.input_lines,
            direction
        ),
    }

    Ok(conversion)
}

fn report_failures(conversion: &Conversion, on_error: ErrorPolicy) {
    if conversion.is_clean() {
        return;
    }

    let action = match on_error {
        ErrorPolicy::Skip => "skipped",
        _ => "replaced with placeholders",
    };
    eprintln!(
        "⚠️  {} malformed line(s) {}:",
        conversion.failures.len(),
        action
    );
    for failure in &conversion.failures {
        eprintln!("  {}", failure);
    }
}
