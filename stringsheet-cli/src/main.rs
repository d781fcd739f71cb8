use clap::{ArgAction, Parser, Subcommand};
use stringsheet::{Direction, ErrorPolicy};
use stringsheet_cli::{
    ConvertCommandOptions, check::print_check_report, check_file, debug::run_debug_command,
    run_convert_command,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (default warn, -v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a `.strings` file to CSV or a CSV file to `.strings`.
    Convert {
        /// The input file to process
        #[arg(short, long)]
        input: String,
        /// The output file to write the results to (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Conversion direction; inferred from the file extensions when omitted
        #[arg(short, long)]
        direction: Option<Direction>,
        /// What to do with malformed lines: skip, placeholder or halt
        #[arg(long, default_value_t = ErrorPolicy::Placeholder)]
        on_error: ErrorPolicy,
        /// Convert lines in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Report malformed lines without writing anything.
    Check {
        /// The input file to check
        #[arg(short, long)]
        input: String,
        /// Format of the input; inferred from its extension when omitted
        #[arg(short, long)]
        direction: Option<Direction>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed entries of a file as JSON.
    Debug {
        /// The input file to parse
        #[arg(short, long)]
        input: String,
        /// Format of the input; inferred from its extension when omitted
        #[arg(short, long)]
        direction: Option<Direction>,
        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.commands {
        Commands::Convert {
            input,
            output,
            direction,
            on_error,
            parallel,
        } => {
            let options = ConvertCommandOptions {
                direction,
                on_error,
                parallel,
            };
            if let Err(e) = run_convert_command(&input, output.as_deref(), &options) {
                eprintln!("❌ Conversion failed");
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Check {
            input,
            direction,
            json,
        } => match check_file(&input, direction) {
            Ok(report) => {
                if let Err(e) = print_check_report(&report, json) {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
                if !report.is_clean() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("❌ Check failed");
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Debug {
            input,
            direction,
            output,
        } => {
            if let Err(e) = run_debug_command(&input, direction, output.as_deref()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
