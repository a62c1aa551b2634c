//! CLI commands implementation

use crate::{parse_duration, Duration, ParseError};
use clap::{Parser, Subcommand};

/// ISO 8601 duration tool
#[derive(Parser, Debug)]
#[command(name = "isodur")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a duration and print its normalized fields
    Parse {
        /// The duration text, e.g. `P1DT12H`
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate one or more durations
    Check {
        /// Duration texts to validate
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

/// Run the CLI with the given arguments
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Parse { input, json } => cmd_parse(&input, json),
        Commands::Check { inputs } => cmd_check(&inputs),
    }
}

fn cmd_parse(input: &str, json: bool) -> Result<(), CliError> {
    let duration = parse_duration(input).map_err(|e| CliError::Parse {
        input: input.to_string(),
        source: e,
    })?;

    if json {
        let rendered = serde_json::to_string_pretty(&duration).map_err(CliError::Json)?;
        println!("{rendered}");
    } else {
        print_fields(&duration);
    }

    Ok(())
}

fn cmd_check(inputs: &[String]) -> Result<(), CliError> {
    let mut failed = 0usize;

    for input in inputs {
        match parse_duration(input) {
            Ok(_) => println!("ok     {input}"),
            Err(e) => {
                failed += 1;
                println!("error  {input}: {e}");
            }
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed {
            failed,
            total: inputs.len(),
        });
    }

    println!("\nAll {} duration(s) are valid.", inputs.len());
    Ok(())
}

fn print_fields(duration: &Duration) {
    println!("sign:          {}", if duration.is_negative { "-" } else { "+" });
    println!("years:         {}", duration.years);
    println!("months:        {}", duration.months);
    println!("weeks:         {}", duration.weeks);
    println!("days:          {}", duration.days);
    println!("hours:         {}", duration.hours);
    println!("minutes:       {}", duration.minutes);
    println!("seconds:       {}", duration.seconds);
    println!("milliseconds:  {}", duration.milliseconds);
    println!("microseconds:  {}", duration.microseconds);
    println!("nanoseconds:   {}", duration.nanoseconds);
}

/// CLI errors
#[derive(Debug)]
pub enum CliError {
    /// A duration failed to parse
    Parse {
        /// The offending input text
        input: String,
        /// Underlying parse error
        source: ParseError,
    },
    /// JSON output failed
    Json(serde_json::Error),
    /// One or more checked inputs were invalid
    CheckFailed {
        /// Number of invalid inputs
        failed: usize,
        /// Total number of inputs
        total: usize,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse { input, source } => {
                write!(f, "invalid duration `{input}`: {source}")
            }
            CliError::Json(e) => write!(f, "JSON output failed: {e}"),
            CliError::CheckFailed { failed, total } => {
                write!(f, "{failed} of {total} duration(s) failed to parse")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse { source, .. } => Some(source),
            CliError::Json(e) => Some(e),
            CliError::CheckFailed { .. } => None,
        }
    }
}
