use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::calculator::{
    CalcError, CalcResult, calculate_percentage, format_result, parse_operand, safe_calculation,
    toggle_sign, validate_calculation_input,
};
use calc_core::config::Config;
use calc_core::report::Report;

#[derive(Parser)]
#[command(name = "calc")]
#[command(version, about = "Evaluate two-operand calculator operations", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate `<first> <operator> <second>`
    Eval {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        operator: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Check whether `<first> <operator> <second>` can be evaluated
    Validate {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        operator: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Resolve `<percent>%` against `<base>` for a pending operator
    Percent {
        #[arg(allow_hyphen_values = true)]
        percent: String,
        #[arg(allow_hyphen_values = true)]
        base: String,
        #[arg(allow_hyphen_values = true)]
        operator: String,
    },
    /// Flip the sign of an operand
    Negate {
        #[arg(allow_hyphen_values = true)]
        operand: String,
    },
    /// Format a number for display
    Format {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    init_logging(&config, cli.debug);
    debug!(?config, "loaded configuration");

    let report = run(&cli.command);

    if cli.json || config.output.json {
        let json = if config.output.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("{}", report.to_text());
    }

    Ok(if report.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_logging(config: &Config, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(command: &Command) -> Report {
    match command {
        Command::Eval {
            first,
            operator,
            second,
        } => Report::from_calc_result(
            format!("{} {} {}", first, operator, second),
            safe_calculation(first, operator, second),
        ),
        Command::Validate {
            first,
            operator,
            second,
        } => Report::from_validation(
            format!("{} {} {}", first, operator, second),
            validate_calculation_input(first, operator, second),
        ),
        Command::Percent {
            percent,
            base,
            operator,
        } => Report::from_calc_result(
            format!("{}% of {} ({})", percent, base, operator),
            calculate_percentage(percent, base, operator),
        ),
        Command::Negate { operand } => {
            Report::from_calc_result(format!("±{}", operand), toggle_sign(operand))
        }
        Command::Format { number } => {
            let result: CalcResult = match parse_operand(number) {
                Ok(value) => CalcResult::Success {
                    display: format_result(value),
                    value,
                },
                Err(err) => CalcError::invalid_input(err.to_string()).into(),
            };
            Report::from_calc_result(number.clone(), result)
        }
    }
}
