//! CLI argument definitions for the vacation engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[command(
    name = "vacation-engine",
    version,
    about = "Compute yearly vacation entitlements for an employee roster",
    long_about = "Compute yearly vacation entitlements for an employee roster.\n\n\
                  Reads a CSV roster, applies the vacation policy for the target year\n\
                  and writes a name,days CSV. Can also serve the same calculation over HTTP."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate vacation days for every employee in a CSV roster.
    #[command(visible_alias = "vac")]
    Vacation(VacationArgs),

    /// Serve the calculation over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser)]
pub struct VacationArgs {
    /// Target year, e.g. 2017.
    #[arg(value_name = "YEAR", allow_hyphen_values = true)]
    pub year: String,

    /// CSV roster with name, birth date, start date and contract columns.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Result file (default: <INPUT_STEM>_vacation_<YEAR>.csv).
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Policy YAML to use instead of the built-in defaults.
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "addr", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Policy YAML to use instead of the built-in defaults.
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_vacation_alias_and_optional_output() {
        let cli = Cli::try_parse_from(["vacation-engine", "vac", "2017", "input.csv"]).unwrap();

        match cli.command {
            Command::Vacation(args) => {
                assert_eq!(args.year, "2017");
                assert_eq!(args.input_file, PathBuf::from("input.csv"));
                assert!(args.output_file.is_none());
            }
            Command::Serve(_) => panic!("Expected vacation command"),
        }
    }

    #[test]
    fn test_year_is_taken_verbatim() {
        let cli =
            Cli::try_parse_from(["vacation-engine", "vacation", "a2017", "in.csv", "out.csv"])
                .unwrap();

        match cli.command {
            Command::Vacation(args) => {
                assert_eq!(args.year, "a2017");
                assert_eq!(args.output_file, Some(PathBuf::from("out.csv")));
            }
            Command::Serve(_) => panic!("Expected vacation command"),
        }
    }

    #[test]
    fn test_serve_default_addr() {
        let cli = Cli::try_parse_from(["vacation-engine", "serve"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.addr.port(), 3000),
            Command::Vacation(_) => panic!("Expected serve command"),
        }
    }
}
