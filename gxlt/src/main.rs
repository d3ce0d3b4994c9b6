//! gxlt CLI - command-line front end for the gxl lexer.
//!
//! This is the main entry point for the gxlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_catalog, run_tokenize, CatalogArgs, InputSource, OutputFormat, TokenizeArgs, TokenizeOutput,
};
use config::Config;
use error::{GxltError, Result};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "GXLT_LOG";

/// gxlt - tokenize gxl expressions
///
/// gxlt prints the token stream of an expression, or the catalog of token
/// kinds in the order the lexer tries them.
#[derive(Parser, Debug)]
#[command(name = "gxlt")]
#[command(author = "GXL Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize gxl expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GXLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GXLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GXLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gxlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of an expression
    ///
    /// Reads the expression from FILE, from --expr, or from standard input
    /// when neither is given.
    Tokenize(TokenizeCommand),

    /// Print the token catalog in trial order
    Catalog(CatalogCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// File containing the expression
    #[arg(conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Expression to tokenize
    #[arg(short, long)]
    expr: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comment tokens out of the output
    #[arg(long)]
    strip_comments: bool,
}

/// Arguments for the catalog subcommand.
#[derive(Parser, Debug)]
struct CatalogCommand {
    /// Only list identifier, number and string kinds
    #[arg(long)]
    values_only: bool,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point for the gxlt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. A lexing failure is
/// reported as a rendered diagnostic and a failing exit code.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `GXLT_LOG` takes precedence over `--verbose`. Logs go to standard error
/// so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GxltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<ExitCode> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
        Commands::Catalog(args) => execute_catalog(args, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<ExitCode> {
    let input = match (args.file, args.expr) {
        (Some(path), _) => InputSource::File(path),
        (None, Some(expr)) => InputSource::Expr(expr),
        (None, None) => InputSource::Stdin,
    };

    let tokenize_args = TokenizeArgs {
        input,
        format: args.format.unwrap_or(config.output.format),
        strip_comments: args.strip_comments || config.output.strip_comments,
        lexer: config.lexer,
    };

    match run_tokenize(tokenize_args)? {
        TokenizeOutput::Tokens(text) => {
            print!("{}", text);
            Ok(ExitCode::SUCCESS)
        },
        TokenizeOutput::Failed(diagnostics) => {
            eprint!("{}", diagnostics);
            Ok(ExitCode::FAILURE)
        },
    }
}

/// Execute the catalog command.
fn execute_catalog(args: CatalogCommand, config: Config) -> Result<ExitCode> {
    let catalog_args = CatalogArgs {
        values_only: args.values_only,
        format: args.format.unwrap_or(config.output.format),
    };
    print!("{}", run_catalog(catalog_args)?);
    Ok(ExitCode::SUCCESS)
}
