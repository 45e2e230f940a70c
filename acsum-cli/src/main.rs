use acsum_ingest::StatementParser;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "acsum",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ACSUM_BUILD_SHA"), ")"),
    about = "Extract A/C Summary figures from brokerage statement text"
)]
struct Cli {
    /// Config file (defaults to ~/.acsum/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statement text and print the record as JSON
    Parse {
        /// Statement text file (reads stdin when omitted or `-`)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Log every extracted field and unmatched label to stderr
        #[arg(long, short)]
        verbose: bool,

        /// Single-line JSON regardless of config
        #[arg(long)]
        compact: bool,

        /// Print the raw extraction report instead of a validated record
        #[arg(long)]
        report: bool,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.acsum/config.toml with defaults (no-op if present)
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            file,
            verbose,
            compact,
            report,
        } => {
            init_tracing(verbose);

            let cfg = config::load_config(cli.config.as_deref())?;
            let parser = StatementParser::new(cfg.policy).context("building statement parser")?;
            let text = state::read_statement_text(file.as_deref())?;
            let pretty = cfg.output.pretty && !compact;

            let json = if report {
                to_json(&parser.extract(&text), pretty)?
            } else {
                let record = parser.parse(&text).context("parsing statement text")?;
                to_json(&record, pretty)?
            };
            println!("{json}");
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config(cli.config.as_deref())?;
            }
            ConfigCommand::Show => {
                let cfg = config::load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,acsum_ingest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}
