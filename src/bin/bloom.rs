use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use bloomish::{
    base::{
        log::{Message, Severity},
        FileProvider, FsProvider, PrintHandler,
    },
    lexical::scanner::{ScannerOptions, UnrecognizedPolicy},
};
use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bloom")]
#[command(about = "All-in-one command-line toolkit for Bloomish language development", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lex (scan) Bloomish code to generate an equivalent series of tokens
    Lex(LexArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "code"])))]
struct LexArgs {
    /// The path of a file containing Bloomish code to be lexed
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// In-line Bloomish code to be lexed
    #[arg(short, long, value_name = "CODE")]
    code: Option<String>,

    /// Print a warning for every character that is skipped
    #[arg(long)]
    report_unrecognized: bool,
}

impl LexArgs {
    fn options(&self) -> ScannerOptions {
        ScannerOptions {
            unrecognized: if self.report_unrecognized {
                UnrecognizedPolicy::ReportUnrecognized
            } else {
                UnrecognizedPolicy::SkipUnrecognized
            },
        }
    }
}

fn lex(args: &LexArgs, provider: &impl FileProvider, out: &mut impl Write) -> Result<()> {
    let handler = PrintHandler::new();
    let options = args.options();

    match (&args.code, &args.file) {
        (Some(code), _) => {
            for token in bloomish::tokenize_with(code, options, &handler) {
                writeln!(out, "{token}")?;
            }
        }
        (None, Some(path)) => {
            if !provider.exists(path) {
                anyhow::bail!("No file exists at the path: {}", path.display());
            }

            let tokens = bloomish::tokenize_file(provider, path, options, &handler)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for token in tokens {
                writeln!(out, "{token}")?;
            }
        }
        (None, None) => anyhow::bail!("Specify exactly one of '--file' or '--code'"),
    }

    Ok(())
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Lex(args) => lex(&args, &FsProvider::default(), &mut io::stdout().lock()),
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(err) => {
            eprintln!("{}", Message::new(Severity::Error, format!("{err:#}")));
            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}
