//! statsarray CLI
//!
//! Descriptive statistics calculator: an interactive shell plus one-shot
//! report and statistic subcommands.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use statsarray::config::ConfigBuilder;
use statsarray::protocol::{decode_command, render_error, Command};
use statsarray::{Config, DatasetKind, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// statsarray CLI
#[derive(Parser, Debug)]
#[command(name = "statsarray-cli")]
#[command(about = "Descriptive statistics calculator")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the dataset as a population (divisor n) instead of a sample
    #[arg(short, long)]
    population: bool,

    /// Seed for the `random` command
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive shell (default)
    Shell,

    /// Print the full report for a file of whitespace-separated numbers
    Report {
        /// Input file
        file: PathBuf,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one statistic for a file of whitespace-separated numbers
    Stat {
        /// Statistic keyword (mean, median, iqr, ...) or menu letter
        name: String,

        /// Input file
        file: PathBuf,
    },
}

fn main() {
    // Initialize tracing/logging; stdout is reserved for results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,statsarray=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(Engine::new(config)),
        Commands::Report { file, output } => run_report(config, &file, output),
        Commands::Stat { name, file } => decode_command(&format!("stat {}", name))
            .and_then(|command| run_once(config, &file, command)),
    };

    if let Err(e) = result {
        eprintln!("{}", render_error(&e));
        std::process::exit(1);
    }
}

/// Config file (if any) with command-line overrides applied
fn load_config(args: &Args) -> statsarray::Result<Config> {
    let base = match &args.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    let mut builder = ConfigBuilder::from_config(base);
    if args.population {
        builder = builder.dataset_kind(DatasetKind::Population);
    }
    if let Some(seed) = args.seed {
        builder = builder.random_seed(seed);
    }
    Ok(builder.build())
}

/// Load `file`, execute one command and print its response
fn run_once(config: Config, file: &Path, command: Command) -> statsarray::Result<()> {
    let mut engine = Engine::new(config);
    engine.load_file(file)?;
    let response = engine.execute(command)?;
    print!("{}", response);
    Ok(())
}

/// Load `file`, print its report and optionally save it to `output`
fn run_report(config: Config, file: &Path, output: Option<PathBuf>) -> statsarray::Result<()> {
    let mut engine = Engine::new(config);
    engine.load_file(file)?;
    print!("{}", engine.execute(Command::Report)?);

    if let Some(path) = output {
        print!("\n{}", engine.execute(Command::Save { path: Some(path) })?);
    }
    Ok(())
}

/// Read commands from stdin until `quit` or end of input
fn run_shell(mut engine: Engine) -> statsarray::Result<()> {
    tracing::info!("statsarray v{}", statsarray::VERSION);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Ok(overview) = engine.execute(Command::Show) {
        print!("{}", overview);
    }
    println!("Type 'help' for the list of commands.");

    loop {
        print!("\nOption: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match decode_command(&line).and_then(|command| engine.execute(command)) {
            Ok(response) => {
                print!("{}", response);
                if response.is_quit() {
                    break;
                }
            }
            Err(e) => println!("{}", render_error(&e)),
        }
    }

    Ok(())
}
