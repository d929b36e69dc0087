use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unionscout::{
    config::{OutputFormat, ScanConfig, DEFAULT_PATTERN},
    output_name::{allocate, SystemClock},
    report, scan, ScanError,
};

type Result<T> = std::result::Result<T, ScanError>;

const USAGE: &str = "Usage: unionscout --format=json|html --directory=PATH [--pattern=REGEX]";

#[derive(Parser)]
#[command(name = "unionscout", version, about, long_about = None)]
struct Cli {
    /// Output format for the report (json or html)
    #[arg(long)]
    format: Option<String>,

    /// Root directory to scan for PHP files
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Regular expression tested against every line
    #[arg(long)]
    pattern: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.format.as_deref() {
        Some("json") => OutputFormat::Json,
        Some("html") => OutputFormat::Html,
        _ => usage_error(),
    };

    let directory = match cli.directory {
        Some(directory) => directory,
        None => usage_error(),
    };

    if !directory.is_dir() {
        eprintln!(
            "Error: Directory \"{}\" does not exist or is not a directory.",
            directory.display()
        );
        process::exit(1);
    }

    let config = ScanConfig {
        format,
        root_path: directory,
        pattern: cli.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
    };
    debug!("Run configuration: {:?}", config);

    let results = scan(&config)?;

    let output_name = allocate("output", config.format.extension(), &SystemClock);
    let output_path = Path::new(&output_name);
    match config.format {
        OutputFormat::Json => report::json::write(&results, output_path)?,
        OutputFormat::Html => report::html::write(&results, output_path)?,
    }

    println!("{} {}", "Results written to".green(), output_name);
    Ok(())
}

fn usage_error() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}
