//! CLI entry point for the GradeBook Analyzer.
//!
//! Runs the interactive menu by default, or analyzes a single CSV file with
//! the `import` subcommand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradebook_analyzer::{
    config::GradingConfig,
    session::{Session, import_command},
};
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_analyzer")]
#[command(about = "Compute statistics and letter grades for student scores", long_about = None)]
struct Cli {
    /// JSON file overriding grade bands and pass threshold
    #[arg(long, global = true, env = "GRADEBOOK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Interactive,
    /// Analyze a CSV file of `name,score` rows and print the report
    Import {
        /// Path to the CSV file; the first row is treated as a header
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/gradebook_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GradingConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GradingConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), config);
            session.run()?;
        }
        Commands::Import { source, json } => {
            import_command(io::stdout().lock(), &source, &config, json)?;
        }
    }

    Ok(())
}
