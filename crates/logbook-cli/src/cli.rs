use clap::{Args, Parser, Subcommand};
use logbook_core::LogLevel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logbook")]
#[command(about = "Capture, filter and export application logs", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Path to a config file (or set LOGBOOK_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "LOGBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record stdin lines and export them when input ends
    Capture(CaptureArgs),
    /// Convert a JSON log export to another format
    Export(ExportArgs),
    /// List entries of a JSON log export
    Show(ShowArgs),
    /// Print a JSON log export in another format
    Render(RenderArgs),
    /// Clear a JSON log export after confirmation
    Clear(ClearArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Only keep entries at or above this level
    #[arg(long, value_parser = parse_level)]
    pub level: Option<LogLevel>,
    /// Only keep entries from this module
    #[arg(long)]
    pub module: Option<String>,
}

#[derive(Args)]
pub struct CaptureArgs {
    /// Export format: json, csv or txt
    #[arg(long)]
    pub format: Option<String>,
    /// Module recorded on every captured line
    #[arg(long)]
    pub module: Option<String>,
    /// Level for lines that do not start with a level name
    #[arg(long, value_parser = parse_level, default_value = "INFO")]
    pub level: LogLevel,
    /// Drop lines below this level
    #[arg(long, value_parser = parse_level)]
    pub min_level: Option<LogLevel>,
    /// Keep at most this many entries
    #[arg(long)]
    pub max_entries: Option<usize>,
    /// Directory receiving the export file
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// JSON log export to read
    #[arg(long)]
    pub input: PathBuf,
    /// Export format: json, csv or txt
    #[arg(long)]
    pub format: Option<String>,
    /// Directory receiving the export file
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(long)]
    pub input: PathBuf,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct RenderArgs {
    #[arg(long)]
    pub input: PathBuf,
    /// Output format: json, csv or txt
    #[arg(long)]
    pub format: String,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct ClearArgs {
    #[arg(long)]
    pub input: PathBuf,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

fn parse_level(s: &str) -> Result<LogLevel, String> {
    s.parse().map_err(|e: logbook_core::LogbookError| e.to_string())
}
