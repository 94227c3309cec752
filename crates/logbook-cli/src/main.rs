mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("LOGBOOK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries JSON responses, so diagnostics go to stderr
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "logbook", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(cli.config.as_deref());

    let result = match cli.command {
        Commands::Capture(args) => handlers::capture::handle_capture(&ctx, args).await,
        Commands::Export(args) => handlers::export::handle_export(&ctx, args).await,
        Commands::Render(args) => handlers::export::handle_render(&ctx, args).await,
        Commands::Show(args) => handlers::show::handle_show(&ctx, args).await,
        Commands::Clear(args) => handlers::clear::handle_clear(&ctx, args).await,
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:#}", e);
        output::output_error(&e.to_string());
    }

    Ok(())
}
