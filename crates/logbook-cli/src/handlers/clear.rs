use crate::cli::ClearArgs;
use crate::context::CliContext;
use crate::output;
use logbook_domain::{clear_with_confirmation, AssumeYes, Confirm};
use serde::Serialize;
use std::io::{BufRead, Write};

#[derive(Serialize)]
struct ClearResponse {
    cleared: bool,
    removed: usize,
}

/// Asks on stderr and reads the answer from stdin; only `y`/`yes` confirm.
/// Blocks, so callers run it on a blocking thread.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        if let Err(e) = std::io::stderr().flush() {
            tracing::warn!("Failed to flush confirmation prompt: {}", e);
        }

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub async fn handle_clear(ctx: &CliContext, args: ClearArgs) -> anyhow::Result<()> {
    let store = ctx.load_store(&args.input).await?;
    let removed = store.len();

    let yes = args.yes;
    let (store, cleared) = tokio::task::spawn_blocking(move || {
        let confirm: &dyn Confirm = if yes { &AssumeYes } else { &StdinConfirm };
        let cleared = clear_with_confirmation(&store, confirm);
        (store, cleared)
    })
    .await?;
    if cleared {
        ctx.save_store(&store, &args.input).await?;
        tracing::info!("Cleared {} entries from {}", removed, args.input.display());
    }

    output::output_success(ClearResponse {
        cleared,
        removed: if cleared { removed } else { 0 },
    });
    Ok(())
}
