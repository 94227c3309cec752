use crate::cli::CaptureArgs;
use crate::context::CliContext;
use crate::output;
use logbook_core::LogLevel;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn handle_capture(ctx: &CliContext, args: CaptureArgs) -> anyhow::Result<()> {
    let format = ctx.export_format(args.format.as_deref())?;
    let store = ctx.new_store(args.max_entries, args.min_level);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut read = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let (level, message) = split_level(&line, args.level);
        store.append(level, message, args.module.as_deref());
        read += 1;
    }
    tracing::debug!(read, kept = store.len(), "Finished reading stdin");

    let response = ctx
        .deliver(&store.get_logs(), format, &args.output_dir)
        .await?;
    output::output_success(&response);
    Ok(())
}

/// Splits a leading level name (`ERROR`, `[warn]`, `Info:`) off a line.
///
/// Lowercase or capitalized words only count as a level when bracketed or
/// followed by a colon, so prose like "Error reading config" keeps its text.
fn split_level(line: &str, default: LogLevel) -> (LogLevel, &str) {
    let trimmed = line.trim_start();
    let (first, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (trimmed, ""),
    };
    let bracketed = first.starts_with('[') && first.trim_end_matches(':').ends_with(']');
    let name = first
        .trim_start_matches('[')
        .trim_end_matches(':')
        .trim_end_matches(']');
    let shouted = name.chars().all(|c| c.is_ascii_uppercase());
    let marked = bracketed || first.ends_with(':') || shouted;
    if !marked {
        return (default, line);
    }
    match name.parse::<LogLevel>() {
        Ok(level) => (level, rest),
        Err(_) => (default, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_level_variants() {
        assert_eq!(
            split_level("ERROR disk full", LogLevel::Info),
            (LogLevel::Error, "disk full")
        );
        assert_eq!(
            split_level("[warn] slow query", LogLevel::Info),
            (LogLevel::Warning, "slow query")
        );
        assert_eq!(
            split_level("CRITICAL: gone", LogLevel::Info),
            (LogLevel::Critical, "gone")
        );
    }

    #[test]
    fn test_split_level_falls_back_to_default() {
        assert_eq!(
            split_level("plain message", LogLevel::Debug),
            (LogLevel::Debug, "plain message")
        );
        assert_eq!(split_level("INFO", LogLevel::Debug), (LogLevel::Info, ""));
    }

    #[test]
    fn test_split_level_keeps_leading_words() {
        assert_eq!(
            split_level("Error reading config file", LogLevel::Info),
            (LogLevel::Info, "Error reading config file")
        );
        assert_eq!(
            split_level("debug output enabled", LogLevel::Warning),
            (LogLevel::Warning, "debug output enabled")
        );
        assert_eq!(
            split_level("Info: cache warmed", LogLevel::Debug),
            (LogLevel::Info, "cache warmed")
        );
        assert_eq!(
            split_level("[Error] timeout", LogLevel::Info),
            (LogLevel::Error, "timeout")
        );
    }
}
