//! CLI command definitions and handlers

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::models::{language_name, resolve_language, AUTO_DETECT, LANGUAGES};

/// Commands for Multi-Translate
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text given as an argument, or read from stdin
    Translate {
        /// Text to translate (reads stdin when omitted)
        text: Option<String>,

        /// Source language name or code (default: auto-detect)
        #[arg(short, long, default_value = AUTO_DETECT)]
        from: String,

        /// Target language name or code (default: en)
        #[arg(short, long, default_value = "en")]
        to: String,
    },

    /// Translate stdin line by line until EOF
    Interactive {
        /// Source language name or code (default: auto-detect)
        #[arg(short, long, default_value = AUTO_DETECT)]
        from: String,

        /// Target language name or code (default: en)
        #[arg(short, long, default_value = "en")]
        to: String,
    },

    /// List the built-in languages
    Languages,
}

/// Resolve the source and target arguments to language codes.
///
/// Auto-detection only makes sense for the source side.
pub fn parse_languages(from: &str, to: &str) -> anyhow::Result<(String, String)> {
    let source = resolve_language(from);
    let target = resolve_language(to);

    if target == AUTO_DETECT {
        anyhow::bail!("auto-detect is only valid as a source language");
    }

    Ok((source, target))
}

/// Render the language table shown by `languages`
pub fn language_table() -> String {
    LANGUAGES
        .iter()
        .map(|(name, code)| format!("{:<6} {}", code, name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(code: &str) -> String {
    match language_name(code) {
        Some(name) => format!("{} ({})", name, code),
        None => code.to_string(),
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Translating...");
    pb
}

/// Translate once and report status while the request is in flight
async fn translate_with_status(
    client: &TranslationClient,
    text: &str,
    source: &str,
    target: &str,
) -> crate::core::errors::Result<String> {
    let pb = spinner();
    let result = client.translate(text, source, target).await;

    match &result {
        Ok(_) => pb.finish_with_message("Done."),
        Err(_) => pb.finish_and_clear(),
    }

    result
}

/// Handle translate command
pub async fn handle_translate(
    client: &TranslationClient,
    text: Option<String>,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    let (source, target) = parse_languages(&from, &to)?;

    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };

    if client.endpoint().is_custom() {
        info!("Using custom endpoint: {}", client.endpoint().resolved_url());
    }
    info!("Translating {} -> {}", describe(&source), describe(&target));

    let translation = translate_with_status(client, &text, &source, &target).await?;
    println!("{}", translation);

    Ok(())
}

/// Handle interactive command
pub async fn handle_interactive(
    client: &TranslationClient,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    let (source, target) = parse_languages(&from, &to)?;

    if client.endpoint().is_custom() {
        eprintln!("Using custom endpoint: {}", client.endpoint().resolved_url());
    }
    eprintln!(
        "Translating {} -> {}. One line per request, Ctrl-D to quit.",
        describe(&source),
        describe(&target)
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut translated = 0usize;
    let mut failed = 0usize;

    while let Some(line) = lines.next_line().await? {
        match translate_with_status(client, &line, &source, &target).await {
            Ok(translation) => {
                translated += 1;
                println!("{}", translation);
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    info!("Interactive session finished: {} translated, {} failed", translated, failed);

    Ok(())
}

/// Handle languages command
pub fn handle_languages() {
    println!("{}", language_table());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_languages_by_name_and_code() {
        let (source, target) = parse_languages("Auto Detect", "French").unwrap();
        assert_eq!(source, "auto");
        assert_eq!(target, "fr");

        let (source, target) = parse_languages("tr", "KO").unwrap();
        assert_eq!(source, "tr");
        assert_eq!(target, "ko");
    }

    #[test]
    fn test_auto_target_rejected() {
        assert!(parse_languages("en", "auto").is_err());
        assert!(parse_languages("en", "Auto Detect").is_err());
    }

    #[test]
    fn test_language_table_lists_every_language() {
        let table = language_table();

        assert_eq!(table.lines().count(), LANGUAGES.len());
        assert!(table.lines().next().unwrap().starts_with("auto"));
        assert!(table.contains("zh     Chinese (Simplified)"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("es"), "Spanish (es)");
        assert_eq!(describe("uk"), "uk");
    }
}
