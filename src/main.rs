// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, --verbose for debug)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use citationcff::{CitationSource, ExportFormat, FetchConfig};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

// Returns:
//   Ok(0) = citation written
//   Err = anything went wrong (mapped to exit code 2 in main)
async fn run(cli: Cli) -> Result<i32> {
    let config = FetchConfig::new().with_raw_base_url(cli.raw_base_url);

    match cli.command {
        Commands::Export {
            repo_url,
            format,
            output,
        } => {
            let source = CitationSource::fetch_with_config(&repo_url, &config)
                .await
                .with_context(|| format!("Could not load citation for {repo_url}"))?;
            write_citation(&source, format, output.as_deref())?;
        }
        Commands::Convert {
            path,
            format,
            output,
            url,
        } => {
            let source = CitationSource::from_path(&path, url.as_deref())?;
            write_citation(&source, format, output.as_deref())?;
        }
        Commands::Show { repo_url, json } => {
            let source = CitationSource::fetch_with_config(&repo_url, &config)
                .await
                .with_context(|| format!("Could not load citation for {repo_url}"))?;
            print_summary(&source, json)?;
        }
    }

    Ok(0)
}

// Renders the citation and sends it to a file or stdout
fn write_citation(source: &CitationSource, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let text = source
        .export(format)
        .with_context(|| format!("Could not export {} as {format}", source.file_url()))?;

    if let Some(path) = output {
        std::fs::write(path, &text)
            .with_context(|| format!("Could not write {}", path.display()))?;
        tracing::info!(path = %path.display(), %format, "Wrote citation");
    } else {
        write!(std::io::stdout(), "{}", text)?;
    }

    Ok(())
}

// Prints where the citation came from and what it contains
fn print_summary(source: &CitationSource, json: bool) -> Result<()> {
    let record = source.record();

    if json {
        let json_output = serde_json::to_string_pretty(&serde_json::json!({
            "url": source.url(),
            "file_url": source.file_url(),
            "citation": record,
        }))?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("Repository: {}", source.url());
    println!("Citation file: {}", source.file_url());
    println!();
    println!("{:<15} {}", "Title", record.title.as_deref().unwrap_or("-"));

    let authors = record.authors.as_deref().unwrap_or_default();
    println!("{:<15} {}", "Authors", authors.len());
    for author in authors {
        println!("{:<15} {}", "", author.display_name());
    }

    let released = record
        .date_released
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{:<15} {}", "Released", released);
    println!("{:<15} {}", "DOI", record.doi.as_deref().unwrap_or("-"));
    println!("{:<15} {}", "Repository", record.repository.as_deref().unwrap_or("-"));
    println!("{:<15} {}", "Keywords", record.keywords().join(", "));

    println!();
    let formats: Vec<String> = ExportFormat::ALL
        .iter()
        .map(|f| {
            let status = if source.export(*f).is_ok() { "ok" } else { "missing fields" };
            format!("{f}: {status}")
        })
        .collect();
    println!("Exports: {}", formats.join(", "));

    Ok(())
}
