use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use unbundle_core::{
    acquire_map, extract, parse_source_map, write_archive, AcquireError, ArchiveError,
    ExtractOptions, ExtractionSummary, FetchError, HttpFetcher, MapError, ResolvedSource,
    SourceOrigin,
};

#[derive(Parser)]
#[command(
    name = "unbundle_cli",
    version,
    about = "Reconstruct an original source tree from a JavaScript source map"
)]
struct Cli {
    /// Source map URL or local file path (prompted for when omitted)
    map: Option<String>,

    /// Output archive path
    #[arg(short = 'o', long, value_name = "PATH", default_value = "extracted_sources.zip")]
    output: PathBuf,

    /// Maximum concurrent source fetches
    #[arg(long, default_value_t = 8)]
    concurrency: usize,

    /// Print the map's source list without extracting
    #[arg(long)]
    list_sources: bool,

    /// Render the extraction summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Acquire(#[from] AcquireError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let input = match cli.map {
        Some(ref m) => m.clone(),
        None => prompt_for_map()?,
    };

    let fetcher = HttpFetcher::new()?;
    let acquired = acquire_map(&input, &fetcher).await?;
    let doc = parse_source_map(&acquired.text)?;

    if cli.list_sources {
        for source in &doc.sources {
            println!("{source}");
        }
        return Ok(());
    }

    let options = ExtractOptions {
        concurrency: cli.concurrency,
    };
    let progress = |source: &ResolvedSource, path: &str| match source.origin {
        SourceOrigin::ErrorPlaceholder => {
            warn!("{} -> {} (placeholder)", source.raw_identifier, path)
        }
        _ => info!("{} -> {}", source.raw_identifier, path),
    };
    let (tree, summary) = extract(
        &doc,
        Some(&acquired.base),
        &fetcher,
        &options,
        Some(&progress),
    )
    .await;

    let payload = tree.to_zip_bytes()?;
    write_archive(&cli.output, &payload)?;

    render_summary(&summary, cli.json, &cli.output)
}

fn prompt_for_map() -> Result<String, CliError> {
    print!("Source map URL: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CliError::Other("no source map given".to_string()));
    }
    Ok(trimmed.to_string())
}

fn render_summary(summary: &ExtractionSummary, json: bool, output: &Path) -> Result<(), CliError> {
    if json {
        let rendered =
            serde_json::to_string_pretty(summary).map_err(|e| CliError::Other(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{} sources -> {}", summary.total_sources, output.display());
    if !summary.manifest_files.is_empty() {
        println!("manifest files:");
        for manifest in &summary.manifest_files {
            println!("  {manifest}");
        }
    }
    if !summary.failed_sources.is_empty() {
        println!("failed sources:");
        for failed in &summary.failed_sources {
            println!("  {}: {}", failed.identifier, failed.reason);
        }
    }
    Ok(())
}
