use anyhow::{bail, Context, Result};
use clap::Parser;
use investguard::{ContentType, FraudDetector, Language};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Score text, URLs or media placeholders from the command line
#[derive(Debug, Parser)]
struct Args {
    /// Content to analyze
    content: Option<String>,

    /// Content type: text, url, image, video, audio or media
    #[arg(short = 't', long = "type", default_value = "text")]
    content_type: String,

    /// Keyword language: english, hindi or tamil
    #[arg(short, long, default_value = "english")]
    language: String,

    /// File with one item per line; lines starting with '#' are skipped
    #[arg(long)]
    batch: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let content_type: ContentType = args.content_type.parse()?;
    let language = Language::from_tag(&args.language);
    let detector = Arc::new(FraudDetector::new());

    match (&args.batch, &args.content) {
        (Some(path), _) => process_batch(detector, path, content_type, language).await,
        (None, Some(content)) => process_single(&detector, content, content_type, language),
        (None, None) => bail!("Provide content to analyze or --batch <file>"),
    }
}

fn process_single(
    detector: &FraudDetector,
    content: &str,
    content_type: ContentType,
    language: Language,
) -> Result<()> {
    let start = Instant::now();
    let result = detector.analyze(content, content_type, language);
    let duration = start.elapsed();

    println!("{}", serde_json::to_string_pretty(&result)?);
    println!("\nProcessing time: {:?}", duration);
    Ok(())
}

async fn process_batch(
    detector: Arc<FraudDetector>,
    path: &Path,
    content_type: ContentType,
    language: Language,
) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();

    println!("Processing {} items from file: {}", items.len(), path.display());
    let start = Instant::now();

    const MAX_CONCURRENT: usize = 10;
    let mut results = Vec::with_capacity(items.len());
    for chunk in items.chunks(MAX_CONCURRENT) {
        let tasks = chunk.iter().cloned().map(|item| {
            let detector = Arc::clone(&detector);
            tokio::task::spawn_blocking(move || detector.analyze(&item, content_type, language))
        });
        for joined in futures::future::join_all(tasks).await {
            results.push(joined.context("Analysis task panicked")?);
        }
    }

    let duration = start.elapsed();
    for (item, result) in items.iter().zip(&results) {
        let recommendation = format!("{:?}", result.recommendation);
        println!("{:>5.1}  {:<18}  {}", result.risk_score, recommendation, item);
    }

    let flagged = results.iter().filter(|r| r.risk_score >= 4.0).count();
    println!("\nSummary:");
    println!("Processed: {} items", items.len());
    println!("Flagged (score >= 4.0): {}", flagged);
    println!("Total processing time: {:?}", duration);
    Ok(())
}
