use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordfreq::{default_parallelism, Pipeline, PipelineConfig, RankedEntry, Sink, TextSource};

const BAR_WIDTH: usize = 40;

/// Count word frequencies over a text with a map/shuffle/reduce pipeline.
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about)]
struct Cli {
    /// URL of the text to analyze.
    #[arg(value_name = "URL", required_unless_present = "file", conflicts_with = "file")]
    url: Option<String>,

    /// Read the text from a local file instead of fetching a URL.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Characters of text handed to each map task.
    #[arg(long, default_value_t = wordfreq::config::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// How many of the most frequent words to report.
    #[arg(long = "top", default_value_t = wordfreq::config::DEFAULT_TOP_N)]
    top_n: usize,

    /// Concurrent map tasks; defaults to the available processing units.
    #[arg(long)]
    parallelism: Option<usize>,

    /// Emit the ranking as JSON instead of a bar chart.
    #[arg(long)]
    json: bool,
}

/// Fetches the text with a single GET, treating any non-success status as a
/// failed fetch.
struct UrlTextSource {
    url: String,
}

#[async_trait]
impl TextSource for UrlTextSource {
    async fn fetch(&self) -> anyhow::Result<String> {
        let response = reqwest::get(&self.url)
            .await
            .with_context(|| format!("requesting {}", self.url))?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Reads the text from a local file.
struct FileTextSource {
    path: PathBuf,
}

#[async_trait]
impl TextSource for FileTextSource {
    async fn fetch(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))
    }
}

/// Renders the ranking as a horizontal bar chart, longest bar for the most
/// frequent word.
struct ChartSink;

impl Sink for ChartSink {
    fn present(&self, entries: &[RankedEntry]) {
        if entries.is_empty() {
            println!("no words found in the source text");
            return;
        }
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(1);
        let label_width = entries
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in entries {
            println!(
                "{:<label_width$}  {} {}",
                entry.word,
                bar(entry.count, max_count),
                entry.count
            );
        }
    }
}

fn bar(count: u64, max_count: u64) -> String {
    let filled = ((count as f64 / max_count.max(1) as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.clamp(1, BAR_WIDTH))
}

/// Prints the ranking as a JSON array for scripting.
struct JsonSink;

impl Sink for JsonSink {
    fn present(&self, entries: &[RankedEntry]) {
        match serde_json::to_string_pretty(entries) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialize ranking: {err}"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = PipelineConfig {
        chunk_size: cli.chunk_size,
        top_n: cli.top_n,
        parallelism: cli.parallelism.unwrap_or_else(default_parallelism),
    };
    let pipeline = Pipeline::new(config)?;

    let source: Box<dyn TextSource> = match (cli.url, cli.file) {
        (_, Some(path)) => Box::new(FileTextSource { path }),
        (Some(url), None) => Box::new(UrlTextSource { url }),
        (None, None) => anyhow::bail!("either a URL or --file is required"),
    };
    let sink: Box<dyn Sink> = if cli.json {
        Box::new(JsonSink)
    } else {
        Box::new(ChartSink)
    };

    let ranked = pipeline.run(source.as_ref(), sink.as_ref()).await?;
    info!(entries = ranked.len(), "analysis complete");
    Ok(())
}

fn init_tracing() {
    // Diagnostics go to stderr so the chart and --json stay pipeable.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
