use anyhow::Result;
use clap::Parser;
use lesson_split::{extract_lessons, pipeline::write_stats, PipelineConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lesson-split")]
#[command(about = "Splits an extracted lesson pamphlet into one cleaned lesson per line")]
#[command(version)]
struct Args {
    /// TOML file with pipeline settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extracted text of the pamphlet
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the lesson corpus (overwritten)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of leading front-matter lines to drop
    #[arg(long)]
    discard_offset: Option<usize>,

    /// Boilerplate substring to strip from every line (repeatable, replaces the default list)
    #[arg(long)]
    blacklist: Vec<String>,

    /// Lesson count to compare the result against
    #[arg(long)]
    expected_lessons: Option<usize>,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<(PipelineConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(offset) = self.discard_offset {
            config.discard_offset = offset;
        }
        if !self.blacklist.is_empty() {
            config.blacklist = self.blacklist;
        }
        if let Some(expected) = self.expected_lessons {
            config.expected_lessons = Some(expected);
        }
        config.use_mmap |= self.use_mmap;

        Ok((config, self.stats_out))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: stdout carries only the lesson count, structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let (config, stats_out) = args.into_config()?;

    if !config.input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", config.input_path.display());
    }
    if config.input_path.is_dir() {
        anyhow::bail!("Input path is a directory: {}", config.input_path.display());
    }

    let report = extract_lessons(&config).await?;

    println!("Number of lessons: {}", report.lessons.len());

    if let Some(stats_path) = stats_out {
        write_stats(&stats_path, &report.stats).await?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    Ok(())
}
