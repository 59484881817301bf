// WHY: the whole extraction is one call returning the lessons and run statistics,
// so the CLI and tests drive the same path

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::cleaning::NoiseFilter;
use crate::config::PipelineConfig;
use crate::heading::HeadingClassifier;
use crate::reader::{read_file_lines_mmap, AsyncFileReader, ReaderConfig};
use crate::segmenter::{Lesson, LessonSegmenter};

/// Statistics for one extraction run, written by `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub input_path: String,
    pub output_path: String,
    /// Lines in the input file
    pub lines_read: u64,
    /// Front-matter lines dropped by the discard offset
    pub lines_discarded: u64,
    /// Lines still non-empty after cleaning
    pub lines_cleaned: u64,
    /// Cleaned lines dropped before the first heading
    pub preamble_lines: u64,
    pub lessons_detected: u64,
    pub expected_lessons: Option<u64>,
    pub count_matches_expected: Option<bool>,
    pub bytes_written: u64,
    pub processing_time_ms: u64,
}

/// Lessons plus statistics for a completed run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub lessons: Vec<Lesson>,
    pub stats: RunStats,
}

/// Drop the front matter, clean each remaining line and keep only non-empty results
pub fn clean_lines(raw_lines: &[String], discard_offset: usize, filter: &NoiseFilter) -> Vec<String> {
    raw_lines
        .iter()
        .skip(discard_offset)
        .map(|line| filter.clean(line))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Render lessons as the output corpus: trimmed text, one lesson per line, no trailing newline
pub fn render_lessons(lessons: &[Lesson]) -> String {
    lessons.iter().map(Lesson::text).collect::<Vec<_>>().join("\n")
}

/// Write the corpus, replacing any existing file
pub async fn write_lessons(output_path: &Path, lessons: &[Lesson]) -> Result<u64> {
    let content = render_lessons(lessons);

    let file = tokio::fs::File::create(output_path)
        .await
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .await
        .with_context(|| format!("Failed to write output file {}", output_path.display()))?;
    writer.flush().await?;

    Ok(content.len() as u64)
}

/// Write run statistics as pretty-printed JSON
pub async fn write_stats(stats_path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(stats_path, content)
        .await
        .with_context(|| format!("Failed to write stats file {}", stats_path.display()))?;
    Ok(())
}

/// Run one full extraction as described by `config`
pub async fn extract_lessons(config: &PipelineConfig) -> Result<ExtractionReport> {
    let start_time = Instant::now();
    info!("Extracting lessons from {}", config.input_path.display());

    let (raw_lines, read_stats) = if config.use_mmap {
        read_file_lines_mmap(&config.input_path)?
    } else {
        let reader = AsyncFileReader::new(ReaderConfig { buffer_size: config.buffer_size });
        reader.read_file_lines(&config.input_path).await?
    };

    if raw_lines.len() < config.discard_offset {
        warn!(
            "Input has {} lines, fewer than the discard offset {}",
            raw_lines.len(),
            config.discard_offset
        );
    }

    let filter = NoiseFilter::new(config.blacklist.clone());
    let cleaned = clean_lines(&raw_lines, config.discard_offset, &filter);

    let segmenter = LessonSegmenter::new(HeadingClassifier::new()?);
    let segmentation = segmenter.segment(cleaned.iter().map(String::as_str));

    let bytes_written = write_lessons(&config.output_path, &segmentation.lessons).await?;

    let lessons_detected = segmentation.lessons.len() as u64;
    let expected_lessons = config.expected_lessons.map(|n| n as u64);
    let count_matches_expected = expected_lessons.map(|n| n == lessons_detected);
    if count_matches_expected == Some(false) {
        warn!(
            "Detected {} lessons, expected {}",
            lessons_detected,
            config.expected_lessons.unwrap_or_default()
        );
    }

    let stats = RunStats {
        input_path: config.input_path.display().to_string(),
        output_path: config.output_path.display().to_string(),
        lines_read: read_stats.lines_read,
        lines_discarded: read_stats.lines_read.min(config.discard_offset as u64),
        lines_cleaned: cleaned.len() as u64,
        preamble_lines: segmentation.preamble_lines as u64,
        lessons_detected,
        expected_lessons,
        count_matches_expected,
        bytes_written,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Wrote {} lessons ({} bytes) to {}",
        stats.lessons_detected,
        stats.bytes_written,
        config.output_path.display()
    );

    Ok(ExtractionReport { lessons: segmentation.lessons, stats })
}
