use anyhow::{Context, Result};
use memmap2::Mmap;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for one file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

impl ReadStats {
    fn log(&self) {
        info!(
            "Successfully read {}: {} lines, {} bytes in {}ms ({:.2} MB/s)",
            self.file_path,
            self.lines_read,
            self.bytes_read,
            self.duration_ms,
            if self.duration_ms > 0 {
                (self.bytes_read as f64 / 1_000_000.0) / (self.duration_ms as f64 / 1000.0)
            } else {
                0.0
            }
        );
    }
}

/// Async buffered file reader producing the file's lines
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read every line of a UTF-8 file; see [`split_lines`] for the line terminators
    pub async fn read_file_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        let result_lines = decode_lines(&bytes, path)?;

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: result_lines.len() as u64,
            bytes_read: bytes.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        stats.log();

        Ok((result_lines, stats))
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`, terminators stripped
///
/// A final terminator does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                lines.push(&text[start..pos]);
                pos += 1;
                start = pos;
            }
            b'\r' => {
                lines.push(&text[start..pos]);
                pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                start = pos;
            }
            _ => pos += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Validate UTF-8 and split into owned lines, naming the line of the first bad byte
fn decode_lines(bytes: &[u8], path: &Path) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line_no = std::str::from_utf8(valid)
            .map(|t| {
                let open_line = usize::from(t.ends_with(['\n', '\r']));
                (split_lines(t).len() + open_line).max(1)
            })
            .unwrap_or(1);
        anyhow::anyhow!("UTF-8 decoding error in {} at line {}: {}", path.display(), line_no, e)
    })?;
    Ok(split_lines(text).into_iter().map(str::to_string).collect())
}

/// Read every line of a UTF-8 file through a memory map
pub fn read_file_lines_mmap<P: AsRef<Path>>(file_path: P) -> Result<(Vec<String>, ReadStats)> {
    let path = file_path.as_ref();
    let start_time = std::time::Instant::now();

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file {}", path.display()))?;

    // WHY: mapping a zero-length file fails on some platforms
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat file {}", path.display()))?
        .len();
    let lines: Vec<String> = if len == 0 {
        Vec::new()
    } else {
        // SAFETY: the map is read-only and dropped before this function returns
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map file {}", path.display()))?;
        decode_lines(&mmap, path)?
    };

    let stats = ReadStats {
        file_path: path.display().to_string(),
        lines_read: lines.len() as u64,
        bytes_read: len,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    stats.log();

    Ok((lines, stats))
}
