//! Input manager for handling different file types

use crate::error::{Result, ResumeInsightError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor, WordExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Upload size cap in bytes. Larger files are rejected before extraction.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 6_000_000;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_file_bytes: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeInsightError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        self.check_file_size(path)?;

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Word => WordExtractor.extract(path).await?,
            FileType::Unknown => {
                return Err(ResumeInsightError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn check_file_size(&self, path: &Path) -> Result<()> {
        let size = std::fs::metadata(path)?.len();
        if size > self.max_file_bytes {
            return Err(ResumeInsightError::FileTooLarge(format!(
                "{} is {} bytes, limit is {} bytes",
                path.display(),
                size,
                self.max_file_bytes
            )));
        }
        Ok(())
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ResumeInsightError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
