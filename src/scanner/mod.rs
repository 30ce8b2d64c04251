//! Block document discovery.
//!
//! Finds document files under a directory, honouring the configured
//! extensions, excludes and document limit.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Configuration for document scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Document extensions to include (e.g., ["toml", "json"])
    pub extensions: Vec<String>,
    /// Names to skip (e.g., ["target", "node_modules"])
    pub excludes: Vec<String>,
    /// Maximum number of documents to return
    pub max_documents: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["toml".to_string(), "json".to_string()],
            excludes: vec!["target".to_string(), "node_modules".to_string()],
            max_documents: None,
        }
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            excludes: config.excludes.clone(),
            max_documents: Some(config.max_documents),
        }
    }
}

/// Document scanner rooted at a directory.
pub struct DocumentScanner {
    config: ScanConfig,
    root: PathBuf,
}

impl DocumentScanner {
    /// Create a new document scanner.
    pub fn new(root: PathBuf, config: ScanConfig) -> Self {
        Self { config, root }
    }

    /// Scan for matching documents, sorted by path.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            anyhow::bail!("Not a directory: {}", self.root.display());
        }

        let mut documents = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() && self.matches(entry.path()) {
                debug!("Found document: {}", entry.path().display());
                documents.push(entry.into_path());
            }
        }

        documents.sort();
        if let Some(max) = self.config.max_documents {
            documents.truncate(max);
        }

        Ok(documents)
    }

    /// Check if a path has one of the configured extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|e| e == ext))
    }

    /// Hidden entries and explicit excludes are skipped.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.config.excludes.iter().any(|pattern| name == pattern.as_str())
    }

    /// Path of a document relative to the scan root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Resolve an input path into the documents to render.
pub fn collect_inputs(input: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(input)
        .with_context(|| format!("Input not found: {}", input.display()))?;

    if metadata.is_dir() {
        DocumentScanner::new(input.to_path_buf(), config.clone()).scan()
    } else {
        Ok(vec![input.to_path_buf()])
    }
}
