//! Batch conversion driver with per-file failure isolation.
//!
//! This module provides the high-level API: point it at a source directory,
//! give it a renderer, and it converts every Word document it finds,
//! collecting one result per attempted file into a [`BatchReport`].

use crate::config::{BatchReport, ConversionResult, ConversionTask};
use crate::error::{ConversionError, Result};
use crate::renderer::DocumentRenderer;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Directory-to-directory batch converter.
///
/// One bad file never aborts the batch: every per-file renderer error is
/// caught, recorded, and processing moves on to the next file. Only an
/// unusable source directory or an uncreatable target directory
/// short-circuits before any per-file work begins.
pub struct BatchConverter {
    /// Directory containing Word files.
    source_dir: PathBuf,
    /// Directory where PDF files will be saved.
    target_dir: PathBuf,
    /// Single-file conversion capability.
    renderer: Box<dyn DocumentRenderer>,
}

impl BatchConverter {
    /// Create a new batch converter.
    ///
    /// Eagerly creates the target directory (and missing parents). A
    /// creation failure is logged here and surfaced fatally by the first
    /// [`convert_all`](Self::convert_all) call, which retries.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        renderer: Box<dyn DocumentRenderer>,
    ) -> Self {
        let source_dir = source_dir.into();
        let target_dir = target_dir.into();

        if let Err(e) = fs::create_dir_all(&target_dir) {
            warn!("Could not create target directory {:?}: {}", target_dir, e);
        }

        Self {
            source_dir,
            target_dir,
            renderer,
        }
    }

    /// Convert all Word files in the source directory to PDFs.
    ///
    /// Files are processed sequentially, in directory-listing order.
    /// Returns the ordered report; the only error cases are the batch-fatal
    /// conditions (source directory missing or unlistable, target directory
    /// uncreatable).
    pub fn convert_all(&self) -> Result<BatchReport> {
        fs::create_dir_all(&self.target_dir).map_err(|e| ConversionError::TargetDirError {
            path: self.target_dir.clone(),
            message: e.to_string(),
        })?;

        if !self.source_dir.is_dir() {
            return Err(ConversionError::SourceDirNotFound(self.source_dir.clone()));
        }

        let tasks = self.discover_tasks()?;
        if tasks.is_empty() {
            info!("No Word documents found in {:?}", self.source_dir);
            return Ok(BatchReport::default());
        }

        let mut results = Vec::with_capacity(tasks.len());
        for task in &tasks {
            results.push(self.convert_file(task));
        }

        let report = BatchReport::new(results);
        info!(
            "Batch complete: {} total, {} succeeded, {} failed",
            report.total(),
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }

    /// Release the renderer's session state.
    ///
    /// Call once after the batch; safe to call even when files failed.
    pub fn shutdown(&mut self) {
        self.renderer.shutdown();
    }

    /// List eligible Word documents in the source directory (non-recursive).
    fn discover_tasks(&self) -> Result<Vec<ConversionTask>> {
        let entries =
            fs::read_dir(&self.source_dir).map_err(|e| ConversionError::SourceDirUnreadable {
                path: self.source_dir.clone(),
                message: e.to_string(),
            })?;

        let mut tasks = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConversionError::SourceDirUnreadable {
                path: self.source_dir.clone(),
                message: e.to_string(),
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !crate::is_word_document(extension) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                tasks.push(ConversionTask::new(name));
            }
        }
        Ok(tasks)
    }

    /// Convert a single file, turning any renderer error into a failed result.
    fn convert_file(&self, task: &ConversionTask) -> ConversionResult {
        info!("Converting: {} to PDF...", task.source_name);

        let source = self.source_dir.join(&task.source_name);
        let target = self.target_dir.join(&task.target_name);

        match self.renderer.render(&source, &target) {
            Ok(()) => {
                info!(
                    "Successfully converted: {} to {}",
                    task.source_name, task.target_name
                );
                ConversionResult::success(task)
            }
            Err(e) => {
                error!("Failed to convert: {}. Error: {}", task.source_name, e);
                ConversionResult::failure(task, e.to_string())
            }
        }
    }
}
