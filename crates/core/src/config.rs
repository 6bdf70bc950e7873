//! Configuration and report types for word-to-pdf conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which renderer realization to use for single-file conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// In-process pure-Rust DOCX renderer.
    Library,
    /// External LibreOffice application session.
    LibreOffice,
}

impl Default for RendererKind {
    fn default() -> Self {
        RendererKind::Library
    }
}

/// Configuration for the LibreOffice renderer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreOfficeConfig {
    /// Path to soffice binary. If None, searches well-known locations and PATH.
    pub soffice_path: Option<PathBuf>,

    /// LibreOffice PDF export filter name.
    /// Default: "writer_pdf_Export".
    pub export_filter: String,

    /// Whether to run LibreOffice with a visible window (debugging aid).
    /// Default: false (headless).
    pub visible: bool,
}

impl Default for LibreOfficeConfig {
    fn default() -> Self {
        Self {
            soffice_path: None,
            export_filter: "writer_pdf_Export".to_string(),
            visible: false,
        }
    }
}

impl LibreOfficeConfig {
    /// Set the soffice binary path.
    pub fn soffice_path(mut self, path: PathBuf) -> Self {
        self.soffice_path = Some(path);
        self
    }

    /// Set the PDF export filter.
    pub fn export_filter(mut self, filter: impl Into<String>) -> Self {
        self.export_filter = filter.into();
        self
    }

    /// Run LibreOffice with a visible window.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.export_filter.is_empty() {
            return Err(crate::error::ConversionError::InvalidConfig(
                "export_filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Combined configuration for the converter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Selected renderer realization.
    pub renderer: RendererKind,

    /// LibreOffice session settings (used when `renderer` is `LibreOffice`).
    pub libreoffice: LibreOfficeConfig,
}

impl ConverterConfig {
    /// Create a config for the given renderer kind with default settings.
    pub fn new(renderer: RendererKind) -> Self {
        Self {
            renderer,
            ..Default::default()
        }
    }

    /// Validate the entire configuration.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.libreoffice.validate()?;
        Ok(())
    }
}

/// One candidate input file, with its derived output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    /// Source file name (no directory component).
    pub source_name: String,

    /// Target file name: source base name with the extension replaced by `.pdf`.
    pub target_name: String,
}

impl ConversionTask {
    /// Create a task from a source file name.
    pub fn new(source_name: impl Into<String>) -> Self {
        let source_name = source_name.into();
        let target_name = Path::new(&source_name)
            .with_extension("pdf")
            .to_string_lossy()
            .into_owned();
        Self {
            source_name,
            target_name,
        }
    }
}

/// Outcome of attempting one conversion task.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Source file name.
    pub source_name: String,

    /// Target file name.
    pub target_name: String,

    /// Whether the conversion succeeded.
    pub success: bool,

    /// Error message, present iff `success` is false.
    pub error: Option<String>,
}

impl ConversionResult {
    /// Record a successful conversion.
    pub fn success(task: &ConversionTask) -> Self {
        Self {
            source_name: task.source_name.clone(),
            target_name: task.target_name.clone(),
            success: true,
            error: None,
        }
    }

    /// Record a failed conversion with its error message.
    pub fn failure(task: &ConversionTask, message: impl Into<String>) -> Self {
        Self {
            source_name: task.source_name.clone(),
            target_name: task.target_name.clone(),
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Summary of a completed batch run.
///
/// Holds one [`ConversionResult`] per attempted file, in processing order.
/// Counts are derived on demand.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    results: Vec<ConversionResult>,
}

impl BatchReport {
    /// Build a report from an ordered result sequence.
    pub fn new(results: Vec<ConversionResult>) -> Self {
        Self { results }
    }

    /// All results, in processing order.
    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    /// Total number of files attempted.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of successful conversions.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Number of failed conversions.
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }

    /// Failed results, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Conversion Summary ---")?;
        writeln!(f, "Total files processed: {}", self.total())?;
        writeln!(f, "Successfully converted: {}", self.succeeded())?;
        writeln!(f, "Failed conversions: {}", self.failed())?;

        if self.failed() > 0 {
            writeln!(f)?;
            writeln!(f, "Failed conversions:")?;
            for result in self.failures() {
                let message = result.error.as_deref().unwrap_or("unknown error");
                writeln!(f, " - {} : {}", result.source_name, message)?;
            }
        }
        Ok(())
    }
}
