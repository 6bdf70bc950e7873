//! # word-to-pdf-core
//!
//! Batch conversion of Word documents to PDF files.
//!
//! This library scans a source directory for Word documents (`.doc`,
//! `.docx`), converts each one to a PDF in a target directory, and
//! collects per-file outcomes into an ordered report. A failing document
//! never aborts the batch. Two interchangeable rendering engines are
//! available:
//!
//! - **docxside-pdf** — in-process pure-Rust DOCX rendering
//! - **LibreOffice** — an external application session, covering `.doc`
//!   as well
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use word_to_pdf_core::{create_renderer, BatchConverter, ConverterConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConverterConfig::default();
//!     let renderer = create_renderer(&config)?;
//!
//!     let mut converter = BatchConverter::new("./docs", "./pdfs", renderer);
//!     let report = converter.convert_all()?;
//!     converter.shutdown();
//!
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Selecting the LibreOffice engine
//!
//! ```rust,no_run
//! use word_to_pdf_core::{create_renderer, ConverterConfig, RendererKind};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConverterConfig::new(RendererKind::LibreOffice);
//!     // Fails fast if no LibreOffice installation can be found.
//!     let renderer = create_renderer(&config)?;
//!     # let _ = renderer;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod office;
pub mod renderer;

// Re-export main types for convenience
pub use config::{
    BatchReport, ConversionResult, ConversionTask, ConverterConfig, LibreOfficeConfig,
    RendererKind,
};
pub use converter::BatchConverter;
pub use error::{ConversionError, Result};
pub use office::LibreOfficeSession;
pub use renderer::{create_renderer, DocumentRenderer, DocxRenderer};

/// Recognized Word document extensions.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["doc", "docx"];

/// Check if a file extension names a Word document.
pub fn is_word_document(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|&e| e.eq_ignore_ascii_case(ext))
}

/// Initialize the library's logging.
/// Call this once at application startup if you want to see logs.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
