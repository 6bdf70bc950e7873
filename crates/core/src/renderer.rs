//! The single-file rendering seam.
//!
//! [`BatchConverter`](crate::converter::BatchConverter) drives one
//! [`DocumentRenderer`] for a whole batch. Two realizations exist: the
//! in-process [`DocxRenderer`] defined here, and the external
//! [`LibreOfficeSession`](crate::office::LibreOfficeSession).

use crate::config::{ConverterConfig, RendererKind};
use crate::error::{ConversionError, Result};
use crate::office::LibreOfficeSession;
use std::path::Path;

/// Converts one Word document into one PDF file.
pub trait DocumentRenderer {
    /// Render `source` into a PDF at `target`.
    ///
    /// Any error is scoped to this single file; callers record it and move on.
    fn render(&self, source: &Path, target: &Path) -> Result<()>;

    /// Release any session state held by the renderer.
    ///
    /// Called once after the batch, on success and failure paths alike.
    /// Stateless renderers need not override this.
    fn shutdown(&mut self) {}
}

/// In-process renderer backed by the pure-Rust docxside-pdf engine.
///
/// Handles `.docx` only; legacy `.doc` files need the LibreOffice renderer.
#[derive(Debug, Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    /// Create a new in-process renderer.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for DocxRenderer {
    fn render(&self, source: &Path, target: &Path) -> Result<()> {
        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if !extension.eq_ignore_ascii_case("docx") {
            return Err(ConversionError::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }

        docxside_pdf::convert_docx_to_pdf(source, target).map_err(|e| {
            ConversionError::ConversionFailed {
                path: source.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}

/// Build the renderer selected by the configuration.
///
/// Session startup failure (LibreOffice missing, profile directory not
/// creatable) surfaces here and is fatal to the batch.
pub fn create_renderer(config: &ConverterConfig) -> Result<Box<dyn DocumentRenderer>> {
    config.validate()?;
    match config.renderer {
        RendererKind::Library => Ok(Box::new(DocxRenderer::new())),
        RendererKind::LibreOffice => Ok(Box::new(LibreOfficeSession::new(
            config.libreoffice.clone(),
        )?)),
    }
}
