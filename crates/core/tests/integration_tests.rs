//! Integration tests for word-to-pdf-core.
//!
//! These drive the public API end to end with a scripted renderer. The
//! LibreOffice session tests are skipped when no installation is found.
//!
//! Run with: cargo test --package word-to-pdf-core --test integration_tests

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;
use word_to_pdf_core::{
    BatchConverter, ConversionError, DocumentRenderer, LibreOfficeConfig, LibreOfficeSession,
    Result,
};

/// Renderer that fails on file names containing "bad" and writes a stub
/// PDF otherwise.
struct StubRenderer {
    calls: Rc<RefCell<Vec<String>>>,
}

impl StubRenderer {
    fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl DocumentRenderer for StubRenderer {
    fn render(&self, source: &Path, target: &Path) -> Result<()> {
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .to_string();
        self.calls.borrow_mut().push(name.clone());

        if name.contains("bad") {
            return Err(ConversionError::ConversionFailed {
                path: source.to_path_buf(),
                message: "corrupt file".to_string(),
            });
        }
        std::fs::write(target, b"%PDF-1.4").unwrap();
        Ok(())
    }
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"contents").unwrap();
}

/// Check if LibreOffice is available
fn libreoffice_available() -> bool {
    which::which("soffice").is_ok()
}

// ============================================================================
// Batch Conversion Tests
// ============================================================================

#[test]
fn test_batch_over_mixed_directory() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    touch(source.path(), "good.docx");
    touch(source.path(), "bad.doc");
    touch(source.path(), "notes.txt");

    let (renderer, calls) = StubRenderer::new();
    let mut converter = BatchConverter::new(source.path(), target.path(), Box::new(renderer));

    let report = converter.convert_all().unwrap();
    converter.shutdown();

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(calls.borrow().len(), 2);
    assert!(!calls.borrow().contains(&"notes.txt".to_string()));

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.source_name, "bad.doc");
    assert_eq!(failure.target_name, "bad.pdf");
    assert!(failure.error.as_deref().unwrap().contains("corrupt file"));

    assert!(target.path().join("good.pdf").exists());
    assert!(!target.path().join("bad.pdf").exists());
}

#[test]
fn test_batch_can_run_twice_on_same_directories() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    touch(source.path(), "a.docx");

    let (renderer, calls) = StubRenderer::new();
    let converter = BatchConverter::new(source.path(), target.path(), Box::new(renderer));

    let first = converter.convert_all().unwrap();
    let second = converter.convert_all().unwrap();

    assert_eq!(first.total(), 1);
    assert_eq!(second.total(), 1);
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn test_report_display_matches_console_contract() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    touch(source.path(), "a.docx");
    touch(source.path(), "bad.docx");

    let (renderer, _) = StubRenderer::new();
    let converter = BatchConverter::new(source.path(), target.path(), Box::new(renderer));

    let report = converter.convert_all().unwrap();
    let text = format!("{report}");

    assert!(text.contains("--- Conversion Summary ---"));
    assert!(text.contains("Total files processed: 2"));
    assert!(text.contains("Successfully converted: 1"));
    assert!(text.contains("Failed conversions: 1"));
    assert!(text.contains("bad.docx"));
}

#[test]
fn test_missing_source_directory() {
    let target = TempDir::new().unwrap();

    let (renderer, calls) = StubRenderer::new();
    let converter = BatchConverter::new("/no/such/source", target.path(), Box::new(renderer));

    assert!(matches!(
        converter.convert_all(),
        Err(ConversionError::SourceDirNotFound(_))
    ));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_source_with_no_eligible_files() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    touch(source.path(), "spreadsheet.xlsx");

    let (renderer, calls) = StubRenderer::new();
    let converter = BatchConverter::new(source.path(), target.path(), Box::new(renderer));

    let report = converter.convert_all().unwrap();

    assert_eq!(report.total(), 0);
    assert!(calls.borrow().is_empty());
}

// ============================================================================
// LibreOffice Session Tests
// ============================================================================

#[test]
fn test_libreoffice_session_creation() {
    if !libreoffice_available() {
        eprintln!("Skipping test: LibreOffice not found");
        return;
    }

    let session = LibreOfficeSession::new(LibreOfficeConfig::default());
    assert!(
        session.is_ok(),
        "Session creation should succeed: {:?}",
        session.err()
    );
}

#[test]
fn test_libreoffice_session_not_found_error() {
    let config = LibreOfficeConfig::default().soffice_path("/nonexistent/soffice".into());
    let session = LibreOfficeSession::new(config);
    assert!(matches!(session, Err(ConversionError::LibreOfficeNotFound)));
}
