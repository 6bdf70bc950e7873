//! Command-line batch Word to PDF converter.
//!
//! Takes a source and a target directory (prompting for either if
//! omitted), converts every Word document it finds, and prints a
//! per-batch summary. Conversion failures are reported in the summary;
//! the process exits 0 either way.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use word_to_pdf_core::{create_renderer, BatchConverter, ConverterConfig, RendererKind};

#[derive(Parser, Debug)]
#[command(name = "word-to-pdf", about = "Convert Word documents in a directory to PDF files")]
struct Args {
    /// Source directory containing Word files
    source_dir: Option<String>,

    /// Target directory for PDF output
    target_dir: Option<String>,

    /// Conversion engine to use
    #[arg(long, value_enum, default_value = "library")]
    renderer: RendererArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RendererArg {
    /// In-process pure-Rust DOCX renderer
    Library,
    /// External LibreOffice installation (also handles legacy .doc)
    Libreoffice,
}

impl From<RendererArg> for RendererKind {
    fn from(arg: RendererArg) -> Self {
        match arg {
            RendererArg::Library => RendererKind::Library,
            RendererArg::Libreoffice => RendererKind::LibreOffice,
        }
    }
}

/// Strip surrounding whitespace and quote characters from a pasted path.
fn sanitize_path(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

/// Read one line from stdin after printing a prompt.
fn prompt(message: &str) -> Result<String> {
    println!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn resolve_dir(arg: Option<String>, prompt_message: &str) -> Result<PathBuf> {
    let raw = match arg {
        Some(value) => value,
        None => prompt(prompt_message)?,
    };
    Ok(PathBuf::from(sanitize_path(&raw)))
}

fn main() -> Result<()> {
    word_to_pdf_core::init_logging();
    let args = Args::parse();

    let source_dir = resolve_dir(
        args.source_dir,
        "Enter the source directory path (containing Word files):",
    )?;
    let target_dir = resolve_dir(
        args.target_dir,
        "Enter the target directory path (for PDF output):",
    )?;

    println!("Source directory: {}", source_dir.display());
    println!("Target directory: {}", target_dir.display());

    let config = ConverterConfig::new(args.renderer.into());
    let renderer = match create_renderer(&config) {
        Ok(renderer) => renderer,
        Err(e) => {
            // Session startup failure: nothing can be converted.
            eprintln!("Error: {e}");
            return Ok(());
        }
    };

    let mut converter = BatchConverter::new(source_dir, target_dir, renderer);
    match converter.convert_all() {
        Ok(report) => {
            println!();
            print!("{report}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }
    converter.shutdown();

    Ok(())
}
