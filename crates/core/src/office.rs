//! LibreOffice session for external document conversion.
//!
//! This module drives a LibreOffice installation as the conversion engine.
//! A session owns a dedicated user profile directory and lives for a whole
//! batch: opened once before the first file, used for each file in turn,
//! and torn down once after the last file.

use crate::config::LibreOfficeConfig;
use crate::error::{ConversionError, Result};
use crate::renderer::DocumentRenderer;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info, warn};

/// A stateful handle to an external LibreOffice conversion engine.
///
/// Construction locates the `soffice` binary and creates the session
/// profile; both failures are fatal to the batch, since no file can be
/// converted without them. Per-file conversion runs `soffice` one-shot
/// with `--convert-to pdf`, so a crash on one document cannot poison the
/// session for the next.
pub struct LibreOfficeSession {
    /// Session configuration.
    config: LibreOfficeConfig,
    /// Resolved path to the soffice binary.
    soffice_path: PathBuf,
    /// Dedicated user profile directory. None after shutdown.
    profile_dir: Option<TempDir>,
}

impl std::fmt::Debug for LibreOfficeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreOfficeSession")
            .field("soffice_path", &self.soffice_path)
            .field("profile_dir", &self.profile_dir.as_ref().map(TempDir::path))
            .finish()
    }
}

impl LibreOfficeSession {
    /// Open a new session.
    pub fn new(config: LibreOfficeConfig) -> Result<Self> {
        config.validate()?;

        let soffice_path = Self::find_soffice(&config)?;
        info!("Found LibreOffice at: {:?}", soffice_path);

        let profile_dir = TempDir::with_prefix("word-to-pdf-profile-")
            .map_err(ConversionError::ProcessStartFailed)?;
        debug!("Session profile at {:?}", profile_dir.path());

        Ok(Self {
            config,
            soffice_path,
            profile_dir: Some(profile_dir),
        })
    }

    /// Find the soffice binary.
    fn find_soffice(config: &LibreOfficeConfig) -> Result<PathBuf> {
        // Check if explicit path is provided
        if let Some(ref path) = config.soffice_path {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(ConversionError::LibreOfficeNotFound);
        }

        // Search common locations
        let candidates = [
            // macOS
            "/Applications/LibreOffice.app/Contents/MacOS/soffice",
            // Linux
            "/usr/bin/soffice",
            "/usr/lib/libreoffice/program/soffice",
            "/opt/libreoffice/program/soffice",
            // Snap (Ubuntu)
            "/snap/bin/libreoffice.soffice",
        ];

        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }

        // Try PATH
        which::which("soffice")
            .or_else(|_| which::which("libreoffice"))
            .map_err(|_| ConversionError::LibreOfficeNotFound)
    }
}

impl DocumentRenderer for LibreOfficeSession {
    fn render(&self, source: &Path, target: &Path) -> Result<()> {
        let profile_dir = self
            .profile_dir
            .as_ref()
            .ok_or(ConversionError::SessionClosed)?;

        let out_dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut cmd = Command::new(&self.soffice_path);
        if !self.config.visible {
            cmd.args(["--headless", "--invisible"]);
        }
        cmd.args(["--nologo", "--nofirststartwizard", "--norestore"]);
        cmd.arg(format!(
            "-env:UserInstallation=file://{}",
            profile_dir.path().display()
        ));
        cmd.arg("--convert-to")
            .arg(format!("pdf:{}", self.config.export_filter))
            .arg("--outdir")
            .arg(out_dir)
            .arg(source);

        debug!("Converting {:?} via {:?}", source.file_name(), self.soffice_path);
        let output = cmd.output().map_err(ConversionError::ProcessStartFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConversionError::ConversionFailed {
                path: source.to_path_buf(),
                message: stderr.trim().to_string(),
            });
        }

        // soffice names its output <stem>.pdf in the outdir. That matches the
        // requested target, but verify rather than trust the exit status.
        if !target.exists() {
            return Err(ConversionError::ConversionFailed {
                path: source.to_path_buf(),
                message: "PDF output file not found".to_string(),
            });
        }

        Ok(())
    }

    fn shutdown(&mut self) {
        if let Some(profile_dir) = self.profile_dir.take() {
            info!("Shutting down LibreOffice session");
            if let Err(e) = profile_dir.close() {
                // Teardown failure does not invalidate already-recorded results.
                warn!("Failed to remove session profile: {}", e);
            }
        }
    }
}
