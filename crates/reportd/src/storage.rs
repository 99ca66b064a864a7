//! Output directory persistence
//!
//! The output directory of flat, timestamp-named PDF files is the only
//! state this service keeps. There is no index beyond the filesystem's own
//! metadata.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata of one stored PDF file
#[derive(Debug, Clone, Serialize)]
pub struct PdfFileInfo {
    pub filename: String,
    pub size: u64,
    pub created: String,
    pub modified: String,
}

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Build a timestamped PDF filename with the given prefix
///
/// The stamp is the RFC3339 UTC timestamp with ':' and '.' replaced by '-'
/// so the name is safe on every filesystem.
pub fn timestamped_filename(prefix: &str) -> String {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{prefix}-{stamp}.pdf")
}

/// Persist a rendered document under the output directory
///
/// # Returns
/// The full path of the written file
pub fn write_pdf(dir: &Path, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(filename);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// List stored PDF files, most recently modified first
pub fn list_pdfs(dir: &Path) -> io::Result<Vec<PdfFileInfo>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().to_string();
        if !filename.ends_with(".pdf") {
            continue;
        }

        let metadata = entry.metadata()?;
        let modified = metadata.modified()?;
        // Not every filesystem reports a birth time; fall back to mtime
        let created = metadata.created().unwrap_or(modified);

        entries.push((
            modified,
            PdfFileInfo {
                filename,
                size: metadata.len(),
                created: to_rfc3339(created),
                modified: to_rfc3339(modified),
            },
        ));
    }

    entries.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(entries.into_iter().map(|(_, info)| info).collect())
}

fn to_rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_timestamped_filename_shape() {
        let filename = timestamped_filename("reporte");
        assert!(filename.starts_with("reporte-"));
        assert!(filename.ends_with(".pdf"));

        // The stamp itself carries no ':' or '.'
        let stamp = &filename["reporte-".len()..filename.len() - ".pdf".len()];
        assert!(!stamp.contains(':'));
        assert!(!stamp.contains('.'));
    }

    #[test]
    fn test_write_pdf_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out");

        let path = write_pdf(&nested, "a.pdf", b"%PDF-1.5").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"%PDF-1.5");
    }

    #[test]
    fn test_list_pdfs_sorted_by_mtime_descending() {
        let dir = TempDir::new().unwrap();
        for name in ["first.pdf", "second.pdf", "third.pdf"] {
            fs::write(dir.path().join(name), b"%PDF-1.5").unwrap();
            sleep(Duration::from_millis(20));
        }
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let files = list_pdfs(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["third.pdf", "second.pdf", "first.pdf"]);
    }

    #[test]
    fn test_list_pdfs_reports_size_and_timestamps() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.pdf"), b"%PDF-1.5").unwrap();

        let files = list_pdfs(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size, 8);
        assert!(files[0].modified.ends_with('Z'));
        assert!(files[0].created.ends_with('Z'));
    }

    #[test]
    fn test_list_pdfs_missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_pdfs(&missing).is_err());
    }
}
