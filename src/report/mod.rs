pub mod pdf;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use pdf::PdfReport;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What goes on the page.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub food_name: &'a str,
    pub protein_grams: f64,
    pub fat_grams: f64,
    pub advice: &'a str,
}

pub trait ReportRenderer: Send + Sync {
    fn render(&self, input: &ReportInput<'_>) -> Result<Vec<u8>, ReportError>;

    fn content_type(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;
}

pub fn write_report(path: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// File name for a downloaded report, e.g. `chicken-breast-report.pdf`.
pub fn report_file_name(food_name: &str, extension: &str) -> String {
    let mut slug = String::new();
    for c in food_name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "food" } else { slug };
    format!("{}-report.{}", slug, extension)
}
