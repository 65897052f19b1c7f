//! Reads input documents from disk and normalizes them to plain text.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::errors::AppError;

/// Reads a document and returns its sections in document order.
///
/// Markdown and plain-text files carry a single section. Markup is left
/// untouched so separator lines survive for segmentation.
pub async fn load_sections(path: &Path) -> Result<Vec<String>, AppError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "md" | "markdown" | "txt" => {
            let raw = fs::read_to_string(path)
                .await
                .map_err(|source| AppError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
            debug!("Loaded {:?} ({} bytes)", path, raw.len());
            Ok(vec![normalize(&raw)])
        }
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Loads a document as one plain-text string.
pub async fn load_text(path: &Path) -> Result<String, AppError> {
    let sections = load_sections(path).await?;
    Ok(join_sections(&sections))
}

/// Concatenates sections in order, separated by a single space.
pub fn join_sections(sections: &[String]) -> String {
    sections.join(" ")
}

fn normalize(raw: &str) -> String {
    raw.strip_prefix('\u{feff}')
        .unwrap_or(raw)
        .replace("\r\n", "\n")
}
