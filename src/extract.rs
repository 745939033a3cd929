//! PDF text and metadata extraction.
//!
//! The pipeline's only binary-format dependency: given a file path, load
//! the document with `lopdf` and return the resolved title plus the
//! concatenated text of every page. Extraction is all-or-nothing per file:
//! a failed file yields an [`ExtractError`] and no partial record.

use std::path::Path;

use lopdf::{Document, Object};

/// Extraction error. The pipeline logs the cause and skips the file.
#[derive(Debug)]
pub enum ExtractError {
    /// The file could not be loaded or parsed as a PDF.
    Open(String),
    /// A page's content stream could not be parsed.
    Page(u32, String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Open(e) => write!(f, "failed to open PDF: {}", e),
            ExtractError::Page(n, e) => write!(f, "failed to extract page {}: {}", n, e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// A successful extraction: resolved title plus full document text.
///
/// An explicit success type so a failure can never be mistaken for a
/// valid-but-empty document.
#[derive(Debug, Clone)]
pub struct Extracted {
    /// Info-dictionary `/Title` when present and non-empty after trimming,
    /// otherwise the file's name (including extension).
    pub title: String,
    /// Concatenated text of every page, in page order. A page with no text
    /// contributes an empty string.
    pub text: String,
}

/// Extract title and text from the PDF at `path`. Read-only.
pub fn extract(path: &Path) -> Result<Extracted, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::Open(e.to_string()))?;

    let title = metadata_title(&doc).unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    });

    let mut text = String::new();
    for (page_num, _) in doc.get_pages() {
        let page_text = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractError::Page(page_num, e.to_string()))?;
        text.push_str(&page_text);
    }

    Ok(Extracted { title, text })
}

/// Read the trailer `Info` dictionary's `/Title`, trimmed.
///
/// Returns `None` when the entry is absent, unreadable, or empty after
/// trimming, so the caller falls back to the file name.
fn metadata_title(doc: &Document) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?;
    let dict = match info {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok()?,
        other => other.as_dict().ok()?,
    };
    let raw = dict.get(b"Title").ok()?.as_str().ok()?;
    let title = String::from_utf8_lossy(raw);
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
