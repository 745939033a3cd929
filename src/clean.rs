//! Whitespace normalization for extracted text.
//!
//! PDF extraction yields hard line breaks, tabs, and repeated spaces;
//! abstracts should read as one flowed line. [`clean_text`] collapses every
//! run of whitespace into a single space and trims the ends.

/// Normalize whitespace. Absent input maps to the empty string.
pub fn clean_text(text: Option<&str>) -> String {
    match text {
        Some(t) => t.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}
