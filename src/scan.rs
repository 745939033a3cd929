use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::config::InputConfig;
use crate::models::PdfFile;

/// Scan the input root for PDF files.
///
/// Only entries matching the include globs (default `*.pdf`) survive, minus
/// any exclusions. Results are sorted lexicographically by relative path so
/// repeated runs see the same order regardless of what the filesystem
/// listing yields.
pub fn scan_pdfs(input: &InputConfig) -> Result<Vec<PdfFile>> {
    let root = &input.root;
    if !root.exists() {
        bail!("input directory does not exist: {}", root.display());
    }

    let include_set = build_globset(&input.include_globs)?;
    let exclude_set = build_globset(&input.exclude_globs)?;

    let mut walker = WalkDir::new(root).follow_links(input.follow_symlinks);
    if !input.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(PdfFile {
            name: rel_str,
            path: path.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn input_for(root: &std::path::Path) -> InputConfig {
        InputConfig {
            root: root.to_path_buf(),
            ..InputConfig::default()
        }
    }

    #[test]
    fn only_pdf_names_are_considered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pdf"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("b.pdf"), b"").unwrap();

        let files = scan_pdfs(&input_for(dir.path())).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn order_is_lexicographic() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zeta.pdf"), b"").unwrap();
        fs::write(dir.path().join("alpha.pdf"), b"").unwrap();
        fs::write(dir.path().join("mid.pdf"), b"").unwrap();

        let files = scan_pdfs(&input_for(dir.path())).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.pdf", "mid.pdf", "zeta.pdf"]);
    }

    #[test]
    fn flat_scan_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("top.pdf"), b"").unwrap();
        fs::write(dir.path().join("nested").join("deep.pdf"), b"").unwrap();

        let files = scan_pdfs(&input_for(dir.path())).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["top.pdf"]);
    }

    #[test]
    fn recursive_scan_descends() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("top.pdf"), b"").unwrap();
        fs::write(dir.path().join("nested").join("deep.pdf"), b"").unwrap();

        let mut input = input_for(dir.path());
        input.recursive = true;
        let files = scan_pdfs(&input).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn missing_root_is_an_error() {
        let input = input_for(std::path::Path::new("/nonexistent/pdfs"));
        assert!(scan_pdfs(&input).is_err());
    }
}
