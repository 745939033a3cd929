use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "abstract")]
    pub abstracts: AbstractConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            abstracts: AbstractConfig::default(),
            keywords: KeywordsConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// Directory scanned for PDF files.
    #[serde(default = "default_input_root")]
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    /// Descend into subdirectories. Off by default: the input is a flat
    /// drop directory.
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            root: default_input_root(),
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            recursive: false,
            follow_symlinks: false,
        }
    }
}

fn default_input_root() -> PathBuf {
    PathBuf::from("data/pdfs")
}

fn default_include_globs() -> Vec<String> {
    vec!["*.pdf".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Destination of the JSON artifact; fully overwritten each run.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Prefix for each document's `path` field, relative to the viewer.
    #[serde(default = "default_viewer_prefix")]
    pub viewer_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            viewer_prefix: default_viewer_prefix(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data/processed_data.json")
}

fn default_viewer_prefix() -> String {
    "../data/pdfs".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbstractConfig {
    /// Characters of raw text kept before cleaning.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    /// Abstract used when a document yields no text at all.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for AbstractConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_max_chars() -> usize {
    500
}

fn default_placeholder() -> String {
    "no abstract available".to_string()
}

/// Filename-based tagging rules, applied in order; first match wins.
#[derive(Debug, Deserialize, Clone)]
pub struct KeywordsConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<KeywordRule>,
    /// Tags for filenames no rule matches.
    #[serde(default = "default_tags")]
    pub default_tags: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            default_tags: default_tags(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct KeywordRule {
    /// Substrings matched against the lower-cased filename.
    pub contains: Vec<String>,
    pub tags: Vec<String>,
}

fn default_rules() -> Vec<KeywordRule> {
    vec![KeywordRule {
        contains: vec![
            "machine_learning".to_string(),
            "reinforcement_learning".to_string(),
        ],
        tags: vec![
            "machine learning".to_string(),
            "reinforcement learning".to_string(),
        ],
    }]
}

fn default_tags() -> Vec<String> {
    vec!["knowledge graph".to_string(), "AI".to_string()]
}

impl KeywordsConfig {
    /// Tag set for a filename: the first rule with a matching substring
    /// wins, otherwise the default set. Matching is case-insensitive.
    pub fn tags_for(&self, filename: &str) -> Vec<String> {
        let lower = filename.to_lowercase();
        for rule in &self.rules {
            if rule
                .contains
                .iter()
                .any(|needle| lower.contains(&needle.to_lowercase()))
            {
                return rule.tags.clone();
            }
        }
        self.default_tags.clone()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.abstracts.max_chars == 0 {
        anyhow::bail!("abstract.max_chars must be > 0");
    }

    if config.input.include_globs.is_empty() {
        anyhow::bail!("input.include_globs must not be empty");
    }

    for rule in &config.keywords.rules {
        if rule.contains.is_empty() {
            anyhow::bail!("keywords rule has an empty 'contains' list");
        }
        if rule.tags.is_empty() {
            anyhow::bail!("keywords rule has an empty 'tags' list");
        }
    }

    Ok(config)
}
