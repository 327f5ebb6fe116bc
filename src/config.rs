use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".triedict.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Word lists loaded into the trie, one word per line
    pub word_lists: Vec<PathBuf>,
    pub ignore_patterns: Vec<String>,
    pub max_suggestions: usize,
    pub case_sensitive: bool,
}

/// One config file layer. Only keys present in the file override the
/// layers below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub word_lists: Option<Vec<PathBuf>>,
    pub ignore_patterns: Option<Vec<String>>,
    pub max_suggestions: Option<usize>,
    pub case_sensitive: Option<bool>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_lists: Vec::new(),
            ignore_patterns: vec![
                r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
            ],
            max_suggestions: default_max_suggestions(),
            case_sensitive: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(word_lists: Vec<PathBuf>, cli_patterns: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = ConfigFile::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = ConfigFile::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // CLI word lists replace configured ones
        if !word_lists.is_empty() {
            config.word_lists = word_lists;
        }
        if !cli_patterns.is_empty() {
            config.ignore_patterns.extend(cli_patterns);
        }

        log::debug!(
            "loaded config: {} word list(s), {} ignore pattern(s)",
            config.word_lists.len(),
            config.ignore_patterns.len()
        );

        Ok(config)
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(word_lists) = other.word_lists {
            self.word_lists = word_lists;
        }
        if let Some(ignore_patterns) = other.ignore_patterns {
            self.ignore_patterns = ignore_patterns;
        }
        if let Some(max_suggestions) = other.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        if let Some(case_sensitive) = other.case_sensitive {
            self.case_sensitive = case_sensitive;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "triedict").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
