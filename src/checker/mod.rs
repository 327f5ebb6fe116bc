pub mod tokenizer;

use crate::trie::Trie;
use crate::{CheckResult, Config, SpellError};
use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks text against the words stored in a trie
pub struct SpellChecker {
    trie: Trie,
    ignore_patterns: Vec<Regex>,
    case_sensitive: bool,
    max_suggestions: usize,
}

impl SpellChecker {
    pub fn new(trie: Trie, config: &Config) -> Self {
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => log::warn!("Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Self {
            trie,
            ignore_patterns,
            case_sensitive: config.case_sensitive,
            max_suggestions: config.max_suggestions,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn check_text(&self, content: &str) -> crate::error::Result<CheckResult> {
        let mut errors = Vec::new();

        for token in tokenizer::tokenize(content) {
            if self.should_ignore(&token.text) {
                continue;
            }

            let word = self.normalize(&token.text);
            if self.trie.search(&word) {
                continue;
            }

            let mut suggestions = self.trie.spelling_suggestions(&word)?;
            suggestions.truncate(self.max_suggestions);

            errors.push(SpellError {
                word: token.text,
                line: token.line,
                column: token.column,
                context: token.context,
                suggestions,
            });
        }

        Ok(CheckResult {
            error_count: errors.len(),
            errors,
        })
    }

    pub fn check_file(&self, path: &Path) -> Result<CheckResult> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        self.check_text(&content)
            .with_context(|| format!("Failed to check file: {}", path.display()))
    }

    /// Check files in parallel. Results keep the order of `paths`.
    pub fn check_files(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<CheckResult>)> {
        paths
            .par_iter()
            .map(|path| (path.clone(), self.check_file(path)))
            .collect()
    }

    fn normalize(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }

    fn should_ignore(&self, word: &str) -> bool {
        // Skip single characters
        if word.chars().count() <= 1 {
            return true;
        }

        // Skip all numbers
        if word.chars().all(|c| c.is_numeric()) {
            return true;
        }

        self.ignore_patterns.iter().any(|pattern| pattern.is_match(word))
    }
}
