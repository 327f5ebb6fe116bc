pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;
pub mod trie;

pub use checker::SpellChecker;
pub use config::Config;
pub use error::{Result, TrieError};
pub use trie::{edit_distance, DeleteOutcome, Node, TreeDump, Trie};

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub error_count: usize,
    pub errors: Vec<SpellError>,
}

#[derive(Debug, Clone)]
pub struct SpellError {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestions: Vec<String>,
}
