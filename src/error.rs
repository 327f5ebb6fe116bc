use thiserror::Error;

/// Recoverable errors reported by trie queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, TrieError>;
