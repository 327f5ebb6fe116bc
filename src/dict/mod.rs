pub mod wordlist;

pub use wordlist::{build_trie, load_file, load_str, LoadReport};
