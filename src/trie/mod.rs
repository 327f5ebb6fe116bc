pub mod node;
pub mod render;
pub mod suggestions;

pub use node::Node;
pub use render::TreeDump;
pub use suggestions::{edit_distance, MAX_EDIT_DISTANCE};

/// Result of removing a word from the trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The word was removed and its now-useless nodes were pruned
    Pruned,
    /// The word was removed but its last node stays, because other words
    /// continue through it (or it is the root)
    KeptAsPrefix,
    /// The word was not stored; nothing changed
    NotFound,
}

/// Intermediate state passed back up the stack while deleting
enum Removal {
    Absent,
    Kept,
    /// Something below was removed, this node stays
    Pruned,
    /// This node may be removed by its parent
    Prunable,
}

/// Prefix tree of words, compared character by character.
///
/// Deletion, enumeration and drop recurse once per character of the
/// longest stored word, so stack use grows with word length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
        }
    }

    /// Root of the node graph, representing the empty prefix
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a word. Returns `false` if it was already stored.
    ///
    /// Inserting the empty string marks the root terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_insert(c);
        }

        if current.terminal {
            return false;
        }

        current.terminal = true;
        self.len += 1;
        true
    }

    /// Check if the exact word is stored (not merely a prefix of one)
    pub fn search(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(Node::is_terminal)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Delete a word. Returns `true` if it was stored and is now gone.
    pub fn delete(&mut self, word: &str) -> bool {
        self.remove(word) != DeleteOutcome::NotFound
    }

    /// Delete a word, pruning every node on its path that no longer
    /// spells a word or leads to one.
    pub fn remove(&mut self, word: &str) -> DeleteOutcome {
        let chars: Vec<char> = word.chars().collect();

        let outcome = match remove_from(&mut self.root, &chars) {
            Removal::Absent => DeleteOutcome::NotFound,
            Removal::Kept => DeleteOutcome::KeptAsPrefix,
            // The root itself is never removed
            Removal::Prunable if chars.is_empty() => DeleteOutcome::KeptAsPrefix,
            Removal::Pruned | Removal::Prunable => DeleteOutcome::Pruned,
        };

        if outcome != DeleteOutcome::NotFound {
            self.len -= 1;
        }
        outcome
    }

    /// All stored words starting with `prefix`, in lexicographic order.
    ///
    /// An unknown prefix yields no completions. The empty prefix yields
    /// every word.
    pub fn auto_suggest(&self, prefix: &str) -> Vec<String> {
        match self.find_node(prefix) {
            Some(node) => words_with_prefix(node, prefix),
            None => Vec::new(),
        }
    }

    /// Every stored word in lexicographic order
    pub fn all_words(&self) -> Vec<String> {
        words_with_prefix(&self.root, "")
    }

    /// Diagnostic rendering of the node graph
    pub fn dump(&self) -> TreeDump<'_> {
        TreeDump::new(self)
    }

    fn find_node(&self, prefix: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in prefix.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }
}

fn remove_from(node: &mut Node, word: &[char]) -> Removal {
    let Some((&c, rest)) = word.split_first() else {
        if !node.terminal {
            return Removal::Absent;
        }
        node.terminal = false;
        return if node.is_leaf() {
            Removal::Prunable
        } else {
            Removal::Kept
        };
    };

    let Some(child) = node.children.get_mut(&c) else {
        return Removal::Absent;
    };

    match remove_from(child, rest) {
        Removal::Prunable => {
            node.children.remove(&c);
            log::debug!("pruned node '{}'", c);
            if node.is_prunable() {
                Removal::Prunable
            } else {
                Removal::Pruned
            }
        }
        other => other,
    }
}

/// Depth-first collection of every terminal node below `start`, each
/// spelled as `prefix` followed by the path from `start`.
pub(crate) fn words_with_prefix(start: &Node, prefix: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = prefix.to_string();
    collect_words(start, &mut current, &mut words);
    words
}

fn collect_words(node: &Node, current: &mut String, words: &mut Vec<String>) {
    if node.is_terminal() {
        words.push(current.clone());
    }

    for child in node.children() {
        if let Some(c) = child.character() {
            current.push(c);
            collect_words(child, current, words);
            current.pop();
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
