use crate::trie::{Node, Trie};
use std::fmt;

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const TERMINAL_MARK: char = '*';

/// Indented rendering of a trie's node graph, one node per line.
///
/// Children appear in ascending character order and nodes where a word
/// ends are suffixed with `*`:
///
/// ```text
/// root
/// ├─a
/// │ └─t*
/// └─o
///   └─x*
/// ```
pub struct TreeDump<'a> {
    trie: &'a Trie,
}

impl<'a> TreeDump<'a> {
    pub fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.trie.root();
        writeln!(f, "root{}", marker(root))?;
        write_children(f, root, "")
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, node: &Node, indent: &str) -> fmt::Result {
    let count = node.children().len();

    for (i, child) in node.children().enumerate() {
        let is_last = i + 1 == count;
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        let label = child.character().unwrap_or(' ');

        writeln!(f, "{}{}{}{}", indent, branch, label, marker(child))?;

        let child_indent = format!("{}{}", indent, if is_last { "  " } else { "│ " });
        write_children(f, child, &child_indent)?;
    }

    Ok(())
}

fn marker(node: &Node) -> String {
    if node.is_terminal() {
        TERMINAL_MARK.to_string()
    } else {
        String::new()
    }
}
