use std::collections::BTreeMap;

/// A single character position along one or more stored words.
///
/// Children are kept in a `BTreeMap` so that iteration is always in
/// ascending character order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    character: Option<char>,
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) terminal: bool,
}

impl Node {
    /// The root node, which carries no character
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// Character this node represents (`None` for the root)
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// True if a stored word ends exactly at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Children in ascending character order
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node that spells no word and leads nowhere
    pub(crate) fn is_prunable(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// Returns the child for `c`, creating it if absent
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_insert_with(|| Node::new(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_character() {
        let root = Node::root();
        assert_eq!(root.character(), None);
        assert!(!root.is_terminal());
        assert!(root.is_leaf());
    }

    #[test]
    fn test_child_or_insert_reuses_existing() {
        let mut root = Node::root();
        root.child_or_insert('a').terminal = true;
        let child = root.child_or_insert('a');
        assert!(child.is_terminal());
        assert_eq!(child.character(), Some('a'));
        assert_eq!(root.children().len(), 1);
        assert!(root.has_child('a'));
        assert!(!root.has_child('b'));
    }

    #[test]
    fn test_children_are_ordered() {
        let mut root = Node::root();
        for c in ['z', 'b', 'm', 'a'] {
            root.child_or_insert(c);
        }
        let chars: Vec<_> = root.children().filter_map(Node::character).collect();
        assert_eq!(chars, vec!['a', 'b', 'm', 'z']);
    }
}
