use triedict::{DeleteOutcome, Node, Trie, TrieError};

/// Every reachable non-root node must spell a word or lead to one
fn assert_no_dead_nodes(trie: &Trie) {
    fn walk(node: &Node, path: &mut String) {
        for child in node.children() {
            let c = child.character().expect("non-root nodes carry a character");
            path.push(c);
            assert!(
                child.is_terminal() || !child.is_leaf(),
                "dead node left at '{}'",
                path
            );
            walk(child, path);
            path.pop();
        }
    }
    walk(trie.root(), &mut String::new());
}

const WORDS: &[&str] = &[
    "a", "an", "and", "ant", "anthem", "art", "car", "card", "care", "careful", "cart", "zoo",
];

#[test]
fn insert_then_search() {
    let mut trie = Trie::new();
    for word in WORDS {
        assert!(trie.insert(word), "{} should be new", word);
        assert!(trie.search(word));
    }
    assert_eq!(trie.len(), WORDS.len());
    assert!(!trie.search("ca"));
    assert!(!trie.search("anthems"));
}

#[test]
fn delete_prefix_keeps_longer_word() {
    let mut trie = Trie::new();
    trie.insert("hello");
    trie.insert("hell");
    assert!(trie.delete("hell"));
    assert!(!trie.search("hell"));
    assert!(trie.search("hello"));
    assert_no_dead_nodes(&trie);
}

#[test]
fn delete_absent_word_is_noop() {
    let mut trie = Trie::new();
    trie.insert("hello");
    let before = trie.clone();
    assert!(!trie.delete("world"));
    assert_eq!(trie, before);
    assert!(trie.search("hello"));
    assert!(!trie.search("world"));
}

#[test]
fn delete_is_idempotent() {
    let mut trie: Trie = WORDS.iter().collect();
    assert_eq!(trie.remove("care"), DeleteOutcome::KeptAsPrefix);
    let after_first = trie.clone();
    assert_eq!(trie.remove("care"), DeleteOutcome::NotFound);
    assert_eq!(trie, after_first);
}

#[test]
fn pruning_after_every_delete() {
    let mut trie: Trie = WORDS.iter().collect();
    let order = [
        "careful", "an", "anthem", "zoo", "a", "cart", "car", "ant", "care", "and", "card", "art",
    ];

    for (i, word) in order.iter().enumerate() {
        assert!(trie.delete(word), "{} should be deletable", word);
        assert!(!trie.search(word));
        assert_no_dead_nodes(&trie);

        for remaining in &order[i + 1..] {
            assert!(trie.search(remaining), "{} lost after deleting {}", remaining, word);
        }
    }

    assert!(trie.is_empty());
    assert!(trie.root().is_leaf());
}

#[test]
fn auto_suggest_ordering() {
    let trie: Trie = ["catastrophe", "catatonic", "caterpillar"].into_iter().collect();
    assert_eq!(
        trie.auto_suggest("cat"),
        vec!["catastrophe", "catatonic", "caterpillar"]
    );
    assert!(trie.auto_suggest("dog").is_empty());
    assert!(trie.auto_suggest("cats").is_empty());
}

#[test]
fn all_words_reflects_deletes() {
    let mut trie: Trie = WORDS.iter().collect();
    trie.delete("ant");
    trie.delete("car");
    let expected: Vec<_> = WORDS
        .iter()
        .filter(|w| **w != "ant" && **w != "car")
        .map(|w| w.to_string())
        .collect();
    assert_eq!(trie.all_words(), expected);
}

#[test]
fn spelling_suggestions_threshold() {
    let trie: Trie = ["catastrophe", "cat", "caterpillar"].into_iter().collect();
    assert_eq!(
        trie.spelling_suggestions("caterpillar").unwrap(),
        vec!["caterpillar"]
    );
    assert_eq!(trie.spelling_suggestions("car").unwrap(), vec!["cat"]);
    assert!(trie.spelling_suggestions("dog").unwrap().is_empty());
    assert_eq!(
        trie.spelling_suggestions(""),
        Err(TrieError::InvalidArgument(
            "cannot suggest spellings for an empty word".to_string()
        ))
    );
}

#[test]
fn tree_dump_after_delete() {
    let mut trie: Trie = ["car", "cat"].into_iter().collect();
    trie.delete("cat");
    assert_eq!(trie.dump().to_string(), "root\n└─c\n  └─a\n    └─r*\n");
}

#[test]
fn long_word_round_trip() {
    let word = "ab".repeat(1_000);
    let mut trie = Trie::new();
    assert!(trie.insert(&word));
    assert!(trie.search(&word));
    assert_eq!(trie.auto_suggest("abab"), vec![word.clone()]);
    assert_eq!(trie.remove(&word), DeleteOutcome::Pruned);
    assert!(trie.root().is_leaf());
}
