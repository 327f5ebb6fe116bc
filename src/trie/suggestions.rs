use crate::error::{Result, TrieError};
use crate::trie::{words_with_prefix, Trie};

/// Candidates farther than this from the query are not suggested
pub const MAX_EDIT_DISTANCE: usize = 2;

impl Trie {
    /// Words within `MAX_EDIT_DISTANCE` of `word` that share its first
    /// character, in lexicographic order.
    ///
    /// Fails with `InvalidArgument` on an empty word.
    pub fn spelling_suggestions(&self, word: &str) -> Result<Vec<String>> {
        let first = word.chars().next().ok_or_else(|| {
            TrieError::InvalidArgument("cannot suggest spellings for an empty word".to_string())
        })?;

        let Some(start) = self.root().child(first) else {
            return Ok(Vec::new());
        };

        let candidates = words_with_prefix(start, &first.to_string());

        Ok(candidates
            .into_iter()
            .filter(|candidate| edit_distance(word, candidate) <= MAX_EDIT_DISTANCE)
            .collect())
    }
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate() {
        *item = j;
    }

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);

            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[a_len][b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_exact_match_only() {
        let trie: Trie = ["catastrophe", "cat", "caterpillar"].into_iter().collect();
        assert_eq!(
            trie.spelling_suggestions("caterpillar").unwrap(),
            vec!["caterpillar"]
        );
    }

    #[test]
    fn test_suggestions_within_threshold() {
        let trie: Trie = ["hello", "help", "hold", "world", "jello"].into_iter().collect();
        // "jello" is one edit away but starts with a different character
        assert_eq!(
            trie.spelling_suggestions("helo").unwrap(),
            vec!["hello", "help", "hold"]
        );
    }

    #[test]
    fn test_unknown_first_character() {
        let trie: Trie = ["apple"].into_iter().collect();
        assert!(trie.spelling_suggestions("zebra").unwrap().is_empty());
        assert!(Trie::new().spelling_suggestions("a").unwrap().is_empty());
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let trie: Trie = ["apple"].into_iter().collect();
        assert!(matches!(
            trie.spelling_suggestions(""),
            Err(TrieError::InvalidArgument(_))
        ));
    }
}
