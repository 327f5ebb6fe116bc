use unicode_segmentation::UnicodeSegmentation;

/// A word found in checked text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
    /// 1-indexed, counted in characters
    pub column: usize,
    pub context: String,
}

/// Extract words from `content` with their 1-indexed positions.
///
/// Compound identifiers are split into their parts, all reported at the
/// column of the compound word.
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        for (offset, word) in line.unicode_word_indices() {
            let column = line[..offset].chars().count() + 1;
            for part in split_compound_word(word) {
                tokens.push(Token {
                    text: part,
                    line: line_idx + 1,
                    column,
                    context: line.trim().to_string(),
                });
            }
        }
    }

    tokens
}

pub fn split_compound_word(word: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && current.chars().last().is_some_and(char::is_lowercase) {
            result.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        result.push(current);
    }

    if result.is_empty() {
        vec![word.to_string()]
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_splitting() {
        assert_eq!(split_compound_word("camelCase"), vec!["camel", "Case"]);
        assert_eq!(split_compound_word("snake_case"), vec!["snake", "case"]);
        assert_eq!(split_compound_word("HTTP"), vec!["HTTP"]);
        assert_eq!(split_compound_word("plain"), vec!["plain"]);
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("hello world\n  café au lait");
        let positions: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.line, t.column))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("hello", 1, 1),
                ("world", 1, 7),
                ("café", 2, 3),
                ("au", 2, 8),
                ("lait", 2, 11),
            ]
        );
        assert_eq!(tokens[2].context, "café au lait");
    }

    #[test]
    fn test_tokenize_skips_punctuation() {
        let tokens = tokenize("Hi, there! (ok)");
        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Hi", "there", "ok"]);
    }
}
