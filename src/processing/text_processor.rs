//! Text utilities shared by the scorer and the report pipeline

use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Length of the stored report preview, in grapheme clusters.
pub const PREVIEW_LEN: usize = 600;

pub struct TextProcessor {
    token_split: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        // ASCII word class: everything else is a separator. Unicode letters
        // deliberately split tokens so that catalog matching stays exact.
        let token_split = Regex::new(r"[^0-9A-Za-z_]+").expect("Invalid token split regex");

        Self { token_split }
    }

    /// Split text into word tokens, dropping empty fragments.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token_split
            .split(text)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Distinct tokens of the text, for membership tests.
    pub fn token_set<'a>(&self, text: &'a str) -> HashSet<&'a str> {
        self.tokenize(text).into_iter().collect()
    }

    /// Truncate text to at most `max_graphemes` clusters without splitting a
    /// grapheme in half.
    pub fn preview(text: &str, max_graphemes: usize) -> String {
        text.graphemes(true).take(max_graphemes).collect()
    }

    /// Word count over Unicode word boundaries, for display only.
    pub fn word_count(text: &str) -> usize {
        text.unicode_words().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization_splits_on_punctuation() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("react, node.js / python!");

        assert_eq!(tokens, vec!["react", "node", "js", "python"]);
    }

    #[test]
    fn test_tokenization_keeps_underscores_and_digits() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("snake_case 2021 c99");

        assert_eq!(tokens, vec!["snake_case", "2021", "c99"]);
    }

    #[test]
    fn test_tokenization_empty_input() {
        let processor = TextProcessor::new();
        assert!(processor.tokenize("").is_empty());
        assert!(processor.tokenize("---").is_empty());
    }

    #[test]
    fn test_token_set_membership() {
        let processor = TextProcessor::new();
        let set = processor.token_set("docker docker aws");

        assert_eq!(set.len(), 2);
        assert!(set.contains("docker"));
        assert!(set.contains("aws"));
    }

    #[test]
    fn test_preview_grapheme_safe() {
        let text = "héllo wörld";
        assert_eq!(TextProcessor::preview(text, 5), "héllo");
        assert_eq!(TextProcessor::preview(text, 100), text);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(TextProcessor::word_count("senior rust engineer"), 3);
        assert_eq!(TextProcessor::word_count(""), 0);
    }
}
