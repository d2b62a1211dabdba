//! Stop-word filtering
//!
//! The built-in list is English function words plus a few abbreviations
//! ("etc", "ex", "e.g"). The empty string is a stop word so that empty
//! fragments from the tokenizer never reach grouping.

use std::collections::HashSet;

pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "", "must", "ourselves", "hers", "between", "yourself", "but", "again", "there", "about",
    "once", "during", "out", "very", "having", "with", "they", "own", "an", "be", "some", "for",
    "do", "its", "yours", "such", "into", "of", "most", "itself", "other", "off", "is", "s", "am",
    "or", "who", "as", "from", "him", "each", "the", "themselves", "until", "below", "are", "we",
    "these", "your", "his", "through", "don", "nor", "me", "were", "her", "more", "himself",
    "this", "down", "should", "our", "their", "while", "above", "both", "up", "to", "ours", "had",
    "she", "all", "no", "when", "at", "any", "before", "them", "same", "and", "been", "have",
    "in", "will", "on", "does", "yourselves", "then", "that", "because", "what", "over", "why",
    "so", "can", "did", "not", "now", "under", "he", "you", "herself", "has", "just", "where",
    "too", "only", "myself", "which", "those", "i", "after", "few", "whom", "t", "being", "if",
    "theirs", "my", "against", "a", "by", "doing", "it", "how", "further", "was", "here", "than",
    "etc", "e.g", "ex",
];

/// A filter for removing stop words from raw tokens.
///
/// Membership is exact against the lowercased token.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Filter with the built-in list.
    pub fn new() -> Self {
        Self::from_list(DEFAULT_STOP_WORDS)
    }

    /// Filter from a custom list. The empty string is always included.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut stopwords: HashSet<String> =
            words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        stopwords.insert(String::new());
        Self { stopwords }
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check a token that is already lowercase.
    pub fn is_stopword(&self, lower: &str) -> bool {
        self.stopwords.contains(lower)
    }

    /// Lowercase every token and drop the stop words.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !self.is_stopword(t))
            .collect()
    }
}
