use serde::{Deserialize, Serialize};

/// A cluster of lexicographically adjacent, prefix-similar tokens.
///
/// `words` holds each distinct canonical spelling once, in the order it was
/// first seen. `count` holds every occurrence, duplicates included, so the
/// two are independent: `["data"]` with a count of 3 is a valid group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    pub words: Vec<String>,
    pub count: usize,
}

impl WordGroup {
    /// Start a group from its first occurrence.
    pub fn new(spelling: &str) -> Self {
        Self {
            words: vec![spelling.to_string()],
            count: 1,
        }
    }

    /// Record another occurrence. The spelling is only added if unseen.
    ///
    /// Scans `words`; bulk aggregation tracks seen spellings itself.
    pub fn add(&mut self, spelling: &str) {
        self.count += 1;
        if !self.words.iter().any(|w| w == spelling) {
            self.words.push(spelling.to_string());
        }
    }

    /// The spelling that opened the group (alphabetically first).
    pub fn primary(&self) -> &str {
        self.words.first().map(String::as_str).unwrap_or_default()
    }
}

/// Result of running the pipeline over one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Groups sorted by descending count; ties keep alphabetical order.
    pub groups: Vec<WordGroup>,
    /// Raw tokens produced by splitting, empty fragments and stop words included.
    pub total_tokens: usize,
    /// Tokens that survived stop-word filtering. Equals the sum of group counts
    /// before any limit is applied.
    pub kept_tokens: usize,
}

impl Analysis {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keep only the `limit` most frequent groups. `kept_tokens` is unchanged.
    pub fn truncate(&mut self, limit: usize) {
        self.groups.truncate(limit);
    }

    pub fn into_groups(self) -> Vec<WordGroup> {
        self.groups
    }
}
