/// Delimiters applied in order. Multi-character entries ("e.g", "'s") are
/// matched before the single characters they contain.
pub const DEFAULT_DELIMITERS: &[&str] = &[
    " ", "e.g", ".", "?", "!", "...", "\n", "'s", "'", ")", ",", ":", "(", "&", "`", "*", "/",
    "-", ";", "\u{2019}s",
];

/// Multi-delimiter text splitter.
///
/// Empty fragments from consecutive, leading, or trailing delimiters are kept;
/// the stop-word filter drops them later.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_delimiters(DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect())
    }

    /// Use a custom delimiter list. Empty delimiters are skipped.
    pub fn with_delimiters(delimiters: Vec<String>) -> Self {
        Self {
            delimiters: delimiters.into_iter().filter(|d| !d.is_empty()).collect(),
        }
    }

    /// Split `text` on every delimiter in turn.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut fragments = vec![text];
        for delimiter in &self.delimiters {
            fragments = fragments
                .into_iter()
                .flat_map(|fragment| fragment.split(delimiter.as_str()))
                .collect();
        }
        fragments
    }
}
