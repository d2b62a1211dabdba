use std::collections::HashMap;

/// Single uppercase letters that are ordinary words, not initials.
const SINGLE_LETTER_WORDS: [char; 3] = ['A', 'I', 'U'];

/// Lowercase form -> canonical capitalized spelling.
///
/// Built fresh for each text. The first capitalized variant seen for a
/// lowercase key wins; later variants with different casing are ignored.
#[derive(Debug, Clone, Default)]
pub struct CapitalIndex {
    spellings: HashMap<String, String>,
}

impl CapitalIndex {
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut spellings = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if is_capital_word(token) {
                spellings
                    .entry(token.to_lowercase())
                    .or_insert_with(|| token.to_string());
            }
        }
        Self { spellings }
    }

    /// Canonical spelling for a lowercase token, or the token itself.
    pub fn canonical<'a>(&'a self, lower: &'a str) -> &'a str {
        self.spellings.get(lower).map(String::as_str).unwrap_or(lower)
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

/// A lone uppercase initial, or an acronym / CamelCase-ish proper noun.
///
/// "NASA", "API", "McDonald", "X" qualify. "The", "A", "I" do not.
pub fn is_capital_word(token: &str) -> bool {
    is_capital_letter(token) || has_inner_capital(token)
}

fn is_capital_letter(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase() && !SINGLE_LETTER_WORDS.contains(&c),
        _ => false,
    }
}

/// Starts with an uppercase ASCII letter and has another one later on.
fn has_inner_capital(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.any(|c| c.is_ascii_uppercase()),
        _ => false,
    }
}
