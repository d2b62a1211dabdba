use wordcloud_core::GroupingConfig;

/// Greedy single-pass clustering over alphabetically sorted tokens.
///
/// Each token is compared only with its immediate predecessor. Membership is
/// therefore chained: "abcd" and "abcdefghijklmnop" share a group through
/// "abcdefgh" even though they fail the predicate against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityGrouper {
    config: GroupingConfig,
}

impl SimilarityGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GroupingConfig) -> Self {
        Self { config }
    }

    /// Prefix-similarity predicate.
    ///
    /// With `j` the common prefix length, two different words match when
    /// `j / min_len > match_ratio` and
    /// `j > max(max_len * min_repeat_ratio, min_repeat_len)`.
    /// Lengths are in characters. Equal words always match.
    pub fn is_matching(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }

        let len_a = a.chars().count();
        let len_b = b.chars().count();
        let shorter = len_a.min(len_b);
        if shorter == 0 {
            return false;
        }
        let longer = len_a.max(len_b);

        let prefix = common_prefix_len(a, b) as f64;
        let min_repeat =
            (longer as f64 * self.config.min_repeat_ratio).max(self.config.min_repeat_len as f64);

        prefix / shorter as f64 > self.config.match_ratio && prefix > min_repeat
    }

    /// Assign a group id to each token of an alphabetically sorted slice.
    ///
    /// Ids start at 0 and grow by exactly 1 whenever a token fails to match
    /// its predecessor.
    pub fn group<S: AsRef<str>>(&self, sorted: &[S]) -> Vec<usize> {
        let mut ids = Vec::with_capacity(sorted.len());
        let mut current = 0;

        for (i, token) in sorted.iter().enumerate() {
            if i > 0 && !self.is_matching(sorted[i - 1].as_ref(), token.as_ref()) {
                current += 1;
            }
            ids.push(current);
        }

        ids
    }
}

/// Number of leading characters `a` and `b` share.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}

/// `SimilarityGrouper::is_matching` with default thresholds.
pub fn is_matching(a: &str, b: &str) -> bool {
    SimilarityGrouper::new().is_matching(a, b)
}
