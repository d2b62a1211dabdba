use crate::WordcloudError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Common-prefix length over the shorter word must exceed this ratio.
pub const DEFAULT_MATCH_RATIO: f64 = 0.45;
/// Common-prefix length must exceed this fraction of the longer word.
pub const DEFAULT_MIN_REPEAT_RATIO: f64 = 0.45;
/// Common-prefix length must exceed this many characters.
pub const DEFAULT_MIN_REPEAT_LEN: usize = 3;

/// Thresholds for the prefix-similarity predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub match_ratio: f64,
    pub min_repeat_ratio: f64,
    pub min_repeat_len: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            match_ratio: DEFAULT_MATCH_RATIO,
            min_repeat_ratio: DEFAULT_MIN_REPEAT_RATIO,
            min_repeat_len: DEFAULT_MIN_REPEAT_LEN,
        }
    }
}

impl GroupingConfig {
    pub fn validate(&self) -> Result<(), WordcloudError> {
        check_ratio("match_ratio", self.match_ratio)?;
        check_ratio("min_repeat_ratio", self.min_repeat_ratio)
    }
}

fn check_ratio(name: &str, value: f64) -> Result<(), WordcloudError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(WordcloudError::Config(format!(
            "{name} must be a finite value in [0, 1], got {value}"
        )));
    }
    Ok(())
}

/// Full pipeline configuration, loadable from a JSON file.
///
/// Every field has a default, so `{}` is a valid config and partial files
/// only override what they name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub grouping: GroupingConfig,
    /// Added to the built-in stop words (lowercased on load).
    pub extra_stop_words: Vec<String>,
    /// Use only `extra_stop_words`, dropping the built-in list.
    pub replace_stop_words: bool,
    /// Replaces the built-in delimiter list when set.
    pub delimiters: Option<Vec<String>>,
    /// Maximum number of groups to return.
    pub limit: Option<usize>,
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self, WordcloudError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, WordcloudError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), WordcloudError> {
        self.grouping.validate()?;
        if self.limit == Some(0) {
            return Err(WordcloudError::Config(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
