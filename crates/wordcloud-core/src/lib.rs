//! Wordcloud core domain types, configuration, and errors.

mod config;
mod error;
mod types;

pub use config::{
    DEFAULT_MATCH_RATIO, DEFAULT_MIN_REPEAT_LEN, DEFAULT_MIN_REPEAT_RATIO, GroupingConfig,
    PipelineConfig,
};
pub use error::WordcloudError;
pub use types::{Analysis, WordGroup};
