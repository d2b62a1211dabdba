//! Text normalization and similarity grouping for word clouds.
//!
//! The pipeline is a pure function of its input: split on delimiters, map
//! lowercase forms to their capitalized spellings, drop stop words, sort, and
//! merge alphabetically adjacent tokens that share a long enough prefix.

mod aggregate;
mod capitals;
mod grouping;
mod pipeline;
mod stopwords;
mod tokenizer;

pub use aggregate::Aggregator;
pub use capitals::{CapitalIndex, is_capital_word};
pub use grouping::{SimilarityGrouper, is_matching};
pub use pipeline::{WordCloud, word_groups};
pub use stopwords::{DEFAULT_STOP_WORDS, StopwordFilter};
pub use tokenizer::{DEFAULT_DELIMITERS, Tokenizer};
