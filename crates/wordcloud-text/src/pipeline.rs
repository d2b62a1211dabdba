use crate::aggregate::Aggregator;
use crate::capitals::CapitalIndex;
use crate::grouping::SimilarityGrouper;
use crate::stopwords::StopwordFilter;
use crate::tokenizer::Tokenizer;
use tracing::debug;
use wordcloud_core::{Analysis, PipelineConfig, WordGroup, WordcloudError};

/// Text -> ranked word groups.
///
/// Stages: split, index capitalized spellings, drop stop words, sort, group
/// adjacent similar tokens, aggregate. A `WordCloud` holds only configuration;
/// every call to `analyze` builds its intermediate state from scratch, so one
/// instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct WordCloud {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    grouper: SimilarityGrouper,
    limit: Option<usize>,
}

impl WordCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from validated configuration.
    pub fn with_config(config: &PipelineConfig) -> Result<Self, WordcloudError> {
        config.validate()?;

        let tokenizer = match &config.delimiters {
            Some(delimiters) => Tokenizer::with_delimiters(delimiters.clone()),
            None => Tokenizer::new(),
        };

        let stopwords = if config.replace_stop_words {
            StopwordFilter::from_list(&config.extra_stop_words)
        } else {
            let mut filter = StopwordFilter::new();
            filter.add_stopwords(&config.extra_stop_words);
            filter
        };

        Ok(Self {
            tokenizer,
            stopwords,
            grouper: SimilarityGrouper::with_config(config.grouping),
            limit: config.limit,
        })
    }

    /// Cap the number of groups returned.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let raw = self.tokenizer.tokenize(text);
        let capitals = CapitalIndex::build(&raw);

        let mut kept = self.stopwords.filter(&raw);
        kept.sort_unstable();

        let group_ids = self.grouper.group(&kept);
        let mut groups = Aggregator::aggregate(&kept, &group_ids, &capitals);

        debug!(
            raw = raw.len(),
            kept = kept.len(),
            capitals = capitals.len(),
            groups = groups.len(),
            "analyzed text"
        );

        if let Some(limit) = self.limit {
            groups.truncate(limit);
        }

        Analysis {
            groups,
            total_tokens: raw.len(),
            kept_tokens: kept.len(),
        }
    }
}

/// Ranked word groups for `text` with default settings.
pub fn word_groups(text: &str) -> Vec<WordGroup> {
    WordCloud::new().analyze(text).into_groups()
}
