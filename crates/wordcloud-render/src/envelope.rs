use serde::{Deserialize, Serialize};
use wordcloud_core::{WordGroup, WordcloudError};

pub const SUCCESS_MESSAGE: &str = "Wordcloud is generated successfully";

/// `{ data, message, success }` response body shared by the HTTP service and
/// the CLI's `json` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Input name; set by the CLI, absent in HTTP responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub data: Vec<WordGroup>,
    pub message: String,
    pub success: bool,
}

impl Envelope {
    pub fn success(groups: Vec<WordGroup>) -> Self {
        Self {
            source: None,
            data: groups,
            message: SUCCESS_MESSAGE.to_string(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            source: None,
            data: Vec::new(),
            message: message.into(),
            success: false,
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

/// Pretty-printed JSON for a single envelope, or an array when there are
/// several.
pub fn render_json(envelopes: &[Envelope]) -> anyhow::Result<String> {
    let json = match envelopes {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
    .map_err(|e| WordcloudError::Render(e.to_string()))?;
    Ok(json)
}
