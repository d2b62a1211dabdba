use serde::Serialize;
use std::io::Write;
use wordcloud_core::{Analysis, WordcloudError};

/// Writes an analysis as JSONL: a header line, one line per group, a footer.
pub struct JsonlWriter {
    source: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct GroupEntry<'a> {
    rank: usize,
    words: &'a [String],
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_groups: usize,
    kept_tokens: usize,
    total_tokens: usize,
}

impl JsonlWriter {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            limit: None,
        }
    }

    /// Record the group limit that was applied, for the header.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Render an analysis as a JSONL string.
    pub fn render(&self, analysis: &Analysis) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, analysis)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, analysis: &Analysis) -> anyhow::Result<()> {
        let header = Header {
            version: "1",
            source: &self.source,
            limit: self.limit,
        };
        write_line(writer, &header)?;

        for (i, group) in analysis.groups.iter().enumerate() {
            let entry = GroupEntry {
                rank: i + 1,
                words: &group.words,
                count: group.count,
            };
            write_line(writer, &entry)?;
        }

        let footer = Footer {
            total_groups: analysis.groups.len(),
            kept_tokens: analysis.kept_tokens,
            total_tokens: analysis.total_tokens,
        };
        write_line(writer, &footer)?;

        Ok(())
    }
}

fn write_line<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), WordcloudError> {
    serde_json::to_writer(&mut *writer, value)
        .map_err(|e| WordcloudError::Render(e.to_string()))?;
    writeln!(writer).map_err(|e| WordcloudError::Render(e.to_string()))
}
