use crate::Cli;
use anyhow::Result;
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::info;
use wordcloud_core::{Analysis, PipelineConfig};
use wordcloud_render::{Envelope, JsonlWriter, render_human, render_json};
use wordcloud_text::WordCloud;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `{ data, message, success }` envelope
    Json,
    /// Header, one line per group, footer
    Jsonl,
    /// Plain-text table
    Human,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input files; `-` or none reads stdin
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Analyze this text instead of reading files
    #[arg(long, conflicts_with = "inputs")]
    text: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Keep only the N most frequent groups
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Prefix length over the shorter word must exceed this ratio
    #[arg(long)]
    match_ratio: Option<f64>,

    /// Prefix length must exceed this fraction of the longer word
    #[arg(long)]
    min_repeat_ratio: Option<f64>,

    /// Prefix length must exceed this many characters
    #[arg(long)]
    min_repeat_len: Option<usize>,
}

impl AnalyzeArgs {
    /// Layer command-line overrides on top of the loaded config.
    fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(limit) = self.limit {
            config.limit = Some(limit);
        }
        if let Some(ratio) = self.match_ratio {
            config.grouping.match_ratio = ratio;
        }
        if let Some(ratio) = self.min_repeat_ratio {
            config.grouping.min_repeat_ratio = ratio;
        }
        if let Some(len) = self.min_repeat_len {
            config.grouping.min_repeat_len = len;
        }
        config
    }
}

/// One text to analyze and the name it is reported under.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub text: String,
}

fn read_inputs(args: &AnalyzeArgs) -> Result<Vec<Input>> {
    if let Some(text) = &args.text {
        return Ok(vec![Input {
            name: "<text>".to_string(),
            text: text.clone(),
        }]);
    }

    if args.inputs.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    args.inputs
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                return read_stdin();
            }
            let text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
            Ok(Input {
                name: path.display().to_string(),
                text,
            })
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let text = std::io::read_to_string(std::io::stdin())?;
    Ok(Input {
        name: "-".to_string(),
        text,
    })
}

/// Run the pipeline over every input in parallel, preserving input order.
pub fn analyze_all(cloud: &WordCloud, inputs: &[Input]) -> Vec<Analysis> {
    inputs
        .par_iter()
        .map(|input| cloud.analyze(&input.text))
        .collect()
}

pub fn render(
    format: Format,
    inputs: &[Input],
    analyses: &[Analysis],
    limit: Option<usize>,
) -> Result<String> {
    let named = inputs.len() > 1;
    match format {
        Format::Json => {
            let envelopes: Vec<Envelope> = inputs
                .iter()
                .zip(analyses)
                .map(|(input, analysis)| {
                    let envelope = Envelope::success(analysis.groups.clone());
                    if named {
                        envelope.with_source(&input.name)
                    } else {
                        envelope
                    }
                })
                .collect();
            let mut out = render_json(&envelopes)?;
            out.push('\n');
            Ok(out)
        }
        Format::Jsonl => {
            let mut out = String::new();
            for (input, analysis) in inputs.iter().zip(analyses) {
                out.push_str(&JsonlWriter::new(&input.name).limit(limit).render(analysis)?);
            }
            Ok(out)
        }
        Format::Human => {
            let sections: Vec<String> = inputs
                .iter()
                .zip(analyses)
                .map(|(input, analysis)| {
                    render_human(named.then_some(input.name.as_str()), analysis)
                })
                .collect();
            Ok(sections.join("\n"))
        }
    }
}

pub fn run(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let config = args.apply(cli.pipeline_config()?);
    let cloud = WordCloud::with_config(&config)?;

    let inputs = read_inputs(args)?;
    let analyses = analyze_all(&cloud, &inputs);

    for (input, analysis) in inputs.iter().zip(&analyses) {
        info!(
            input = %input.name,
            kept = analysis.kept_tokens,
            groups = analysis.group_count(),
            "analyzed"
        );
    }

    print!("{}", render(args.format, &inputs, &analyses, config.limit)?);

    if !cli.is_quiet() && inputs.len() > 1 {
        eprintln!("Analyzed {} inputs.", inputs.len());
    }

    Ok(())
}
