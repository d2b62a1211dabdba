//! Integration test: read real files, run the pipeline, render every format,
//! and drive the `wordcloud` binary end to end.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use wordcloud_core::PipelineConfig;
use wordcloud_render::{Envelope, JsonlWriter, SUCCESS_MESSAGE, render_json};
use wordcloud_text::WordCloud;

const ARTICLE: &str = "NASA launched a new rocket. The rocket's launch was watched by \
millions; NASA scientists said the launches will continue.\n\
Data science, data analysis. Data Scientist!\n";

fn create_inputs() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("article.txt"), ARTICLE).unwrap();
    fs::write(dir.path().join("love.txt"), "I love NASA and NASA loves me").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    dir
}

fn wordcloud() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wordcloud"))
}

#[test]
fn file_to_envelope() {
    let dir = create_inputs();
    let text = fs::read_to_string(dir.path().join("article.txt")).unwrap();
    let analysis = WordCloud::new().analyze(&text);

    let total: usize = analysis.groups.iter().map(|g| g.count).sum();
    assert_eq!(total, analysis.kept_tokens);

    let nasa = analysis
        .groups
        .iter()
        .find(|g| g.words.contains(&"NASA".to_string()))
        .unwrap();
    assert_eq!(nasa.count, 2);

    let launch = analysis
        .groups
        .iter()
        .find(|g| g.primary() == "launch")
        .unwrap();
    assert_eq!(launch.words, vec!["launch", "launched", "launches"]);

    let output = render_json(&[Envelope::success(analysis.groups.clone())]).unwrap();
    let envelope: Envelope = serde_json::from_str(&output).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data, analysis.groups);
}

#[test]
fn file_to_jsonl() {
    let dir = create_inputs();
    let text = fs::read_to_string(dir.path().join("love.txt")).unwrap();
    let analysis = WordCloud::new().analyze(&text);

    let output = JsonlWriter::new("love.txt").render(&analysis).unwrap();
    let lines: Vec<&str> = output.trim().lines().collect();
    assert_eq!(lines.len(), analysis.group_count() + 2);

    for line in &lines {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
        assert!(parsed.is_ok(), "Invalid JSON: {line}");
    }

    let footer: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
    assert_eq!(footer["KeptTokens"], 4);
}

#[test]
fn config_file_changes_grouping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordcloud.json");
    fs::write(&path, r#"{"grouping": {"min_repeat_len": 2}, "limit": 1}"#).unwrap();

    let config = PipelineConfig::load(&path).unwrap();
    let analysis = WordCloud::with_config(&config).unwrap().analyze("cats cat dog");
    assert_eq!(analysis.group_count(), 1);
    assert_eq!(analysis.groups[0].words, vec!["cat", "cats"]);
}

#[test]
fn binary_analyzes_file_as_json() {
    let dir = create_inputs();
    let output = wordcloud()
        .args(["analyze", "--quiet"])
        .arg(dir.path().join("love.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let envelope: Envelope = serde_json::from_slice(&output.stdout).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.message, SUCCESS_MESSAGE);
    assert_eq!(envelope.source, None);
    assert_eq!(envelope.data.len(), 2);
}

#[test]
fn binary_analyzes_many_files_in_order() {
    let dir = create_inputs();
    let output = wordcloud()
        .args(["analyze", "--quiet"])
        .arg(dir.path().join("love.txt"))
        .arg(dir.path().join("empty.txt"))
        .arg(dir.path().join("article.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let envelopes: Vec<Envelope> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelopes.len(), 3);
    assert!(envelopes[0].source.as_deref().unwrap().ends_with("love.txt"));
    assert!(envelopes[1].data.is_empty());
    assert!(envelopes[2].source.as_deref().unwrap().ends_with("article.txt"));
}

#[test]
fn binary_reads_stdin() {
    let mut child = wordcloud()
        .args(["analyze", "--quiet", "--format", "jsonl", "--limit", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"data science, data analysis. Data Scientist!")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);

    let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(header["Source"], "-");
    assert_eq!(header["Limit"], 1);

    let group: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(group["Words"], serde_json::json!(["data"]));
    assert_eq!(group["Count"], 3);
}

#[test]
fn binary_human_format() {
    let output = wordcloud()
        .args(["analyze", "--format", "human", "--text", "I love NASA and NASA loves me"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("love, loves"));
    assert!(stdout.contains("NASA"));
}

#[test]
fn binary_fails_on_missing_file() {
    let output = wordcloud()
        .args(["analyze", "/nonexistent/words.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("/nonexistent/words.txt"));
}

#[test]
fn binary_rejects_invalid_ratio() {
    let output = wordcloud()
        .args(["analyze", "--text", "data", "--match-ratio", "2.0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("match_ratio"));
}
