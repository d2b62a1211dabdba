use std::fmt::Write as _;
use wordcloud_core::Analysis;

/// Plain-text table: rank, count, and the group's spellings.
pub fn render_human(source: Option<&str>, analysis: &Analysis) -> String {
    let mut out = String::new();

    if let Some(source) = source {
        let _ = writeln!(out, "== {source} ==");
    }

    if analysis.is_empty() {
        out.push_str("(no words)\n");
        return out;
    }

    let width = analysis
        .groups
        .first()
        .map(|g| g.count.to_string().len())
        .unwrap_or(1)
        .max("count".len());

    let _ = writeln!(out, "{:>4}  {:>width$}  words", "#", "count");
    for (i, group) in analysis.groups.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>width$}  {}",
            i + 1,
            group.count,
            group.words.join(", ")
        );
    }
    let _ = writeln!(
        out,
        "{} groups, {} of {} tokens kept",
        analysis.groups.len(),
        analysis.kept_tokens,
        analysis.total_tokens
    );

    out
}
