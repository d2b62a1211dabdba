use proptest::prelude::*;
use std::collections::HashSet;
use wordcloud_text::{SimilarityGrouper, StopwordFilter, Tokenizer, WordCloud, is_matching};

const VOCAB: &[&str] = &[
    "data", "Data", "science", "Science", "scientist", "scientists", "analysis", "NASA", "nasa",
    "love", "loves", "loved", "the", "and", "I", "a", "cloud", "clouds", "Cloudy", "API", "APIs",
    "international", "internationally", "intern", "x", "X",
];

fn vocab_text() -> impl Strategy<Value = String> {
    let word = prop::sample::select(VOCAB);
    let sep = prop::sample::select(&[" ", ", ", ". ", "! ", "\n", " - ", "'s "][..]);
    prop::collection::vec((word, sep), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(w, s)| format!("{w}{s}"))
            .collect::<String>()
    })
}

fn ascii_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.!?'\n-]{0,200}"
}

proptest! {
    #[test]
    fn counts_sum_to_filtered_tokens(text in prop_oneof![vocab_text(), ascii_text()]) {
        let analysis = WordCloud::new().analyze(&text);
        let raw = Tokenizer::new().tokenize(&text);
        let kept = StopwordFilter::new().filter(&raw);

        let total: usize = analysis.groups.iter().map(|g| g.count).sum();
        prop_assert_eq!(total, kept.len());
        prop_assert_eq!(total, analysis.kept_tokens);
        prop_assert_eq!(raw.len(), analysis.total_tokens);
    }

    #[test]
    fn spellings_are_distinct_within_groups(text in prop_oneof![vocab_text(), ascii_text()]) {
        for group in WordCloud::new().analyze(&text).groups {
            let distinct: HashSet<&String> = group.words.iter().collect();
            prop_assert_eq!(distinct.len(), group.words.len());
            prop_assert!(!group.words.is_empty());
            prop_assert!(group.count >= group.words.len());
        }
    }

    #[test]
    fn lowercase_token_lands_in_one_group(text in prop_oneof![vocab_text(), ascii_text()]) {
        let mut seen: HashSet<String> = HashSet::new();
        for group in WordCloud::new().analyze(&text).groups {
            let lowered: HashSet<String> = group.words.iter().map(|w| w.to_lowercase()).collect();
            for word in lowered {
                prop_assert!(seen.insert(word.clone()), "{} appears in two groups", word);
            }
        }
    }

    #[test]
    fn groups_sorted_by_count(text in prop_oneof![vocab_text(), ascii_text()]) {
        let groups = WordCloud::new().analyze(&text).groups;
        for pair in groups.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn analysis_is_idempotent(text in prop_oneof![vocab_text(), ascii_text()]) {
        let cloud = WordCloud::new();
        prop_assert_eq!(cloud.analyze(&text), cloud.analyze(&text));
    }

    #[test]
    fn word_matches_itself(word in ".{0,40}") {
        prop_assert!(is_matching(&word, &word));
    }

    #[test]
    fn matching_is_symmetric(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        prop_assert_eq!(is_matching(&a, &b), is_matching(&b, &a));
    }

    #[test]
    fn group_ids_are_contiguous(mut words in prop::collection::vec("[a-z]{1,10}", 0..50)) {
        words.sort_unstable();
        let ids = SimilarityGrouper::new().group(&words);
        prop_assert_eq!(ids.len(), words.len());
        if let Some(first) = ids.first() {
            prop_assert_eq!(*first, 0);
        }
        for pair in ids.windows(2) {
            prop_assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
        }
    }
}
