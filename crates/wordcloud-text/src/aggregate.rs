use crate::capitals::CapitalIndex;
use std::collections::HashSet;
use wordcloud_core::WordGroup;

/// Folds grouped tokens into `WordGroup`s ranked by frequency.
pub struct Aggregator;

impl Aggregator {
    /// Build one group per id, restoring canonical spellings.
    ///
    /// `sorted` and `group_ids` are parallel slices as produced by
    /// `SimilarityGrouper::group`. The result is sorted by descending count;
    /// the sort is stable, so ties keep alphabetical group order.
    pub fn aggregate(
        sorted: &[String],
        group_ids: &[usize],
        capitals: &CapitalIndex,
    ) -> Vec<WordGroup> {
        debug_assert_eq!(sorted.len(), group_ids.len());

        let mut groups: Vec<WordGroup> = Vec::new();
        // Spellings already in each group, indexed like `groups`.
        let mut seen: Vec<HashSet<&str>> = Vec::new();
        for (token, &id) in sorted.iter().zip(group_ids) {
            let spelling = capitals.canonical(token);
            match groups.get_mut(id) {
                Some(group) => {
                    group.count += 1;
                    if seen[id].insert(spelling) {
                        group.words.push(spelling.to_string());
                    }
                }
                None => {
                    debug_assert_eq!(id, groups.len(), "group ids must be contiguous");
                    groups.push(WordGroup::new(spelling));
                    seen.push(HashSet::from([spelling]));
                }
            }
        }

        groups.sort_by(|a, b| b.count.cmp(&a.count));
        groups
    }
}
