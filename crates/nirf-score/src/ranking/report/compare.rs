use super::views::{CategoryLeader, ComparisonView, RankingEntry};
use super::CohortReport;
use crate::ranking::domain::CategoryKey;

pub(crate) fn compare<S: AsRef<str>>(report: &CohortReport, names: &[S]) -> ComparisonView {
    let mut selected: Vec<usize> = Vec::new();
    let mut missing = Vec::new();

    for name in names {
        match report.index_of(name.as_ref()) {
            Some(index) if !selected.contains(&index) => selected.push(index),
            Some(_) => {}
            None => missing.push(name.as_ref().to_string()),
        }
    }
    selected.sort_unstable();

    let entries: Vec<RankingEntry> = selected
        .iter()
        .map(|index| report.entries()[*index].clone())
        .collect();

    let leaders = CategoryKey::ALL
        .iter()
        .filter_map(|key| {
            entries
                .iter()
                .fold(None::<&RankingEntry>, |best, entry| match best {
                    Some(current)
                        if current.result.category_score(*key)
                            >= entry.result.category_score(*key) =>
                    {
                        Some(current)
                    }
                    _ => Some(entry),
                })
                .map(|leader| CategoryLeader {
                    key: *key,
                    label: key.label(),
                    name: leader.result.name.clone(),
                    score: leader.result.category_score(*key),
                })
        })
        .collect();

    ComparisonView {
        entries,
        leaders,
        missing,
    }
}
