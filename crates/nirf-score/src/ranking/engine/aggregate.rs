use super::rules::CategoryScore;
use crate::ranking::domain::{CategoryKey, ScoreComponent};
use crate::ranking::weights::WeightConfig;

/// Rounds half away from zero to two decimals, the precision every score is reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted composite over unrounded category totals, as a percentage-weighted mean.
pub(crate) fn weighted_total(
    categories: &[CategoryScore; 5],
    weights: &WeightConfig,
) -> f64 {
    categories
        .iter()
        .fold(0.0, |acc, category| {
            acc + category.total() * weights.weight(category.key)
        })
        / 100.0
}

pub(crate) fn components(categories: &[CategoryScore; 5]) -> Vec<ScoreComponent> {
    categories
        .iter()
        .flat_map(|category| {
            category.parts.iter().map(move |part| ScoreComponent {
                category: category.key,
                code: part.code.to_string(),
                score: round2(part.value),
                notes: part.notes.clone(),
            })
        })
        .collect()
}

pub(crate) fn category_total(categories: &[CategoryScore; 5], key: CategoryKey) -> f64 {
    categories
        .iter()
        .find(|category| category.key == key)
        .map(CategoryScore::total)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(-3.14159), -3.14);
        assert_eq!(round2(0.0), 0.0);
    }
}
