/// Inclusive percentile rank: the share of `population` at or below `target`, in `[0, 100]`.
///
/// No interpolation; ties share the rank of the tied value. An empty population ranks 0.
pub fn percentile(population: &[f64], target: f64) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let at_or_below = population.iter().filter(|value| **value <= target).count();
    (at_or_below as f64 / population.len() as f64) * 100.0
}
