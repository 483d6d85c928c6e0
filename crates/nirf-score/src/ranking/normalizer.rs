/// Canonical form of an institution name for identity lookups.
pub fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_case() {
        assert_eq!(
            normalize_name("\u{feff}  Riverside   Institute of\tTechnology "),
            "riverside institute of technology"
        );
    }
}
