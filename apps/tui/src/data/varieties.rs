use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static VARIETY_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/,;|]+").expect("variety delimiter pattern compiles"));

/// Splits a free-text variety field such as `"Hass / Fuerte; Bacon"` into
/// trimmed names, in order of appearance. Duplicates are kept.
pub fn split_varieties(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    VARIETY_DELIMITERS
        .split(raw)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_mixed_delimiters() {
        assert_eq!(
            split_varieties(Some("Hass / Fuerte; Bacon")),
            vec!["Hass", "Fuerte", "Bacon"]
        );
    }

    #[test]
    fn empty_and_absent_yield_nothing() {
        assert!(split_varieties(Some("")).is_empty());
        assert!(split_varieties(None).is_empty());
        assert!(split_varieties(Some(" / ;; | ")).is_empty());
    }

    #[test]
    fn single_token_without_delimiters() {
        assert_eq!(split_varieties(Some("OnlyOne")), vec!["OnlyOne"]);
        assert_eq!(split_varieties(Some("  Only One  ")), vec!["Only One"]);
    }

    #[test]
    fn runs_of_delimiters_act_as_one_and_duplicates_survive() {
        assert_eq!(
            split_varieties(Some("Hass,,;Hass||Reed/")),
            vec!["Hass", "Hass", "Reed"]
        );
    }
}
