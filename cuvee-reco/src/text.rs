//! Text normalization shared by term expansion and matching.
#![forbid(unsafe_code)]

/// Normalize free text for matching: lower-case, hyphens and
/// underscores to spaces, internal whitespace collapsed, trimmed.
///
/// # Examples
/// ```
/// use cuvee_reco::normalize_text;
///
/// assert_eq!(normalize_text("  Pinot-Noir \n Réserve "), "pinot noir réserve");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase().replace(['-', '_'], " ");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every whitespace character, for matching against catalog text
/// that concatenates words.
///
/// # Examples
/// ```
/// use cuvee_reco::strip_whitespace;
///
/// assert_eq!(strip_whitespace("pinot noir"), "pinotnoir");
/// ```
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Cabernet Sauvignon", "cabernet sauvignon")]
    #[case("pinot-noir", "pinot noir")]
    #[case("sauvignon_blanc", "sauvignon blanc")]
    #[case("  lots \t of \n space  ", "lots of space")]
    #[case("", "")]
    #[case("   ", "")]
    fn normalization_collapses_and_lowers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_text(input), expected);
    }

    #[rstest]
    #[case("피노 누아", "피노누아")]
    #[case("no-space", "no-space")]
    #[case(" a b\tc ", "abc")]
    fn whitespace_stripping_keeps_everything_else(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_whitespace(input), expected);
    }
}
