//! Term expansion with locale alias support.
//!
//! Raw search terms are normalized and expanded into a superset of
//! matching needles: the term itself, every alias from an injected
//! table, and a whitespace-stripped variant of each, so multi-word
//! needles still match catalog text with different spacing.
#![forbid(unsafe_code)]

use std::collections::{BTreeSet, HashMap};

use crate::text::{normalize_text, strip_whitespace};

/// Immutable mapping from locale-specific terms to canonical English
/// equivalents.
///
/// The table is process-wide static data in spirit: build it once and
/// inject it into a [`TermExpander`], which keeps it swappable for tests
/// and other locales. Lookups try the original raw term first, then its
/// normalized form.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert aliases for a term.
    pub fn insert<I, S>(&mut self, term: impl Into<String>, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(term.into())
            .or_default()
            .extend(aliases.into_iter().map(Into::into));
    }

    /// Add aliases while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, term: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(term, aliases);
        self
    }

    /// The bundled Korean varietal vocabulary.
    #[must_use]
    pub fn korean_varietals() -> Self {
        Self::new()
            .with_aliases("샤도네이", ["chardonnay"])
            .with_aliases("피노 누아", ["pinot noir", "pinotnoir", "피노누아"])
            .with_aliases("피노누아", ["pinot noir", "pinotnoir", "피노 누아"])
            .with_aliases("까베르네 소비뇽", ["cabernet sauvignon", "cabernet"])
            .with_aliases("소비뇽 블랑", ["sauvignon blanc"])
            .with_aliases("리슬링", ["riesling"])
            .with_aliases("스파클링", ["sparkling", "champagne", "cava", "prosecco"])
            .with_aliases("포트", ["port"])
    }

    /// Number of terms carrying aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the table carries no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, raw: &str, normalized: &str) -> &[String] {
        self.entries
            .get(raw)
            .or_else(|| self.entries.get(normalized))
            .map_or(&[], Vec::as_slice)
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::korean_varietals()
    }
}

/// Expands raw search terms into normalized matching needles.
#[derive(Debug, Clone, Default)]
pub struct TermExpander {
    aliases: AliasTable,
}

impl TermExpander {
    /// Construct an expander over the given alias table.
    #[must_use]
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// Construct an expander over the bundled default aliases.
    #[must_use]
    pub fn with_default_aliases() -> Self {
        Self::new(AliasTable::default())
    }

    /// Expand raw terms into a deduplicated needle set.
    ///
    /// Each term contributes its normalized form, every alias from the
    /// table (normalized), and a whitespace-stripped variant of all of
    /// those. Blank terms are skipped; terms without aliases still
    /// contribute their own forms. The set is order-insensitive and used
    /// only for membership tests.
    ///
    /// # Examples
    /// ```
    /// use cuvee_reco::TermExpander;
    ///
    /// let expander = TermExpander::with_default_aliases();
    /// let needles = expander.expand(&["피노 누아".to_owned()]);
    ///
    /// assert!(needles.contains("pinot noir"));
    /// assert!(needles.contains("pinotnoir"));
    /// assert!(needles.contains("피노누아"));
    /// ```
    #[must_use]
    pub fn expand(&self, terms: &[String]) -> BTreeSet<String> {
        let mut needles = BTreeSet::new();
        for raw in terms {
            let normalized = normalize_text(raw);
            if normalized.is_empty() {
                continue;
            }
            for alias in self.aliases.lookup(raw, &normalized) {
                let alias_normalized = normalize_text(alias);
                if alias_normalized.is_empty() {
                    continue;
                }
                needles.insert(strip_whitespace(&alias_normalized));
                needles.insert(alias_normalized);
            }
            needles.insert(strip_whitespace(&normalized));
            needles.insert(normalized);
        }
        needles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand(terms: &[&str]) -> BTreeSet<String> {
        let owned: Vec<String> = terms.iter().map(|&term| term.to_owned()).collect();
        TermExpander::with_default_aliases().expand(&owned)
    }

    #[test]
    fn korean_terms_expand_to_english_aliases() {
        let needles = expand(&["피노 누아"]);
        for needle in ["피노 누아", "피노누아", "pinot noir", "pinotnoir"] {
            assert!(needles.contains(needle), "missing needle {needle:?}");
        }
    }

    #[test]
    fn unknown_terms_still_contribute_their_own_forms() {
        let needles = expand(&["chardonnay"]);
        assert!(needles.contains("chardonnay"));
    }

    #[test]
    fn multi_word_terms_gain_a_compact_variant() {
        let needles = expand(&["cabernet sauvignon"]);
        assert!(needles.contains("cabernet sauvignon"));
        assert!(needles.contains("cabernetsauvignon"));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[""])]
    #[case(&["   "])]
    fn blank_input_expands_to_nothing(#[case] terms: &[&str]) {
        assert!(expand(terms).is_empty());
    }

    #[test]
    fn alias_lookup_prefers_the_raw_term() {
        let table = AliasTable::new()
            .with_aliases("Pinot-Noir", ["raw form"])
            .with_aliases("pinot noir", ["normalized form"]);
        let needles = TermExpander::new(table).expand(&["Pinot-Noir".to_owned()]);

        assert!(needles.contains("raw form"));
        assert!(!needles.contains("normalized form"));
    }

    #[test]
    fn style_vocabulary_expands_to_every_sparkling_keyword() {
        let needles = expand(&["스파클링"]);
        for needle in ["sparkling", "champagne", "cava", "prosecco"] {
            assert!(needles.contains(needle), "missing needle {needle:?}");
        }
    }

    #[test]
    fn default_table_is_populated_and_swappable() {
        assert!(!AliasTable::default().is_empty());
        assert_eq!(AliasTable::new().len(), 0);
    }
}
