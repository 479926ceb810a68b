//! Session-scoped user preferences.
//!
//! Preferences are soft signals: selected styles, an optional preferred
//! country, and free-text search terms. They are never persisted and
//! carry no history.

use crate::Style;

/// The caller's current taste: styles, an optional country, raw terms.
///
/// At least one style must be selected for a non-empty recommendation;
/// this is a documented precondition rather than a runtime error.
///
/// # Examples
/// ```
/// use cuvee_core::{Preferences, Style};
///
/// let prefs = Preferences::new()
///     .with_style(Style::Sparkling)
///     .with_country("France")
///     .with_term("피노 누아");
/// assert!(prefs.prefers_style(Style::Sparkling));
/// assert_eq!(prefs.preferred_country().as_deref(), Some("france"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    styles: Vec<Style>,
    country: Option<String>,
    terms: Vec<String>,
}

impl Preferences {
    /// Construct empty preferences.
    ///
    /// # Examples
    /// ```
    /// use cuvee_core::{Preferences, Style};
    ///
    /// let prefs = Preferences::new();
    /// assert!(!prefs.prefers_style(Style::Reds));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selected style while returning `self` for chaining.
    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    /// Add every style from the iterator.
    pub fn with_styles<I>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = Style>,
    {
        self.styles.extend(styles);
        self
    }

    /// Set the preferred country. Blank input clears the preference.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        let country = country.into();
        let trimmed = country.trim();
        self.country = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
        self
    }

    /// Add a raw search term while returning `self` for chaining.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.terms.push(term.into());
        self
    }

    /// Add every term from the iterator.
    pub fn with_terms<I, T>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// The selected styles, in insertion order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Report whether `style` is among the selected styles.
    pub fn prefers_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    /// The preferred country exactly as supplied, if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// The preferred country lower-cased for comparison against item
    /// countries, which are already lower-case.
    pub fn preferred_country(&self) -> Option<String> {
        self.country.as_deref().map(str::to_lowercase)
    }

    /// The raw search terms, in insertion order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
