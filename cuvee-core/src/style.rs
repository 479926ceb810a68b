//! Wine styles inferred from catalog text.
//!
//! The enum offers compile-time safety for style lookups. Styles are
//! inferred from label and region text at ingestion, never supplied by
//! the catalog itself.
//!
//! # Examples
//! ```
//! use cuvee_core::Style;
//!
//! assert_eq!(Style::Sparkling.as_str(), "sparkling");
//! assert_eq!(Style::Reds.to_string(), "reds");
//! ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Style {
    /// Red wines; the default when no other rule matches.
    Reds,
    /// White wines and white varietals.
    Whites,
    /// Rosé wines.
    Rose,
    /// Fortified port wines.
    Port,
    /// Sparkling wines, including champagne, cava, and prosecco.
    Sparkling,
}

/// Keywords claiming the sparkling style; tested before all other rules.
const SPARKLING_KEYWORDS: [&str; 4] = ["champagne", "cava", "prosecco", "sparkling"];
/// White varietal keywords; tested after rosé, before the red default.
const WHITE_KEYWORDS: [&str; 4] = ["riesling", "sauvignon blanc", "chardonnay", "white"];

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Reds,
        Self::Whites,
        Self::Rose,
        Self::Port,
        Self::Sparkling,
    ];

    /// Return the style as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use cuvee_core::Style;
    ///
    /// assert_eq!(Style::Rose.as_str(), "rose");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reds => "reds",
            Self::Whites => "whites",
            Self::Rose => "rose",
            Self::Port => "port",
            Self::Sparkling => "sparkling",
        }
    }

    /// Infer a style from catalog text using ordered keyword rules.
    ///
    /// The label and region are combined and lower-cased, then the rules
    /// are tested in precedence order: sparkling, port, rosé, whites, and
    /// finally reds as the default. The first matching rule wins; no
    /// combination logic applies.
    ///
    /// # Examples
    /// ```
    /// use cuvee_core::Style;
    ///
    /// assert_eq!(Style::infer("Champagne Bollinger Special Cuvée", ""), Style::Sparkling);
    /// assert_eq!(Style::infer("Kistler Chardonnay 2020", "sonoma coast"), Style::Whites);
    /// assert_eq!(Style::infer("Maselva Emporda 2012", "empordà"), Style::Reds);
    /// ```
    pub fn infer(label: &str, region: &str) -> Self {
        let text = format!("{label} {region}").to_lowercase();
        if SPARKLING_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return Self::Sparkling;
        }
        if text.contains("port") {
            return Self::Port;
        }
        // The leading space in " rose" avoids matching words that merely
        // end in the letters, e.g. "primrose".
        if text.contains("rosé") || text.contains(" rose") {
            return Self::Rose;
        }
        if WHITE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return Self::Whites;
        }
        Self::Reds
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reds" => Ok(Self::Reds),
            "whites" => Ok(Self::Whites),
            "rose" | "rosé" => Ok(Self::Rose),
            "port" => Ok(Self::Port),
            "sparkling" => Ok(Self::Sparkling),
            _ => Err(format!("unknown style '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Style::Port.to_string(), Style::Port.as_str());
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Style::from_str("orange").unwrap_err();
        assert!(err.contains("unknown style"));
    }

    #[rstest]
    #[case("Champagne Bollinger Special Cuvée Brut N.V.", "champagne", Style::Sparkling)]
    #[case("Freixenet Cordon Negro", "cava", Style::Sparkling)]
    #[case("Taylor's Late Bottled Vintage Port 2017", "douro", Style::Port)]
    #[case("Domaines Ott Rosé", "provence", Style::Rose)]
    #[case("Whispering Angel", " rose", Style::Rose)]
    #[case("Kistler Sonoma Coast Chardonnay 2020", "sonoma coast", Style::Whites)]
    #[case("Dr. Loosen Riesling", "mosel", Style::Whites)]
    #[case("Robert Mondavi Napa Valley Cabernet Sauvignon 2019", "napa valley", Style::Reds)]
    #[case("", "", Style::Reds)]
    fn inference_follows_rule_precedence(
        #[case] label: &str,
        #[case] region: &str,
        #[case] expected: Style,
    ) {
        assert_eq!(Style::infer(label, region), expected);
    }

    #[test]
    fn sparkling_outranks_port_and_rose() {
        // "sparkling rosé port" style mash-ups resolve to the first rule.
        assert_eq!(Style::infer("Sparkling Rosé", "porto"), Style::Sparkling);
    }

    #[test]
    fn every_style_round_trips_through_from_str() {
        for style in Style::ALL {
            assert_eq!(Style::from_str(style.as_str()), Ok(style));
        }
    }
}
