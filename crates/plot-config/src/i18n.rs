//! Localized strings for the plot namespace.

use std::collections::HashMap;

use serde::Deserialize;

pub const PLOT_NAMESPACE: &str = "plot";
pub const SERIES_KEY: &str = "series";

/// Lookup from a translation key to a display string in the active language.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Key/value table for a single language of the plot namespace.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in table for `language`; unknown languages get English.
    pub fn builtin(language: &str) -> Self {
        let (language, series) = match language {
            "zh" => ("zh", "系列"),
            "ja" => ("ja", "系列"),
            _ => ("en", "Series"),
        };
        let mut entries = HashMap::new();
        entries.insert(SERIES_KEY.to_string(), series.to_string());
        Self {
            language: language.to_string(),
            entries,
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!(
                    namespace = PLOT_NAMESPACE,
                    language = %self.language,
                    key,
                    "missing translation"
                );
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs() {
        assert_eq!(Catalog::builtin("en").translate(SERIES_KEY), "Series");
        assert_eq!(Catalog::builtin("zh").translate(SERIES_KEY), "系列");
        assert_eq!(Catalog::builtin("ja").translate(SERIES_KEY), "系列");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let catalog = Catalog::builtin("fr");
        assert_eq!(catalog.language, "en");
        assert_eq!(catalog.translate(SERIES_KEY), "Series");
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(Catalog::default().translate("legend"), "legend");
    }

    #[test]
    fn custom_catalog_from_yaml() {
        let catalog = Catalog::from_yaml_str("language: de\nentries:\n  series: Reihe\n").unwrap();
        assert_eq!(catalog.translate(SERIES_KEY), "Reihe");
    }

    #[test]
    fn closures_translate() {
        let t = |key: &str| key.to_uppercase();
        assert_eq!(t.translate(SERIES_KEY), "SERIES");
    }
}
