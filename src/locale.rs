// 🌐 Locale Resolver
// One generic field resolver for every localized entity.
//
// Wire entities carry each displayable field three times:
//   name_en, name_ar, name_ro
// The active locale picks one; `en` is the required default variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// LOCALE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English - the default variant, always populated
    #[default]
    En,

    /// Arabic (right-to-left)
    Ar,

    /// Romanian
    Ro,
}

/// Text direction of a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ar, Locale::Ro];

    /// Parse a language code. Accepts region tags ("ar-EG", "ro_RO").
    pub fn parse(code: &str) -> Option<Locale> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            "ro" => Some(Locale::Ro),
            _ => None,
        }
    }

    /// Parse a language code, falling back to `en` for anything unrecognized.
    pub fn from_code(code: &str) -> Locale {
        Locale::parse(code).unwrap_or_else(|| {
            tracing::debug!(code, "unrecognized locale, using en");
            Locale::En
        })
    }

    /// Suffix used by wire field names
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Ro => "ro",
        }
    }

    /// BCP-47 tag used for date formatting
    pub fn date_tag(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Ar => "ar-EG",
            Locale::Ro => "ro-RO",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En | Locale::Ro => Direction::Ltr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// LOCALIZED FIELDS
// ============================================================================

/// Every `{base}_{locale}` key an entity arrived with.
///
/// Captured with `#[serde(flatten)]` so the resolver works on any field name
/// without a per-entity switch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedFields(BTreeMap<String, Value>);

impl LocalizedFields {
    pub fn new() -> Self {
        LocalizedFields(BTreeMap::new())
    }

    /// Builder used by fixtures: sets all three variants of `base`.
    pub fn with(mut self, base: &str, en: &str, ar: &str, ro: &str) -> Self {
        for (locale, text) in [(Locale::En, en), (Locale::Ar, ar), (Locale::Ro, ro)] {
            self.0
                .insert(variant_key(base, locale), Value::String(text.to_string()));
        }
        self
    }

    /// Raw variant lookup. Null and non-string values count as missing.
    pub fn variant(&self, base: &str, locale: Locale) -> Option<&str> {
        self.0.get(&variant_key(base, locale)).and_then(Value::as_str)
    }
}

fn variant_key(base: &str, locale: Locale) -> String {
    format!("{}_{}", base, locale.code())
}

/// Anything that exposes localized fields
pub trait Localized {
    fn localized_fields(&self) -> &LocalizedFields;
}

impl Localized for LocalizedFields {
    fn localized_fields(&self) -> &LocalizedFields {
        self
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Pick the display text of `base` for `locale`.
///
/// Falls back to the `en` variant when the requested one is missing. A
/// malformed entity without even `en` degrades to an empty string.
pub fn resolve<E: Localized + ?Sized>(entity: &E, base: &str, locale: Locale) -> String {
    let fields = entity.localized_fields();

    if let Some(text) = fields.variant(base, locale) {
        return text.to_string();
    }

    match fields.variant(base, Locale::En) {
        Some(text) => {
            if locale != Locale::En {
                tracing::debug!(field = base, %locale, "missing locale variant, using en");
            }
            text.to_string()
        }
        None => {
            tracing::warn!(field = base, "entity has no en variant");
            String::new()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> LocalizedFields {
        LocalizedFields::new().with("name", "Cloud", "سحابة", "Nor")
    }

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("AR"), Some(Locale::Ar));
        assert_eq!(Locale::parse("ro-RO"), Some(Locale::Ro));
        assert_eq!(Locale::parse("ar_EG"), Some(Locale::Ar));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_from_code_falls_back_to_en() {
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::from_code("  "), Locale::En);
        assert_eq!(Locale::from_code("ro"), Locale::Ro);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::Ro.direction(), Direction::Ltr);
    }

    #[test]
    fn test_resolve_each_locale() {
        let fields = sample();
        assert_eq!(resolve(&fields, "name", Locale::En), "Cloud");
        assert_eq!(resolve(&fields, "name", Locale::Ar), "سحابة");
        assert_eq!(resolve(&fields, "name", Locale::Ro), "Nor");
    }

    #[test]
    fn test_unknown_code_resolves_to_en() {
        let fields = sample();
        for code in ["fr", "de-DE", "xx", ""] {
            assert_eq!(resolve(&fields, "name", Locale::from_code(code)), "Cloud");
        }
    }

    #[test]
    fn test_missing_variant_falls_back_to_en() {
        let fields: LocalizedFields =
            serde_json::from_value(json!({ "bio_en": "Engineer", "bio_ar": null })).unwrap();

        assert_eq!(resolve(&fields, "bio", Locale::Ar), "Engineer");
        assert_eq!(resolve(&fields, "bio", Locale::Ro), "Engineer");
    }

    #[test]
    fn test_non_string_variant_counts_as_missing() {
        let fields: LocalizedFields =
            serde_json::from_value(json!({ "name_en": "Data", "name_ro": 42 })).unwrap();
        assert_eq!(resolve(&fields, "name", Locale::Ro), "Data");
    }

    #[test]
    fn test_empty_variant_is_returned_as_is() {
        let fields = LocalizedFields::new().with("position", "CTO", "", "Director");
        assert_eq!(resolve(&fields, "position", Locale::Ar), "");
    }

    #[test]
    fn test_missing_en_degrades_to_empty() {
        let fields = LocalizedFields::new();
        assert_eq!(resolve(&fields, "name", Locale::En), "");
        assert_eq!(resolve(&fields, "name", Locale::Ar), "");
    }
}
