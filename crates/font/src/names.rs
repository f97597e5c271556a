//! Display-name resolution from a font's name metadata.
//!
//! The metadata mirrors how name records are grouped in a font: one table
//! per platform, each holding the full name and the family name keyed by
//! language tag. Language maps keep insertion order (the order the records
//! appear in the font), and resolution always takes the first entry, so the
//! chosen language is reproducible but not locale-aware.

use indexmap::IndexMap;
use serde::Deserialize;

/// Name used when a font's metadata does not yield anything usable.
pub const UNKNOWN_FONT_NAME: &str = "unknown-font";

/// Language tag → name, in font order.
pub type LanguageMap = IndexMap<String, String>;

/// The names one platform provides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTable {
    #[serde(default)]
    pub full_name: Option<LanguageMap>,
    #[serde(default)]
    pub font_family: Option<LanguageMap>,
}

impl NameTable {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.font_family.is_none()
    }
}

/// Name metadata of a parsed font.
///
/// `raw` holds names that are not filed under any platform. It is only
/// consulted when no platform table exists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FontNames {
    #[serde(default)]
    pub unicode: Option<NameTable>,
    #[serde(default)]
    pub windows: Option<NameTable>,
    #[serde(default)]
    pub macintosh: Option<NameTable>,
    #[serde(flatten)]
    pub raw: NameTable,
}

impl FontNames {
    /// The table names are read from: the first platform present in the
    /// order unicode, windows, macintosh, otherwise the raw scope.
    pub fn preferred_table(&self) -> &NameTable {
        self.unicode
            .as_ref()
            .or(self.windows.as_ref())
            .or(self.macintosh.as_ref())
            .unwrap_or(&self.raw)
    }
}

/// Why no name could be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NoNamesTable,
    NoFullNameOrFamily,
    NoLanguages,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontNameResolution {
    Resolved(String),
    Fallback(FallbackReason),
}

impl FontNameResolution {
    pub fn into_name(self) -> String {
        match self {
            FontNameResolution::Resolved(name) => name,
            FontNameResolution::Fallback(_) => UNKNOWN_FONT_NAME.to_string(),
        }
    }
}

/// Applies the resolution order without side effects.
pub fn try_resolve_font_name(names: Option<&FontNames>) -> FontNameResolution {
    let Some(names) = names else {
        return FontNameResolution::Fallback(FallbackReason::NoNamesTable);
    };

    let table = names.preferred_table();

    // Full name is preferred but the family name will serve.
    let Some(name_set) = table.full_name.as_ref().or(table.font_family.as_ref()) else {
        return FontNameResolution::Fallback(FallbackReason::NoFullNameOrFamily);
    };

    match name_set.first() {
        Some((_, name)) => FontNameResolution::Resolved(name.clone()),
        None => FontNameResolution::Fallback(FallbackReason::NoLanguages),
    }
}

/// Resolves the display name for `file_name`, falling back to
/// [`UNKNOWN_FONT_NAME`] with a warning. Never fails.
pub fn resolve_font_name(names: Option<&FontNames>, file_name: &str) -> String {
    match try_resolve_font_name(names) {
        FontNameResolution::Resolved(name) => {
            log::debug!("Resolved font name '{}' for {}", name, file_name);
            name
        }
        FontNameResolution::Fallback(reason) => {
            match reason {
                FallbackReason::NoNamesTable => {
                    log::warn!("font {} does not have a valid names table", file_name)
                }
                FallbackReason::NoFullNameOrFamily => {
                    log::warn!("font {} has no full name or font family name", file_name)
                }
                FallbackReason::NoLanguages => {
                    log::warn!("font {} has no languages for names", file_name)
                }
            }
            UNKNOWN_FONT_NAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(json: &str) -> FontNames {
        serde_json::from_str(json).unwrap()
    }

    fn resolve(json: &str) -> FontNameResolution {
        try_resolve_font_name(Some(&names(json)))
    }

    #[test]
    fn macintosh_family_only() {
        let n = names(r#"{"macintosh": {"fontFamily": {"en": "Foo"}}}"#);
        assert_eq!(resolve_font_name(Some(&n), "foo.ttf"), "Foo");
    }

    #[test]
    fn bare_top_level_full_name() {
        assert_eq!(
            resolve(r#"{"fullName": {"en": "Bar"}}"#),
            FontNameResolution::Resolved("Bar".into())
        );
    }

    #[test]
    fn empty_metadata_falls_back_with_warning() {
        testing_logger::setup();
        assert_eq!(
            resolve("{}"),
            FontNameResolution::Fallback(FallbackReason::NoFullNameOrFamily)
        );
        assert_eq!(resolve_font_name(Some(&names("{}")), "empty.ttf"), UNKNOWN_FONT_NAME);
        testing_logger::validate(|logs| {
            assert_eq!(logs.len(), 1);
            assert_eq!(logs[0].level, log::Level::Warn);
            assert_eq!(
                logs[0].body,
                "font empty.ttf has no full name or font family name"
            );
        });
    }

    #[test]
    fn missing_names_table_falls_back() {
        assert_eq!(
            try_resolve_font_name(None),
            FontNameResolution::Fallback(FallbackReason::NoNamesTable)
        );
        assert_eq!(resolve_font_name(None, "nameless.ttf"), UNKNOWN_FONT_NAME);
    }

    #[test]
    fn zero_languages_falls_back() {
        assert_eq!(
            resolve(r#"{"unicode": {"fullName": {}}}"#),
            FontNameResolution::Fallback(FallbackReason::NoLanguages)
        );
    }

    #[test]
    fn platform_priority() {
        let json = r#"{
            "macintosh": {"fullName": {"en": "Mac"}},
            "windows": {"fullName": {"en-US": "Win"}},
            "fullName": {"en": "Raw"}
        }"#;
        assert_eq!(resolve(json), FontNameResolution::Resolved("Win".into()));

        let json = r#"{
            "unicode": {"fontFamily": {"und": "Uni"}},
            "windows": {"fullName": {"en-US": "Win"}}
        }"#;
        assert_eq!(resolve(json), FontNameResolution::Resolved("Uni".into()));
    }

    #[test]
    fn present_platform_shadows_raw_scope() {
        // An empty platform table still wins over the raw names.
        let json = r#"{"windows": {}, "fullName": {"en": "Raw"}}"#;
        assert_eq!(
            resolve(json),
            FontNameResolution::Fallback(FallbackReason::NoFullNameOrFamily)
        );
    }

    #[test]
    fn full_name_preferred_over_family() {
        let json = r#"{"windows": {"fontFamily": {"en-US": "Family"}, "fullName": {"en-US": "Family Regular"}}}"#;
        assert_eq!(resolve(json), FontNameResolution::Resolved("Family Regular".into()));
    }

    #[test]
    fn empty_full_name_does_not_fall_through_to_family() {
        let json = r#"{"windows": {"fullName": {}, "fontFamily": {"en-US": "Family"}}}"#;
        assert_eq!(
            resolve(json),
            FontNameResolution::Fallback(FallbackReason::NoLanguages)
        );
    }

    #[test]
    fn first_language_in_insertion_order_wins() {
        let json = r#"{"windows": {"fullName": {"ja-JP": "はんなり明朝", "en-US": "Hannari Mincho"}}}"#;
        assert_eq!(resolve(json), FontNameResolution::Resolved("はんなり明朝".into()));

        let json = r#"{"windows": {"fullName": {"zz": "Last Alphabetically", "aa": "First Alphabetically"}}}"#;
        assert_eq!(
            resolve(json),
            FontNameResolution::Resolved("Last Alphabetically".into())
        );
    }

    #[test]
    fn fallback_resolution_converts_to_sentinel() {
        let r = FontNameResolution::Fallback(FallbackReason::NoLanguages);
        assert_eq!(r.into_name(), UNKNOWN_FONT_NAME);
    }
}
