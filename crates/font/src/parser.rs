//! Font parsing with `ttf-parser`.
//!
//! Only what the worksheet needs is extracted: the grouped name records
//! (for display-name resolution) and the vertical metrics.

use crate::error::FontError;
use crate::names::{FontNames, LanguageMap, NameTable};
use ttf_parser::{FaceParsingError, PlatformId, name_id};

/// Options controlling how much of the font is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip everything that is not needed for name resolution. On by default.
    pub low_memory: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { low_memory: true }
    }
}

/// Vertical metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont {
    /// `None` when the font has no `name` table at all.
    pub names: Option<FontNames>,
    pub metrics: FontMetrics,
    /// Only filled in when not parsing in low-memory mode.
    pub glyph_count: Option<u16>,
}

/// Turns font file bytes into metadata.
pub trait FontParser: Send + Sync {
    fn parse(
        &self,
        data: &[u8],
        file_name: &str,
        options: ParseOptions,
    ) -> Result<ParsedFont, FontError>;
}

/// [`FontParser`] for TrueType and OpenType fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtfFontParser;

impl FontParser for TtfFontParser {
    fn parse(
        &self,
        data: &[u8],
        file_name: &str,
        options: ParseOptions,
    ) -> Result<ParsedFont, FontError> {
        let face = ttf_parser::Face::parse(data, 0).map_err(|e| match e {
            FaceParsingError::UnknownMagic | FaceParsingError::FaceIndexOutOfBounds => {
                FontError::Unsupported {
                    file: file_name.to_string(),
                    message: e.to_string(),
                }
            }
            _ => FontError::Malformed {
                file: file_name.to_string(),
                message: e.to_string(),
            },
        })?;

        let names = face
            .tables()
            .name
            .is_some()
            .then(|| collect_names(&face));

        let metrics = FontMetrics {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
        };

        let glyph_count = (!options.low_memory).then(|| face.number_of_glyphs());

        log::debug!(
            "Parsed {}: {} units/em, ascender {}, descender {}, name table: {}",
            file_name,
            metrics.units_per_em,
            metrics.ascender,
            metrics.descender,
            names.is_some()
        );

        Ok(ParsedFont {
            names,
            metrics,
            glyph_count,
        })
    }
}

fn collect_names(face: &ttf_parser::Face<'_>) -> FontNames {
    let mut names = FontNames::default();

    for record in face.names() {
        let field = match record.name_id {
            name_id::FULL_NAME => NameField::FullName,
            name_id::FAMILY => NameField::Family,
            _ => continue,
        };
        let Some(value) = decode_name(&record) else {
            log::debug!(
                "Skipping undecodable name record (platform {:?}, encoding {}, id {})",
                record.platform_id,
                record.encoding_id,
                record.name_id
            );
            continue;
        };
        let table = match record.platform_id {
            PlatformId::Unicode => names.unicode.get_or_insert_with(NameTable::default),
            PlatformId::Windows => names.windows.get_or_insert_with(NameTable::default),
            PlatformId::Macintosh => names.macintosh.get_or_insert_with(NameTable::default),
            _ => continue,
        };
        let map: &mut LanguageMap = match field {
            NameField::FullName => table.full_name.get_or_insert_with(LanguageMap::new),
            NameField::Family => table.font_family.get_or_insert_with(LanguageMap::new),
        };
        // The first record for a language wins, as in the font's own order.
        map.entry(language_tag(record.platform_id, record.language_id))
            .or_insert(value);
    }

    names
}

#[derive(Clone, Copy)]
enum NameField {
    FullName,
    Family,
}

fn decode_name(record: &ttf_parser::name::Name<'_>) -> Option<String> {
    if let Some(s) = record.to_string() {
        return Some(s);
    }
    // Every Mac Roman byte maps to a character, so decoding cannot fail.
    if record.platform_id == PlatformId::Macintosh && record.encoding_id == 0 {
        let (text, _) = encoding_rs::MACINTOSH.decode_without_bom_handling(record.name);
        return Some(text.into_owned());
    }
    None
}

fn language_tag(platform: PlatformId, language_id: u16) -> String {
    match platform {
        PlatformId::Windows => match language_id {
            0x0409 => "en-US".into(),
            0x0809 => "en-GB".into(),
            0x0411 => "ja-JP".into(),
            0x0804 => "zh-CN".into(),
            0x0404 => "zh-TW".into(),
            0x0C04 => "zh-HK".into(),
            0x0412 => "ko-KR".into(),
            0x0407 => "de-DE".into(),
            0x040C => "fr-FR".into(),
            0x0C0A => "es-ES".into(),
            0x0419 => "ru-RU".into(),
            id => format!("x-win-{:04x}", id),
        },
        PlatformId::Macintosh => match language_id {
            0 => "en".into(),
            1 => "fr".into(),
            2 => "de".into(),
            11 => "ja".into(),
            19 => "zh-Hant".into(),
            23 => "ko".into(),
            33 => "zh-Hans".into(),
            id => format!("x-mac-{}", id),
        },
        _ => "und".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{UNKNOWN_FONT_NAME, resolve_font_name};
    use crate::test_font::TestFontBuilder;

    #[test]
    fn reads_grouped_names_in_font_order() {
        let data = TestFontBuilder::new()
            .windows_name(name_id::FAMILY, 0x0409, "Kyokasho")
            .windows_name(name_id::FULL_NAME, 0x0411, "教科書体 標準")
            .windows_name(name_id::FULL_NAME, 0x0409, "Kyokasho Regular")
            .mac_name(name_id::FULL_NAME, 0, "Kyokasho Regular Mac")
            .build();

        let parsed = TtfFontParser
            .parse(&data, "kyokasho.ttf", ParseOptions::default())
            .unwrap();
        let names = parsed.names.as_ref().unwrap();

        assert!(names.unicode.is_none());
        let windows = names.windows.as_ref().unwrap();
        let full: Vec<_> = windows.full_name.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(full, vec!["ja-JP", "en-US"]);
        assert_eq!(windows.font_family.as_ref().unwrap()["en-US"], "Kyokasho");
        assert_eq!(
            names.macintosh.as_ref().unwrap().full_name.as_ref().unwrap()["en"],
            "Kyokasho Regular Mac"
        );

        assert_eq!(resolve_font_name(Some(names), "kyokasho.ttf"), "教科書体 標準");
    }

    #[test]
    fn mac_roman_names_keep_accents() {
        let data = TestFontBuilder::new()
            .mac_name(name_id::FULL_NAME, 0, "Café Mono")
            .build();
        assert!(data.windows(9).any(|w| w == b"Caf\x8E Mono"));

        let parsed = TtfFontParser
            .parse(&data, "cafe.ttf", ParseOptions::default())
            .unwrap();
        let names = parsed.names.as_ref().unwrap();
        assert_eq!(
            names.macintosh.as_ref().unwrap().full_name.as_ref().unwrap()["en"],
            "Café Mono"
        );
        assert_eq!(resolve_font_name(Some(names), "cafe.ttf"), "Café Mono");
    }

    #[test]
    fn unicode_platform_wins() {
        let data = TestFontBuilder::new()
            .windows_name(name_id::FULL_NAME, 0x0409, "Windows Name")
            .unicode_name(name_id::FAMILY, "Unicode Family")
            .build();
        let parsed = TtfFontParser
            .parse(&data, "u.ttf", ParseOptions::default())
            .unwrap();
        assert_eq!(
            resolve_font_name(parsed.names.as_ref(), "u.ttf"),
            "Unicode Family"
        );
    }

    #[test]
    fn font_without_name_table() {
        let data = TestFontBuilder::new().without_name_table().build();
        let parsed = TtfFontParser
            .parse(&data, "bare.ttf", ParseOptions::default())
            .unwrap();
        assert!(parsed.names.is_none());
        assert!(parsed.glyph_count.is_none());
        assert_eq!(resolve_font_name(parsed.names.as_ref(), "bare.ttf"), UNKNOWN_FONT_NAME);
    }

    #[test]
    fn metrics_and_glyph_count() {
        let data = TestFontBuilder::new().chars("あいう").build();
        let parsed = TtfFontParser
            .parse(&data, "kana.ttf", ParseOptions { low_memory: false })
            .unwrap();
        assert_eq!(
            parsed.metrics,
            FontMetrics {
                units_per_em: 1000,
                ascender: 800,
                descender: -200
            }
        );
        assert_eq!(parsed.glyph_count, Some(4));
    }

    #[test]
    fn garbage_is_unsupported() {
        let err = TtfFontParser
            .parse(b"definitely not a font", "junk.ttf", ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, FontError::Unsupported { ref file, .. } if file == "junk.ttf"));
    }

    #[test]
    fn truncated_font_is_malformed() {
        let data = TestFontBuilder::new().build();
        let err = TtfFontParser
            .parse(&data[..20], "cut.ttf", ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, FontError::Malformed { .. }));
    }

    #[test]
    fn language_tags() {
        assert_eq!(language_tag(PlatformId::Windows, 0x0409), "en-US");
        assert_eq!(language_tag(PlatformId::Windows, 0x1234), "x-win-1234");
        assert_eq!(language_tag(PlatformId::Macintosh, 11), "ja");
        assert_eq!(language_tag(PlatformId::Unicode, 0), "und");
    }
}
