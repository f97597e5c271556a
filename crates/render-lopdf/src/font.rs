//! Embedding of the user's TrueType/OpenType font as a composite font.
//!
//! Text is encoded as two-byte glyph ids (`Identity-H`), so any script the
//! font covers can be drawn without a single-byte encoding. A `ToUnicode`
//! CMap keeps the text extractable.

use crate::stream::maybe_deflated;
use lopdf::{Document, Object, ObjectId, StringFormat, dictionary};
use renshuu_font::FontDescriptor;
use renshuu_render_core::RenderError;
use renshuu_traits::SharedFontData;
use std::collections::BTreeMap;

/// bfchar entries per block; the CMap format caps this at 100.
const BFCHAR_BLOCK: usize = 100;

pub(crate) struct EmbeddedFont {
    pub resource_name: String,
    pub display_name: String,
    pub file_name: String,
    base_font: String,
    data: SharedFontData,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    bbox: [i16; 4],
    cap_height: i16,
    /// Glyph id → text it was drawn for.
    used_glyphs: BTreeMap<u16, String>,
}

impl EmbeddedFont {
    pub fn new(descriptor: &FontDescriptor, resource_name: String) -> Result<Self, RenderError> {
        let face = parse_face(&descriptor.data, &descriptor.file_name)?;
        let bbox = face.global_bounding_box();
        let base_font = base_font_name(&descriptor.display_name, &descriptor.file_name);
        log::debug!(
            "Embedding '{}' ({}) as /{} with BaseFont {}",
            descriptor.display_name,
            descriptor.file_name,
            resource_name,
            base_font
        );
        Ok(Self {
            resource_name,
            display_name: descriptor.display_name.clone(),
            file_name: descriptor.file_name.clone(),
            base_font,
            data: descriptor.data.clone(),
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            cap_height: face.capital_height().unwrap_or(face.ascender()),
            used_glyphs: BTreeMap::new(),
        })
    }

    /// Converts `text` to big-endian glyph ids and remembers which glyphs
    /// were used. Characters the font lacks become glyph 0.
    pub fn encode(&mut self, text: &str) -> Result<Vec<u8>, RenderError> {
        let face = parse_face(&self.data, &self.file_name)?;
        let mut out = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            let gid = match face.glyph_index(c) {
                Some(gid) => gid.0,
                None => {
                    log::warn!(
                        "Font '{}' has no glyph for {:?} (U+{:04X})",
                        self.display_name,
                        c,
                        c as u32
                    );
                    0
                }
            };
            if gid != 0 {
                self.used_glyphs.entry(gid).or_insert_with(|| c.to_string());
            }
            out.extend_from_slice(&gid.to_be_bytes());
        }
        Ok(out)
    }

    /// Distance from the baseline to the middle of the ascender/descender
    /// box, in points, for text of `size`.
    pub fn middle_offset(&self, size: f32) -> f32 {
        (self.ascender as f32 + self.descender as f32) / 2.0 * self.scale(size)
    }

    pub fn ascent(&self, size: f32) -> f32 {
        self.ascender as f32 * self.scale(size)
    }

    fn scale(&self, size: f32) -> f32 {
        size / self.units_per_em as f32
    }

    fn to_pdf_units(&self, value: i32) -> i64 {
        (value as f32 * 1000.0 / self.units_per_em as f32).round() as i64
    }

    /// Adds the font program, descriptor, descendant CID font, ToUnicode
    /// CMap and the Type0 font to `doc`. Returns the Type0 font's id.
    pub fn add_to_document(&self, doc: &mut Document, compress: bool) -> Result<ObjectId, RenderError> {
        let face = parse_face(&self.data, &self.file_name)?;

        let font_file_id = doc.add_object(maybe_deflated(
            dictionary! { "Length1" => self.data.len() as i64 },
            self.data.to_vec(),
            compress,
        )?);

        let descriptor = dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => Object::Name(self.base_font.as_bytes().to_vec()),
            "Flags" => 4,
            "FontBBox" => self.bbox.iter().map(|v| Object::Integer(self.to_pdf_units(*v as i32))).collect::<Vec<Object>>(),
            "ItalicAngle" => 0,
            "Ascent" => self.to_pdf_units(self.ascender as i32),
            "Descent" => self.to_pdf_units(self.descender as i32),
            "CapHeight" => self.to_pdf_units(self.cap_height as i32),
            "StemV" => 80,
            "FontFile2" => font_file_id,
        };
        let descriptor_id = doc.add_object(descriptor);

        let mut widths = Vec::with_capacity(self.used_glyphs.len() * 2);
        for gid in self.used_glyphs.keys() {
            let advance = face
                .glyph_hor_advance(ttf_parser::GlyphId(*gid))
                .unwrap_or(self.units_per_em);
            widths.push(Object::Integer(*gid as i64));
            widths.push(Object::Array(vec![Object::Integer(
                self.to_pdf_units(advance as i32),
            )]));
        }

        let cid_font = dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => Object::Name(self.base_font.as_bytes().to_vec()),
            "CIDSystemInfo" => dictionary! {
                "Registry" => Object::String(b"Adobe".to_vec(), StringFormat::Literal),
                "Ordering" => Object::String(b"Identity".to_vec(), StringFormat::Literal),
                "Supplement" => 0,
            },
            "FontDescriptor" => descriptor_id,
            "DW" => 1000,
            "W" => widths,
            "CIDToGIDMap" => "Identity",
        };
        let cid_font_id = doc.add_object(cid_font);

        let to_unicode_id = doc.add_object(maybe_deflated(
            dictionary! {},
            to_unicode_cmap(&self.used_glyphs).into_bytes(),
            compress,
        )?);

        let type0 = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => Object::Name(self.base_font.as_bytes().to_vec()),
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::Reference(cid_font_id)],
            "ToUnicode" => to_unicode_id,
        };
        Ok(doc.add_object(type0))
    }
}

fn parse_face<'a>(data: &'a [u8], file_name: &str) -> Result<ttf_parser::Face<'a>, RenderError> {
    ttf_parser::Face::parse(data, 0)
        .map_err(|e| RenderError::Font(format!("{}: {}", file_name, e)))
}

/// A PDF name for the font: the display name reduced to characters that
/// need no escaping. Falls back to the file stem, then a fixed name.
pub(crate) fn base_font_name(display_name: &str, file_name: &str) -> String {
    fn clean(s: &str) -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
            .collect()
    }

    let name = clean(display_name);
    if !name.is_empty() {
        return name;
    }
    let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
    let name = clean(stem);
    if !name.is_empty() {
        return name;
    }
    "RenshuuFont".to_string()
}

pub(crate) fn to_unicode_cmap(glyphs: &BTreeMap<u16, String>) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let entries: Vec<_> = glyphs.iter().collect();
    for block in entries.chunks(BFCHAR_BLOCK) {
        cmap.push_str(&format!("{} beginbfchar\n", block.len()));
        for (gid, text) in block {
            let utf16: String = text
                .encode_utf16()
                .map(|unit| format!("{:04X}", unit))
                .collect();
            cmap.push_str(&format!("<{:04X}> <{}>\n", gid, utf16));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );
    cmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use renshuu_font::test_font::{TEST_ADVANCE, TestFontBuilder};
    use std::sync::Arc;

    fn embedded(chars: &str, display: &str) -> EmbeddedFont {
        let data = TestFontBuilder::new().chars(chars).build();
        let descriptor = FontDescriptor::new(Arc::new(data), "kana.ttf", display);
        EmbeddedFont::new(&descriptor, "F1".into()).unwrap()
    }

    #[test]
    fn encodes_glyph_ids_big_endian() {
        let mut font = embedded("あい", "Kana");
        assert_eq!(font.encode("いあ").unwrap(), vec![0, 2, 0, 1]);
        assert_eq!(font.used_glyphs.get(&1).map(String::as_str), Some("あ"));
    }

    #[test]
    fn missing_glyphs_map_to_notdef() {
        let mut font = embedded("A", "Latin");
        assert_eq!(font.encode("Z").unwrap(), vec![0, 0]);
        assert!(font.used_glyphs.is_empty());
    }

    #[test]
    fn middle_offset_uses_vertical_metrics() {
        let font = embedded("A", "Latin");
        // (800 + -200) / 2 / 1000 * 10
        assert!((font.middle_offset(10.0) - 3.0).abs() < 1e-5);
        assert!((font.ascent(10.0) - 8.0).abs() < 1e-5);
        assert_eq!(font.to_pdf_units(TEST_ADVANCE as i32), 500);
    }

    #[test]
    fn base_font_names_are_pdf_safe() {
        assert_eq!(base_font_name("Klee One Regular", "k.ttf"), "KleeOneRegular");
        assert_eq!(base_font_name("はんなり明朝", "Hannari.otf"), "Hannari");
        assert_eq!(base_font_name("(/)", "字.ttf"), "RenshuuFont");
    }

    #[test]
    fn cmap_lists_used_glyphs() {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(1u16, "A".to_string());
        glyphs.insert(7u16, "𠀋".to_string());
        let cmap = to_unicode_cmap(&glyphs);
        assert!(cmap.contains("2 beginbfchar\n<0001> <0041>\n<0007> <D840DC0B>\n"));
    }

    #[test]
    fn cmap_blocks_hold_at_most_one_hundred_entries() {
        let glyphs: BTreeMap<u16, String> = (1..=150u16).map(|g| (g, "a".to_string())).collect();
        let cmap = to_unicode_cmap(&glyphs);
        assert!(cmap.contains("100 beginbfchar"));
        assert!(cmap.contains("50 beginbfchar"));
    }

    #[test]
    fn rejects_unparseable_font() {
        let descriptor = FontDescriptor::new(Arc::new(vec![1, 2, 3]), "bad.ttf", "Bad");
        assert!(matches!(
            EmbeddedFont::new(&descriptor, "F1".into()),
            Err(RenderError::Font(_))
        ));
    }
}
