//! Builds tiny but well-formed TrueType fonts for tests.
//!
//! The fonts carry `head`, `hhea`, `maxp`, `hmtx`, `cmap` (format 12) and
//! optionally `name`. They have no outlines, which is enough for parsing,
//! glyph lookup, width queries and embedding.

/// Advance width of every glyph, in font units.
pub const TEST_ADVANCE: u16 = 500;
pub const TEST_UNITS_PER_EM: u16 = 1000;
pub const TEST_ASCENDER: i16 = 800;
pub const TEST_DESCENDER: i16 = -200;

#[derive(Debug, Clone)]
struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    /// Encoded record bytes.
    value: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct TestFontBuilder {
    names: Vec<NameRecord>,
    chars: Vec<char>,
    name_table: bool,
}

impl Default for TestFontBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFontBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            chars: Vec::new(),
            name_table: true,
        }
    }

    /// Adds a Windows (platform 3, UTF-16BE) name record.
    pub fn windows_name(mut self, name_id: u16, language_id: u16, value: &str) -> Self {
        self.names.push(NameRecord {
            platform_id: 3,
            encoding_id: 1,
            language_id,
            name_id,
            value: utf16_be(value),
        });
        self
    }

    /// Adds a Unicode (platform 0, UTF-16BE) name record.
    pub fn unicode_name(mut self, name_id: u16, value: &str) -> Self {
        self.names.push(NameRecord {
            platform_id: 0,
            encoding_id: 3,
            language_id: 0,
            name_id,
            value: utf16_be(value),
        });
        self
    }

    /// Adds a Macintosh Roman (platform 1) name record.
    pub fn mac_name(mut self, name_id: u16, language_id: u16, value: &str) -> Self {
        let (bytes, _, _) = encoding_rs::MACINTOSH.encode(value);
        self.names.push(NameRecord {
            platform_id: 1,
            encoding_id: 0,
            language_id,
            name_id,
            value: bytes.into_owned(),
        });
        self
    }

    /// Characters the font maps, each to its own glyph starting at id 1.
    pub fn chars(mut self, chars: &str) -> Self {
        for c in chars.chars() {
            if !self.chars.contains(&c) {
                self.chars.push(c);
            }
        }
        self
    }

    pub fn without_name_table(mut self) -> Self {
        self.name_table = false;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let num_glyphs = self.chars.len() as u16 + 1;

        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", self.cmap()),
            (*b"head", head()),
            (*b"hhea", hhea(num_glyphs)),
            (*b"hmtx", hmtx(num_glyphs)),
            (*b"maxp", maxp(num_glyphs)),
        ];
        if self.name_table {
            tables.push((*b"name", self.name()));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        let num_tables = tables.len() as u16;
        let mut entry_selector = 0u16;
        while (1u16 << (entry_selector + 1)) <= num_tables {
            entry_selector += 1;
        }
        let search_range = (1u16 << entry_selector) * 16;

        let mut out = Vec::new();
        put_u32(&mut out, 0x0001_0000);
        put_u16(&mut out, num_tables);
        put_u16(&mut out, search_range);
        put_u16(&mut out, entry_selector);
        put_u16(&mut out, num_tables * 16 - search_range);

        let mut offset = 12 + 16 * tables.len() as u32;
        let mut body = Vec::new();
        for (tag, data) in &tables {
            out.extend_from_slice(tag);
            put_u32(&mut out, checksum(data));
            put_u32(&mut out, offset);
            put_u32(&mut out, data.len() as u32);

            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
            offset = 12 + 16 * tables.len() as u32 + body.len() as u32;
        }
        out.extend_from_slice(&body);
        out
    }

    fn cmap(&self) -> Vec<u8> {
        let groups = self.chars.len() as u32;
        let mut t = Vec::new();
        put_u16(&mut t, 0); // version
        put_u16(&mut t, 1); // numTables
        put_u16(&mut t, 3); // Windows
        put_u16(&mut t, 10); // UCS-4
        put_u32(&mut t, 12);

        put_u16(&mut t, 12); // format
        put_u16(&mut t, 0);
        put_u32(&mut t, 16 + 12 * groups);
        put_u32(&mut t, 0); // language
        put_u32(&mut t, groups);
        for (i, c) in self.chars.iter().enumerate() {
            put_u32(&mut t, *c as u32);
            put_u32(&mut t, *c as u32);
            put_u32(&mut t, i as u32 + 1);
        }
        t
    }

    fn name(&self) -> Vec<u8> {
        let encoded: Vec<&[u8]> = self.names.iter().map(|r| r.value.as_slice()).collect();

        let count = self.names.len() as u16;
        let mut t = Vec::new();
        put_u16(&mut t, 0);
        put_u16(&mut t, count);
        put_u16(&mut t, 6 + 12 * count);

        let mut string_offset = 0u16;
        for (record, bytes) in self.names.iter().zip(&encoded) {
            put_u16(&mut t, record.platform_id);
            put_u16(&mut t, record.encoding_id);
            put_u16(&mut t, record.language_id);
            put_u16(&mut t, record.name_id);
            put_u16(&mut t, bytes.len() as u16);
            put_u16(&mut t, string_offset);
            string_offset += bytes.len() as u16;
        }
        for bytes in encoded {
            t.extend_from_slice(bytes);
        }
        t
    }
}

fn utf16_be(value: &str) -> Vec<u8> {
    value.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    put_u32(&mut t, 0x0001_0000); // version
    put_u32(&mut t, 0x0001_0000); // fontRevision
    put_u32(&mut t, 0); // checkSumAdjustment
    put_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    put_u16(&mut t, 0); // flags
    put_u16(&mut t, TEST_UNITS_PER_EM);
    t.extend_from_slice(&[0; 16]); // created, modified
    put_i16(&mut t, 0); // xMin
    put_i16(&mut t, TEST_DESCENDER); // yMin
    put_i16(&mut t, TEST_ADVANCE as i16); // xMax
    put_i16(&mut t, TEST_ASCENDER); // yMax
    put_u16(&mut t, 0); // macStyle
    put_u16(&mut t, 8); // lowestRecPPEM
    put_i16(&mut t, 2); // fontDirectionHint
    put_i16(&mut t, 0); // indexToLocFormat
    put_i16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    put_u32(&mut t, 0x0001_0000);
    put_i16(&mut t, TEST_ASCENDER);
    put_i16(&mut t, TEST_DESCENDER);
    put_i16(&mut t, 0); // lineGap
    put_u16(&mut t, TEST_ADVANCE); // advanceWidthMax
    put_i16(&mut t, 0); // minLeftSideBearing
    put_i16(&mut t, 0); // minRightSideBearing
    put_i16(&mut t, TEST_ADVANCE as i16); // xMaxExtent
    put_i16(&mut t, 1); // caretSlopeRise
    put_i16(&mut t, 0); // caretSlopeRun
    put_i16(&mut t, 0); // caretOffset
    t.extend_from_slice(&[0; 8]); // reserved
    put_i16(&mut t, 0); // metricDataFormat
    put_u16(&mut t, num_glyphs); // numberOfHMetrics
    t
}

fn hmtx(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    for _ in 0..num_glyphs {
        put_u16(&mut t, TEST_ADVANCE);
        put_i16(&mut t, 0);
    }
    t
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    put_u32(&mut t, 0x0000_5000);
    put_u16(&mut t, num_glyphs);
    t
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}
