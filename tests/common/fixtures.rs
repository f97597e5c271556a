use renshuu::InMemoryFontSource;
use renshuu_font::test_font::TestFontBuilder;

/// Hiragana used across the tests, one block each.
pub const KANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねの";

pub const FONT_FULL_NAME: &str = "Renshuu Test Kana";

/// A font with a Windows full name that maps every character of [`KANA`].
pub fn kana_font() -> InMemoryFontSource {
    let data = TestFontBuilder::new()
        .windows_name(4, 0x0409, FONT_FULL_NAME)
        .windows_name(1, 0x0409, "Renshuu Test")
        .chars(KANA)
        .build();
    InMemoryFontSource::new("renshuu-test.ttf", data)
}

/// A font that only carries a Macintosh family name.
pub fn mac_family_font() -> InMemoryFontSource {
    let data = TestFontBuilder::new()
        .mac_name(1, 0, "Foo")
        .chars(KANA)
        .build();
    InMemoryFontSource::new("foo.ttf", data)
}

/// The first `n` characters of [`KANA`], cycling if needed.
pub fn characters(n: usize) -> Vec<String> {
    KANA.chars().cycle().take(n).map(String::from).collect()
}
