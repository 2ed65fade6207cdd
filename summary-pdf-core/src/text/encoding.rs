/// Byte substituted for characters outside Latin-1.
const REPLACEMENT_BYTE: u8 = b'?';

/// Single-byte text encodings supported by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// ISO-8859-1: code points U+0000..=U+00FF map to the byte of the same value
    #[default]
    Latin1,
}

impl TextEncoding {
    /// Encodes `text`, replacing unmappable characters with `?`.
    ///
    /// Never fails: the summary page is display-only, so a stray symbol
    /// degrades to `?` rather than aborting the document.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .map(|ch| match ch as u32 {
                    code @ 0x00..=0xFF => code as u8,
                    _ => REPLACEMENT_BYTE,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_unchanged() {
        let encoded = TextEncoding::Latin1.encode("BT /F1 9 Tf (abc) Tj ET\n");
        assert_eq!(encoded, b"BT /F1 9 Tf (abc) Tj ET\n".to_vec());
    }

    #[test]
    fn test_latin1_supplement_is_single_byte() {
        let encoded = TextEncoding::Latin1.encode("café ü");
        assert_eq!(encoded, vec![b'c', b'a', b'f', 0xE9, b' ', 0xFC]);
    }

    #[test]
    fn test_unmappable_characters_are_replaced() {
        let encoded = TextEncoding::Latin1.encode("a\u{2014}b \u{1F3B5}");
        assert_eq!(encoded, b"a?b ?".to_vec());
    }

    #[test]
    fn test_one_byte_per_char() {
        let text = "Needl \u{2192} Discogs \u{00A9}";
        assert_eq!(TextEncoding::Latin1.encode(text).len(), text.chars().count());
    }

    #[test]
    fn test_default_is_latin1() {
        assert_eq!(TextEncoding::default(), TextEncoding::Latin1);
    }
}
