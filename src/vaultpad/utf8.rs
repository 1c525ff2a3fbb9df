//! # UTF-8 Codec
//!
//! Small helpers the editing engine uses to append and remove whole characters.
//! Input arrives as raw codepoints (from a keyboard or a terminal), and deletion
//! has to remove exactly one character no matter how many bytes it occupies.

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// The UTF-8 bytes of a single codepoint, kept on the stack.
///
/// An empty `Encoded` means the codepoint could not be encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoded {
    bytes: [u8; 4],
    len: u8,
}

impl Encoded {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Encode a codepoint as 1 to 4 UTF-8 bytes.
///
/// Values above [`MAX_CODEPOINT`] and surrogates (`0xD800..=0xDFFF`) are not
/// scalar values and yield an empty encoding.
pub fn encode(codepoint: u32) -> Encoded {
    match char::from_u32(codepoint) {
        Some(c) => {
            let mut bytes = [0u8; 4];
            let len = c.encode_utf8(&mut bytes).len();
            Encoded {
                bytes,
                len: len as u8,
            }
        }
        None => Encoded::default(),
    }
}

/// Decode exactly one complete character.
///
/// Returns `None` for empty input, malformed sequences, or more than one char.
pub fn decode(bytes: &[u8]) -> Option<u32> {
    let s = std::str::from_utf8(bytes).ok()?;
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(c as u32)
}

/// True for bytes of the form `0b10xx_xxxx`.
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Byte length of the last character in `bytes`, 0 when empty.
///
/// Walks backward over continuation bytes until it reaches the lead byte.
pub fn last_char_len(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    let mut start = bytes.len() - 1;
    while start > 0 && is_continuation(bytes[start]) {
        start -= 1;
    }
    bytes.len() - start
}
