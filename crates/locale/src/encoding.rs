//! Text in the Windows-1252 output encoding.

use std::fmt;

use encoding_rs::WINDOWS_1252;
use serde::{Serialize, Serializer};
use tracing::debug;

/// An owned Windows-1252 byte string.
///
/// Every human-readable field handed to the renderer is stored in this
/// form. Characters outside the code page are replaced by the encoder's
/// numeric character references (`&#NNNN;`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedText(Vec<u8>);

/// Converts UTF-8 text to Windows-1252.
pub fn encode_text(text: &str) -> EncodedText {
    let (bytes, _, had_unmappable) = WINDOWS_1252.encode(text);
    if had_unmappable {
        debug!(text, "replaced characters outside windows-1252");
    }
    EncodedText(bytes.into_owned())
}

impl EncodedText {
    /// Returns the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length in bytes (one byte per character).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first `n` bytes, or the whole text if it is shorter.
    pub fn truncated(&self, n: usize) -> EncodedText {
        EncodedText(self.0[..n.min(self.0.len())].to_vec())
    }

    /// Decodes back to UTF-8 for display and serialization.
    pub fn to_utf8(&self) -> String {
        let (text, _) = WINDOWS_1252.decode_without_bom_handling(&self.0);
        text.into_owned()
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

impl Serialize for EncodedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_utf8())
    }
}
