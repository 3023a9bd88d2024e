//! Text decoding: BOM handling, encoding fallback and newline normalization.

use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Decoded text plus the encoding it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Text with `\n` line endings and no BOM.
    pub text: String,
    /// Encoding label (`utf-8` or `windows-1252`).
    pub encoding: &'static str,
}

/// Decode raw bytes into normalized text.
///
/// UTF-8 (with or without BOM) is decoded as is. Anything that is not valid
/// UTF-8 is read as Windows-1252, which never fails.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    let (text, encoding) = match UTF_8.decode_with_bom_removal(bytes) {
        (text, false) => (text, "utf-8"),
        (_, true) => {
            tracing::warn!("input is not valid UTF-8, decoding as windows-1252");
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            (text, "windows-1252")
        }
    };

    DecodedText {
        text: normalize_newlines(&text).into_owned(),
        encoding,
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
