//! Text-or-binary classification for byte content.

/// Classify `data` as displayable text (`true`) or binary (`false`).
///
/// Follows the WHATWG MIME sniffing definition of a binary data byte
/// (mimesniff.spec.whatwg.org#binary-data-byte): any C0 control code
/// other than TAB, LF, FF, CR, and ESC marks the content as binary.
/// Content that clears the control-byte scan must still be valid UTF-8.
/// Empty input is text.
pub fn is_text(data: &[u8]) -> bool {
    for &byte in data {
        if matches!(byte, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F) {
            return false;
        }
    }
    std::str::from_utf8(data).is_ok()
}
