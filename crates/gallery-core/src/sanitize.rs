//! Control-character sanitization for regenerated documents
//!
//! DOCX content lives in XML, and XML 1.0 cannot encode most control
//! characters. Text destined for a regenerated document passes through
//! [`sanitize_for_xml`] first.

/// Replace control characters that are invalid in XML with a single space.
///
/// Tab, newline, and carriage return are the only characters below U+0020
/// that XML permits; everything else in that range (including NUL) becomes
/// a space.
#[must_use = "returns the sanitized text"]
pub fn sanitize_for_xml(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c >= '\u{20}' || matches!(c, '\t' | '\n' | '\r') {
                c
            } else {
                ' '
            }
        })
        .collect()
}
