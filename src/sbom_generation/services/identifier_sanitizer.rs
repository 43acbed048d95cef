/// IdentifierSanitizer service for the human-readable part of SPDX identifiers
///
/// SPDX element identifiers only allow letters, digits, `.` and `-`. Every
/// other character is replaced with `-`, one for one, so the character count
/// is preserved. PURL fields are never sanitized; they are percent-encoded.
pub struct IdentifierSanitizer;

impl IdentifierSanitizer {
    pub fn sanitize(value: &str) -> String {
        value
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}
