//! Input sanitization for caller-supplied strings.

/// Maximum length for free-form identifiers (athlete id, test type).
pub const MAX_IDENTIFIER_LENGTH: usize = 200;

/// Maximum length kept from an uploaded filename.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Sanitize a free-form identifier: strip control characters, collapse
/// surrounding whitespace, and cap the length.
pub fn sanitize_identifier(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_IDENTIFIER_LENGTH)
        .collect();
    cleaned.trim().to_string()
}

/// Reduce an uploaded filename to a safe basename.
///
/// Anything before the last path separator is discarded so a crafted
/// filename cannot escape the analysis directory.
pub fn sanitize_filename(input: &str) -> String {
    let basename = input
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input);
    basename
        .chars()
        .filter(|c| !c.is_control() && *c != '\0')
        .take(MAX_FILENAME_LENGTH)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier_strips_controls() {
        assert_eq!(sanitize_identifier("ath\n-\t1"), "ath-1");
        assert_eq!(sanitize_identifier("  vertical_jump  "), "vertical_jump");
    }

    #[test]
    fn test_sanitize_identifier_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_identifier(&long).len(), MAX_IDENTIFIER_LENGTH);
    }

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/tmp/clip.mp4"), "clip.mp4");
        assert_eq!(sanitize_filename("C:\\videos\\clip.mp4"), "clip.mp4");
        assert_eq!(sanitize_filename("clip.mp4"), "clip.mp4");
    }
}
