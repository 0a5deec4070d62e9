/// Offset between full-width digits (U+FF10..U+FF19) and ASCII digits.
const FULLWIDTH_DIGIT_OFFSET: u32 = 0xFEE0;

/// Outcome of validating a normalized postal code.
///
/// Empty input and wrong-length input carry distinct user-facing messages,
/// so they are separate variants rather than one "invalid" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipValidation {
    Valid,
    Empty,
    WrongLength,
}

/// Normalize raw keystrokes into an ASCII-digit string.
///
/// Full-width digits (as produced by Japanese IMEs) are mapped to ASCII;
/// every other character, including hyphens, is stripped. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '\u{FF10}'..='\u{FF19}' => char::from_u32(c as u32 - FULLWIDTH_DIGIT_OFFSET),
            _ => None,
        })
        .collect()
}

/// Validate a normalized code. Only exactly seven digits is valid.
pub fn validate(code: &str) -> ZipValidation {
    if code.is_empty() {
        ZipValidation::Empty
    } else if code.len() != 7 {
        ZipValidation::WrongLength
    } else {
        ZipValidation::Valid
    }
}

/// Format a 7-digit code as `NNN-NNNN`.
///
/// Anything that is not seven ASCII characters is returned unchanged; the
/// fallback exists for untrusted service-provided codes, not the normal path.
pub fn format_zip(zip: &str) -> String {
    if zip.len() == 7 && zip.is_ascii() {
        format!("{}-{}", &zip[..3], &zip[3..])
    } else {
        zip.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fullwidth() {
        assert_eq!(normalize("１２３"), "123");
        assert_eq!(normalize("１２３４５６７"), "1234567");
        // Mixed full-width/ASCII with a hyphen
        assert_eq!(normalize("１23-４567"), "1234567");
    }

    #[test]
    fn test_normalize_strips_non_digits() {
        assert_eq!(normalize("123-4567"), "1234567");
        assert_eq!(normalize("〒123-4567"), "1234567");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["１２３", "123-4567", "〒１００−０００１", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(""), ZipValidation::Empty);
        assert_eq!(validate("123"), ZipValidation::WrongLength);
        assert_eq!(validate("12345678"), ZipValidation::WrongLength);
        assert_eq!(validate("1234567"), ZipValidation::Valid);
    }

    #[test]
    fn test_format_zip() {
        assert_eq!(format_zip("1234567"), "123-4567");
        // Defensive pass-through for unexpected lengths
        assert_eq!(format_zip("123"), "123");
        assert_eq!(format_zip(""), "");
        assert_eq!(format_zip("12345678"), "12345678");
    }
}
