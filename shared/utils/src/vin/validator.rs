//! VIN Validator
//!
//! Structural validation, ISO 3779 check-digit computation and WMI
//! resolution for 17-character Vehicle Identification Numbers.

use motolens_models::{ManufacturerMatch, ValidationResult, VinErrorKind};

use super::wmi;

pub const VIN_LENGTH: usize = 17;

const CHECK_DIGIT_INDEX: usize = 8;

const POSITION_WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a typed or scanned VIN.
///
/// Input is trimmed and ASCII-uppercased first, so non-ASCII characters are
/// kept as-is and rejected by the charset check. Structural problems are
/// returned as a failed result carrying a [`VinErrorKind`]. A check-digit mismatch is
/// not a failure: many non-US VINs do not use the North American check
/// digit, so the result stays valid with `checksum_valid` cleared and the
/// mismatch is only logged.
pub fn validate(raw: &str) -> ValidationResult {
    let normalized = raw.trim().to_ascii_uppercase();

    if normalized.is_empty() {
        tracing::debug!("VIN rejected: empty input");
        return ValidationResult::failure(VinErrorKind::Missing);
    }

    // I, O and Q are rejected at any length
    if normalized.chars().any(is_forbidden) {
        tracing::debug!(vin = %normalized, "VIN rejected: contains I, O or Q");
        return ValidationResult::failure(VinErrorKind::ForbiddenCharacter);
    }

    let actual = normalized.chars().count();
    if actual != VIN_LENGTH {
        tracing::debug!(vin = %normalized, actual, "VIN rejected: wrong length");
        return ValidationResult::failure(VinErrorKind::WrongLength { actual });
    }

    if !normalized.chars().all(is_vin_char) {
        tracing::debug!(vin = %normalized, "VIN rejected: invalid charset");
        return ValidationResult::failure(VinErrorKind::InvalidCharset);
    }

    let expected = compute_check_digit(&normalized);
    let actual_digit = normalized.chars().nth(CHECK_DIGIT_INDEX);
    let checksum_valid = expected.is_some() && expected == actual_digit;

    if !checksum_valid {
        tracing::warn!(
            vin = %normalized,
            expected = ?expected,
            actual = ?actual_digit,
            "VIN check digit mismatch, accepting VIN"
        );
    }

    ValidationResult::success(normalized, checksum_valid)
}

/// Compute the expected check digit (`0`-`9` or `X`) for a VIN.
///
/// Returns `None` unless the input is 17 characters from the VIN alphabet.
/// Position 9 carries weight zero, so its current value does not matter.
pub fn compute_check_digit(vin: &str) -> Option<char> {
    if vin.chars().count() != VIN_LENGTH {
        return None;
    }

    let mut sum = 0u32;
    for (c, weight) in vin.chars().zip(POSITION_WEIGHTS) {
        sum += transliterate(c)? * weight;
    }

    match sum % 11 {
        10 => Some('X'),
        remainder => char::from_digit(remainder, 10),
    }
}

/// First three characters, ASCII-uppercased.
pub fn extract_wmi(vin: &str) -> String {
    vin.trim().chars().take(3).collect::<String>().to_ascii_uppercase()
}

/// Resolve the manufacturer from the VIN prefix.
///
/// Works on partial input: three characters are looked up exactly, then the
/// two-character region table is consulted.
pub fn identify_manufacturer(vin: &str) -> ManufacturerMatch {
    let prefix: String = vin.trim().to_ascii_uppercase().chars().take(3).collect();

    if prefix.chars().count() == 3 {
        if let Some(manufacturer) = wmi::lookup(&prefix) {
            return ManufacturerMatch::found(manufacturer);
        }
    }

    let region: String = prefix.chars().take(2).collect();
    if region.chars().count() == 2 {
        if let Some(manufacturer) = wmi::lookup_region(&region) {
            return ManufacturerMatch::found(manufacturer);
        }
    }

    ManufacturerMatch::none()
}

fn is_forbidden(c: char) -> bool {
    matches!(c, 'I' | 'O' | 'Q')
}

fn is_vin_char(c: char) -> bool {
    c.is_ascii_digit() || (c.is_ascii_uppercase() && !is_forbidden(c))
}

/// ISO 3779 transliteration. Letters map to 1-9 with I, O and Q excluded.
fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => return c.to_digit(10),
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_us_vin() {
        let result = validate("1HGCM82633A004352");
        assert!(result.valid);
        assert!(result.checksum_valid);
        assert!(result.error.is_none());
        assert_eq!(result.normalized_vin.as_deref(), Some("1HGCM82633A004352"));
    }

    #[test]
    fn test_normalizes_whitespace_and_case() {
        let result = validate("  1hgcm82633a004352\n");
        assert!(result.valid);
        assert_eq!(result.normalized_vin.as_deref(), Some("1HGCM82633A004352"));
    }

    #[test]
    fn test_checksum_mismatch_is_lenient() {
        // position 9 changed from 3 to 4
        let result = validate("1HGCM82643A004352");
        assert!(result.valid);
        assert!(!result.checksum_valid);
        assert!(result.error.is_none());
        assert_eq!(result.normalized_vin.as_deref(), Some("1HGCM82643A004352"));
    }

    #[test]
    fn test_letter_check_digit_is_lenient() {
        // European VINs often carry a letter at position 9
        let result = validate("WBADT634ZZCK12345");
        assert!(result.valid);
        assert!(!result.checksum_valid);
    }

    #[test]
    fn test_missing() {
        let result = validate("   ");
        assert!(!result.valid);
        assert_eq!(result.error, Some(VinErrorKind::Missing));
        assert_eq!(result.message.as_deref(), Some("VIN is required"));
    }

    #[test]
    fn test_wrong_length() {
        let result = validate("WBADT63452CK1234");
        assert_eq!(result.error, Some(VinErrorKind::WrongLength { actual: 16 }));

        let result = validate("WBADT63452CK123456");
        assert_eq!(result.error, Some(VinErrorKind::WrongLength { actual: 18 }));
    }

    #[test]
    fn test_forbidden_characters() {
        for vin in ["1HGCM82633A00435I", "1HGCM82633A00435o", "Q", "WBAOT"] {
            let result = validate(vin);
            assert!(!result.valid);
            assert_eq!(result.error, Some(VinErrorKind::ForbiddenCharacter), "{}", vin);
        }
    }

    #[test]
    fn test_invalid_charset() {
        let result = validate("1HGCM82633A00435-");
        assert!(!result.valid);
        assert_eq!(result.error, Some(VinErrorKind::InvalidCharset));

        let result = validate("1HGCM82633A 04352");
        assert_eq!(result.error, Some(VinErrorKind::InvalidCharset));
    }

    #[test]
    fn test_non_ascii_letters_are_not_expanded() {
        // 'ß' must not uppercase to "SS" and pad the length to 17
        let result = validate("1HGCM82633A0043ß");
        assert!(!result.valid);
        assert_eq!(result.error, Some(VinErrorKind::WrongLength { actual: 16 }));

        let result = validate("1HGCM82633A00435ß");
        assert!(!result.valid);
        assert_eq!(result.error, Some(VinErrorKind::InvalidCharset));
        assert!(result.normalized_vin.is_none());

        let result = validate("1hgcm82633a00435é");
        assert_eq!(result.error, Some(VinErrorKind::InvalidCharset));
    }

    #[test]
    fn test_compute_check_digit() {
        assert_eq!(compute_check_digit("1HGCM82633A004352"), Some('3'));
        assert_eq!(compute_check_digit("1M8GDM9AXKP042788"), Some('X'));
        assert_eq!(compute_check_digit("SHORT"), None);
        assert_eq!(compute_check_digit("1HGCM82633A00435!"), None);
    }

    #[test]
    fn test_extract_wmi() {
        assert_eq!(extract_wmi("WBADT63452CK12345"), "WBA");
        assert_eq!(extract_wmi("wbadt63452ck12345"), "WBA");
        assert_eq!(extract_wmi("WB"), "WB");
        assert_eq!(extract_wmi("ßßß").chars().count(), 3);
    }

    #[test]
    fn test_identify_manufacturer() {
        assert_eq!(
            identify_manufacturer("WBADT63452CK12345"),
            ManufacturerMatch::found("BMW")
        );
        assert_eq!(
            identify_manufacturer("wp0zzz99zts392124"),
            ManufacturerMatch::found("Porsche")
        );
    }

    #[test]
    fn test_identify_manufacturer_region_fallback() {
        // unknown third character, known region
        assert_eq!(identify_manufacturer("WDZ"), ManufacturerMatch::found("Mercedes-Benz"));
        // partial input while typing
        assert_eq!(identify_manufacturer("WV"), ManufacturerMatch::found("Volkswagen"));
    }

    #[test]
    fn test_identify_manufacturer_no_match() {
        assert_eq!(identify_manufacturer("ZZZ12345"), ManufacturerMatch::none());
        assert_eq!(identify_manufacturer("W"), ManufacturerMatch::none());
        assert_eq!(identify_manufacturer("ßBA"), ManufacturerMatch::none());
        assert_eq!(identify_manufacturer(""), ManufacturerMatch::none());
    }
}
