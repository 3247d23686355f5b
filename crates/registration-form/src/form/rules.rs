//! Per-field validation rules.
//!
//! Every rule is pure and total: input is expected to be trimmed already,
//! and failure is only ever reported through [`ValidationResult`].

use regex::Regex;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s]+$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// CURP layout: 4 letters, birth date, sex marker, 5 letters, homoclave, check digit.
static NATIONAL_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-9]{6}[HM][A-Z]{5}[0-9A-Z][0-9]$").unwrap()
});

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const NATIONAL_ID_LEN: usize = 18;
const MIN_NAME_LEN: usize = 2;

/// Verdict of a single validation rule.
///
/// The message is empty exactly when the value is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty());
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Given name: required, at least two characters, letters and spaces only.
pub fn validate_given_name(name: &str) -> ValidationResult {
    if char_len(name) < MIN_NAME_LEN {
        return ValidationResult::invalid("name required, min 2 chars");
    }
    if !NAME_REGEX.is_match(name) {
        return ValidationResult::invalid("letters and spaces only");
    }
    ValidationResult::valid()
}

/// Surname: may be empty when not required; otherwise letters and spaces,
/// at least two characters.
pub fn validate_surname(surname: &str, required: bool) -> ValidationResult {
    if surname.is_empty() {
        if required {
            return ValidationResult::invalid("surname required");
        }
        return ValidationResult::valid();
    }
    if !NAME_REGEX.is_match(surname) {
        return ValidationResult::invalid("letters and spaces only");
    }
    if char_len(surname) < MIN_NAME_LEN {
        return ValidationResult::invalid("min 2 chars");
    }
    ValidationResult::valid()
}

/// Phone: exactly ten ASCII digits, no separators or country code.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::invalid("phone required");
    }
    if !PHONE_REGEX.is_match(phone) {
        return ValidationResult::invalid("must be exactly 10 digits");
    }
    ValidationResult::valid()
}

/// National ID (CURP): 18 characters, matched case-insensitively.
///
/// A value of the wrong length never reaches the pattern test.
pub fn validate_national_id(id: &str) -> ValidationResult {
    if id.is_empty() {
        return ValidationResult::invalid("id required");
    }
    if char_len(id) != NATIONAL_ID_LEN {
        return ValidationResult::invalid("must be exactly 18 characters");
    }
    if !NATIONAL_ID_REGEX.is_match(&id.to_uppercase()) {
        return ValidationResult::invalid("invalid format");
    }
    ValidationResult::valid()
}

/// Email: `local@domain.tld` shape with no whitespace.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::invalid("email required");
    }
    if !EMAIL_REGEX.is_match(email) {
        return ValidationResult::invalid("invalid email format");
    }
    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_invariant() {
        let ok = ValidationResult::valid();
        assert!(ok.is_valid());
        assert!(ok.message().is_empty());

        let bad = ValidationResult::invalid("nope");
        assert!(!bad.is_valid());
        assert_eq!(bad.message(), "nope");
    }

    #[test]
    fn test_given_name_too_short() {
        for name in ["", "A", "ñ", " "] {
            let result = validate_given_name(name);
            assert!(!result.is_valid(), "{name:?} should be rejected");
            assert_eq!(result.message(), "name required, min 2 chars");
        }
    }

    #[test]
    fn test_given_name_charset() {
        assert!(validate_given_name("José María").is_valid());
        assert!(validate_given_name("Óscar").is_valid());
        assert!(validate_given_name("Begoña Üribe").is_valid());

        for name in ["Ana1", "R2D2", "Jean-Luc", "O'Neil", "Ana_", "Zoë"] {
            let result = validate_given_name(name);
            assert!(!result.is_valid(), "{name:?} should be rejected");
            assert_eq!(result.message(), "letters and spaces only");
        }
    }

    #[test]
    fn test_surname_required_and_optional() {
        let result = validate_surname("", true);
        assert!(!result.is_valid());
        assert_eq!(result.message(), "surname required");

        assert!(validate_surname("", false).is_valid());
        assert!(validate_surname("Hernández", true).is_valid());
        assert!(validate_surname("de la Cruz", false).is_valid());
    }

    #[test]
    fn test_surname_charset_checked_before_length() {
        assert_eq!(validate_surname("7", false).message(), "letters and spaces only");
        assert_eq!(validate_surname("Q", false).message(), "min 2 chars");
        assert_eq!(validate_surname("Q", true).message(), "min 2 chars");
        assert_eq!(validate_surname("Smith3", true).message(), "letters and spaces only");
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("5551234567").is_valid());

        assert_eq!(validate_phone("").message(), "phone required");
        for phone in ["555-123-4567", "12345", "555 123 4567", "+525551234567", "55512345678", "555123456a"] {
            assert_eq!(
                validate_phone(phone).message(),
                "must be exactly 10 digits",
                "{phone:?}"
            );
        }
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not accepted.
        assert!(!validate_phone("٥٥٥١٢٣٤٥٦٧").is_valid());
    }

    #[test]
    fn test_national_id_valid() {
        assert!(validate_national_id("ABCD123456HDFLNS09").is_valid());
        assert!(validate_national_id("PENM900101MDFRXR05").is_valid());
    }

    #[test]
    fn test_national_id_case_insensitive() {
        assert!(validate_national_id("abcd123456hdflns09").is_valid());
        assert!(validate_national_id("AbCd123456mDfLnSa9").is_valid());
    }

    #[test]
    fn test_national_id_length_gate() {
        assert_eq!(validate_national_id("").message(), "id required");
        assert_eq!(
            validate_national_id("short").message(),
            "must be exactly 18 characters"
        );
        assert_eq!(
            validate_national_id("ABCD123456HDFLNS091").message(),
            "must be exactly 18 characters"
        );
        // Garbage of the wrong length reports length, not format.
        assert_eq!(
            validate_national_id("!!!!").message(),
            "must be exactly 18 characters"
        );
    }

    #[test]
    fn test_national_id_format() {
        for id in [
            "ABC1123456HDFLNS09", // digit among the leading letters
            "ABCD123456XDFLNS09", // sex marker not H/M
            "ABCD123456HDFLNS0A", // check digit not numeric
            "ABCD12345AHDFLNS09", // letter in the date block
            "ABCD123456HDFLN109", // digit in the letter block
        ] {
            assert_eq!(validate_national_id(id).message(), "invalid format", "{id}");
        }
    }

    #[test]
    fn test_email() {
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("first.last@sub.example.mx").is_valid());

        assert_eq!(validate_email("").message(), "email required");
        for email in ["a@b", "a b@c.com", "a@b .com", "@b.com", "a@.com", "a@b.", "a@@b.com"] {
            assert_eq!(
                validate_email(email).message(),
                "invalid email format",
                "{email:?}"
            );
        }
    }
}
