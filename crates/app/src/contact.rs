//! Contact / support form rules.
//!
//! Stateless like the item-entry rules: every violated rule contributes a
//! message, in rule order, and an empty list means the form may be sent.

use std::sync::LazyLock;

use regex::Regex;

use labstock_core::DomainError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static ROLL_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{3,8}$").unwrap());

/// Gate value printed on the paper form next to the field.
const SECURITY_CODE: i64 = 100;

const NAME_TOO_SHORT: &str = "Full Name must be at least 3 characters.";
const EMAIL_INVALID: &str = "Invalid Email format.";
const ROLL_INVALID: &str = "Roll/Employee ID must be 3-8 uppercase letters/numbers.";
const CODE_WRONG: &str = "Security Code must be a 3 digit number.";
const MESSAGE_TOO_SHORT: &str = "Detailed Message must contain at least 5 words.";

/// Raw contact form fields.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
    pub security_code: String,
    pub message: String,
}

/// Validate a contact submission; returns the full ordered violation list.
///
/// A non-numeric security code is a parse failure, reported before the
/// rule checks run.
pub fn validate_contact_form(form: &ContactForm) -> Result<Vec<String>, DomainError> {
    let raw_code = form.security_code.trim();
    let code: i64 = raw_code
        .parse()
        .map_err(|_| DomainError::parse("Security Code", raw_code))?;

    let mut errors = Vec::new();

    if form.full_name.trim().chars().count() < 3 {
        errors.push(NAME_TOO_SHORT.to_string());
    }
    if !EMAIL.is_match(form.email.trim()) {
        errors.push(EMAIL_INVALID.to_string());
    }
    if !ROLL_NUMBER.is_match(form.roll_number.trim()) {
        errors.push(ROLL_INVALID.to_string());
    }
    if code != SECURITY_CODE {
        errors.push(CODE_WRONG.to_string());
    }
    if form.message.split_whitespace().count() < 5 {
        errors.push(MESSAGE_TOO_SHORT.to_string());
    }

    Ok(errors)
}
