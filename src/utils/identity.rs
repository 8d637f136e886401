//! Normalization of login identifiers and generation of booking ids.

use uuid::Uuid;

use crate::constants::{
    BOOKING_ID_MAX_LEN, BOOKING_ID_PREFIX, ERROR_BOOKING_ID_BLANK, ERROR_PHONE_REQUIRED, PHONE_NUMBER_MAX_LEN,
};
use crate::error::{Result, StoreError};

/// Trim and validate a phone number.
///
/// Accepts ASCII digits with an optional leading `+`, up to
/// [`PHONE_NUMBER_MAX_LEN`] characters.
pub fn normalize_phone(phone_number: &str) -> Result<String> {
    let phone = phone_number.trim();
    if phone.is_empty() {
        return Err(StoreError::validation(ERROR_PHONE_REQUIRED));
    }
    if phone.chars().count() > PHONE_NUMBER_MAX_LEN {
        return Err(StoreError::Validation(format!(
            "phone number must be at most {} characters, got {}",
            PHONE_NUMBER_MAX_LEN,
            phone.chars().count()
        )));
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(StoreError::Validation(format!("invalid phone number '{}'", phone)));
    }

    Ok(phone.to_string())
}

/// Lower-case the domain part of an email address.
///
/// Blank input is treated as "no email".
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    let email = email?.trim();
    if email.is_empty() {
        return None;
    }

    match email.rsplit_once('@') {
        Some((local, domain)) => Some(format!("{}@{}", local, domain.to_lowercase())),
        None => Some(email.to_string()),
    }
}

/// Generate a fresh booking correlation id such as `BK3F2A9C01D4E5`.
pub fn generate_booking_id() -> String {
    let simple = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}{}", BOOKING_ID_PREFIX, &simple[..12])
}

/// Trim a booking id supplied for an existing booking.
///
/// Unlike [`booking_id_or_generate`] a blank value is rejected.
pub fn check_booking_id(booking_id: &str) -> Result<String> {
    let id = booking_id.trim();
    if id.is_empty() {
        return Err(StoreError::validation(ERROR_BOOKING_ID_BLANK));
    }
    if id.len() > BOOKING_ID_MAX_LEN {
        return Err(StoreError::Validation(format!(
            "booking_id must be at most {} characters",
            BOOKING_ID_MAX_LEN
        )));
    }
    Ok(id.to_string())
}

/// Use the supplied booking id or generate one when it is missing or blank.
pub fn booking_id_or_generate(booking_id: Option<String>) -> Result<String> {
    match booking_id {
        Some(id) if !id.trim().is_empty() => check_booking_id(&id),
        _ => Ok(generate_booking_id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone(" 9999999999 ").unwrap(), "9999999999");
        assert_eq!(normalize_phone("+919999999999").unwrap(), "+919999999999");
        assert!(matches!(normalize_phone(""), Err(StoreError::Validation(_))));
        assert!(matches!(normalize_phone("   "), Err(StoreError::Validation(_))));
        assert!(matches!(normalize_phone("99999-99999"), Err(StoreError::Validation(_))));
        assert!(matches!(normalize_phone("1234567890123"), Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email(Some("Ravi.Kumar@Example.COM")),
            Some("Ravi.Kumar@example.com".to_string())
        );
        assert_eq!(normalize_email(Some("  ")), None);
        assert_eq!(normalize_email(None), None);
        assert_eq!(normalize_email(Some("no-at-sign")), Some("no-at-sign".to_string()));
    }

    #[test]
    fn test_booking_ids() {
        let id = generate_booking_id();
        assert!(id.starts_with(BOOKING_ID_PREFIX));
        assert_eq!(id.len(), BOOKING_ID_PREFIX.len() + 12);
        assert_ne!(id, generate_booking_id());

        assert_eq!(booking_id_or_generate(Some(" BK1 ".to_string())).unwrap(), "BK1");
        assert!(booking_id_or_generate(Some(String::new())).unwrap().starts_with(BOOKING_ID_PREFIX));
        assert!(booking_id_or_generate(Some("X".repeat(101))).is_err());
    }

    #[test]
    fn test_check_booking_id() {
        assert_eq!(check_booking_id(" BK2 ").unwrap(), "BK2");
        assert!(matches!(check_booking_id(""), Err(StoreError::Validation(msg)) if msg == ERROR_BOOKING_ID_BLANK));
        assert!(matches!(check_booking_id("  "), Err(StoreError::Validation(_))));
        assert!(matches!(check_booking_id(&"X".repeat(101)), Err(StoreError::Validation(_))));
    }
}
