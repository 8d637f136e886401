//! One-time passcodes for registration verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::constants::{MAX_OTP_LENGTH, MAX_OTP_TTL_MINUTES, MIN_OTP_LENGTH};

/// Generate a numeric OTP of `length` digits, clamped to the allowed range.
pub fn generate_otp(length: usize) -> String {
    let length = length.clamp(MIN_OTP_LENGTH, MAX_OTP_LENGTH);
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Whether an OTP issued at `issued_at` is past its lifetime at `now`.
pub fn is_expired(issued_at: DateTime<Utc>, ttl_minutes: u64, now: DateTime<Utc>) -> bool {
    let ttl = Duration::minutes(ttl_minutes.min(MAX_OTP_TTL_MINUTES) as i64);
    now - issued_at > ttl
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_otp() {
        let otp = generate_otp(6);
        assert_eq!(otp.len(), 6);
        assert!(otp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(generate_otp(0).len(), MIN_OTP_LENGTH);
        assert_eq!(generate_otp(64).len(), MAX_OTP_LENGTH);
    }

    #[test]
    fn test_is_expired() {
        let issued = Utc::now();
        assert!(!is_expired(issued, 10, issued + Duration::minutes(10)));
        assert!(is_expired(issued, 10, issued + Duration::minutes(11)));
        assert!(!is_expired(issued, 10, issued));
    }
}
