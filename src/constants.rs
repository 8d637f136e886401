//! Constants used throughout the crate
//!
//! Field limits, defaults and log/error message text live here so the
//! repositories and the configuration layer agree on them.

// Field limits
/// Maximum length of a phone number (login identifier)
pub const PHONE_NUMBER_MAX_LEN: usize = 12;
/// Maximum length of a user or registration name
pub const USER_NAME_MAX_LEN: usize = 100;
/// Maximum length of a booking correlation id
pub const BOOKING_ID_MAX_LEN: usize = 100;

// Booking ids
pub const BOOKING_ID_PREFIX: &str = "BK";

// Registration defaults
pub const DEFAULT_OTP_LENGTH: usize = 6;
pub const MIN_OTP_LENGTH: usize = 4;
pub const MAX_OTP_LENGTH: usize = 10;
pub const DEFAULT_OTP_TTL_MINUTES: u64 = 10;
/// Upper bound for the OTP lifetime (24 hours)
pub const MAX_OTP_TTL_MINUTES: u64 = 1440;

// Database defaults
pub const DEFAULT_DATABASE_FILE: &str = "truckbook.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

// Validation Error Messages
pub const ERROR_PHONE_REQUIRED: &str = "The given phone number must be set";
pub const ERROR_SUPERUSER_STAFF: &str = "Superuser must have is_staff=True.";
pub const ERROR_SUPERUSER_FLAG: &str = "Superuser must have is_superuser=True.";
pub const ERROR_PASSWORD_MISMATCH: &str = "The two password fields didn't match";
pub const ERROR_CONSENT_REQUIRED: &str = "Terms and conditions and privacy policy must be accepted";
pub const ERROR_OTP_EXPIRED: &str = "OTP has expired, request a new one";
pub const ERROR_OTP_INVALID: &str = "OTP does not match";
pub const ERROR_NOT_VERIFIED: &str = "Registration has not been verified";
pub const ERROR_BOOKING_ID_BLANK: &str = "booking_id must not be blank";
pub const ERROR_OTP_REQUIRED: &str = "OTP must be provided";

// Log Messages
pub const LOG_SCHEMA_READY: &str = "✅ Booking schema ready";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
