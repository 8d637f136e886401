//! Utility helpers shared by the repositories.

pub mod identity;
pub mod otp;
pub mod password;
