//! Booking store: connection management, schema setup and the flows that
//! span several repositories.
//!
//! This module provides:
//! - Schema creation from the entity definitions
//! - Signup completion (registration, user and profile in one transaction)
//! - Order placement and completion

pub mod accounts;
pub mod bookings;
pub mod db;

pub use db::{BookingStore, StoreSummary};
