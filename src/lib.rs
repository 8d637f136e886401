//! Truckbook - data layer for a logistics booking service
//!
//! This library stores customer accounts, signup verification and bookings
//! for three service lines: house shifting, vehicle shifting and warehouse
//! storage, plus the orders placed against them. Everything is persisted in
//! SQLite through SeaORM.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Table definitions and relations
//! * [`repositories`] - Per-entity queries and validation
//! * [`storage`] - Connection, schema and multi-table flows
//! * [`utils`] - Phone/email normalization, password hashing and OTPs

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error type shared by repositories and the store
pub mod error;

/// Logging setup backed by fern
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Booking store: connection, schema and cross-table flows
pub mod storage;

/// Utility functions for identifiers, passwords and OTPs
pub mod utils;

pub use entities::order_booking::BookedService;
pub use entities::{InventoryItem, ItemCategory};
pub use error::{Result, StoreError};
pub use storage::{BookingStore, StoreSummary};
