//! Repository layer for database operations.
//!
//! Each repository is a unit struct whose methods take any `ConnectionTrait`,
//! so the same calls work on a plain connection or inside a transaction.
//! Entities stay pure data models; queries and validation live here.

pub mod house_shifting;
pub mod order_booking;
pub mod registration;
pub mod user;
pub mod user_profile;
pub mod vehicle_shifting;
pub mod warehouse_storage;

pub use house_shifting::{HouseShiftingInput, HouseShiftingRepository, SelectedVehicleInput};
pub use order_booking::{NewOrderBooking, OrderBookingRepository};
pub use registration::{NewRegistration, RegistrationRepository};
pub use user::{UserFields, UserRepository};
pub use user_profile::{NewUserProfile, UserProfileRepository};
pub use vehicle_shifting::{ChosenVehicleInput, VehicleShiftingInput, VehicleShiftingRepository};
pub use warehouse_storage::{WarehouseStorageInput, WarehouseStorageRepository, WarehouseVehicleInput};
