//! User entity: the authentication identity, keyed by phone number.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub phone_number: String,
    pub email: Option<String>,
    /// Argon2 PHC string; `None` marks an unusable password
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub last_login: Option<DateTimeUtc>,
    pub date_joined: DateTimeUtc,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_profile::Entity")]
    Profiles,
    #[sea_orm(has_many = "super::house_shifting_details::Entity")]
    HouseShiftingDetails,
    #[sea_orm(has_many = "super::vehicle_shifting_details::Entity")]
    VehicleShiftingDetails,
    #[sea_orm(has_many = "super::warehouse_storage_details::Entity")]
    WareHouseStorageDetails,
    #[sea_orm(has_many = "super::order_booking::Entity")]
    OrderBookings,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl Related<super::house_shifting_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseShiftingDetails.def()
    }
}

impl Related<super::vehicle_shifting_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleShiftingDetails.def()
    }
}

impl Related<super::warehouse_storage_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WareHouseStorageDetails.def()
    }
}

impl Related<super::order_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderBookings.def()
    }
}

impl Model {
    /// Whether this account can log in with a password at all.
    pub fn has_usable_password(&self) -> bool {
        self.password.is_some()
    }
}

timestamped_active_model!();
