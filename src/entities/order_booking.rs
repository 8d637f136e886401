//! Final purchase record for one service line.
//!
//! References to the booked records are real foreign keys; they are nulled
//! rather than cascaded when the referenced row goes away so the purchase
//! history survives.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub booking_id: String,
    pub house_shifting_details_id: Option<i32>,
    pub house_shifting_products_id: Option<i32>,
    pub vehicle_shifting_details_id: Option<i32>,
    pub chosen_shifting_vehicle_id: Option<i32>,
    pub warehouse_storage_details_id: Option<i32>,
    pub warehouse_storing_products_id: Option<i32>,
    pub booking_datetime: Option<String>,
    pub shifting_type: Option<String>,
    pub payment_method: Option<String>,
    pub total_amount: Option<String>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::house_shifting_details::Entity",
        from = "Column::HouseShiftingDetailsId",
        to = "super::house_shifting_details::Column::Id",
        on_delete = "SetNull"
    )]
    HouseShiftingDetails,
    #[sea_orm(
        belongs_to = "super::house_shifting_products::Entity",
        from = "Column::HouseShiftingProductsId",
        to = "super::house_shifting_products::Column::Id",
        on_delete = "SetNull"
    )]
    HouseShiftingProducts,
    #[sea_orm(
        belongs_to = "super::vehicle_shifting_details::Entity",
        from = "Column::VehicleShiftingDetailsId",
        to = "super::vehicle_shifting_details::Column::Id",
        on_delete = "SetNull"
    )]
    VehicleShiftingDetails,
    #[sea_orm(
        belongs_to = "super::chosen_shifting_vehicle::Entity",
        from = "Column::ChosenShiftingVehicleId",
        to = "super::chosen_shifting_vehicle::Column::Id",
        on_delete = "SetNull"
    )]
    ChosenShiftingVehicle,
    #[sea_orm(
        belongs_to = "super::warehouse_storage_details::Entity",
        from = "Column::WarehouseStorageDetailsId",
        to = "super::warehouse_storage_details::Column::Id",
        on_delete = "SetNull"
    )]
    WareHouseStorageDetails,
    #[sea_orm(
        belongs_to = "super::warehouse_storing_products::Entity",
        from = "Column::WarehouseStoringProductsId",
        to = "super::warehouse_storing_products::Column::Id",
        on_delete = "SetNull"
    )]
    WareHouseStoringProducts,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

/// The service line an order was placed for, with the records it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum BookedService {
    HouseShifting {
        details_id: i32,
        products_id: Option<i32>,
    },
    VehicleShifting {
        details_id: i32,
        chosen_vehicle_id: Option<i32>,
    },
    WarehouseStorage {
        details_id: i32,
        products_id: Option<i32>,
    },
}

impl BookedService {
    pub fn details_id(&self) -> i32 {
        match self {
            Self::HouseShifting { details_id, .. }
            | Self::VehicleShifting { details_id, .. }
            | Self::WarehouseStorage { details_id, .. } => *details_id,
        }
    }
}

impl Model {
    /// The service line this order references, if its details row still exists.
    pub fn service(&self) -> Option<BookedService> {
        if let Some(details_id) = self.house_shifting_details_id {
            return Some(BookedService::HouseShifting {
                details_id,
                products_id: self.house_shifting_products_id,
            });
        }
        if let Some(details_id) = self.vehicle_shifting_details_id {
            return Some(BookedService::VehicleShifting {
                details_id,
                chosen_vehicle_id: self.chosen_shifting_vehicle_id,
            });
        }
        self.warehouse_storage_details_id
            .map(|details_id| BookedService::WarehouseStorage {
                details_id,
                products_id: self.warehouse_storing_products_id,
            })
    }
}

timestamped_active_model!();
