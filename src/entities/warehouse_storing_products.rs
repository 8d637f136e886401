//! Inventory header for a warehouse storage booking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_storing_products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_storage_details_id: i32,
    pub product_amount: Option<String>,
    /// When the customer confirmed the inventory list
    pub selected: Option<DateTimeUtc>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse_storage_details::Entity",
        from = "Column::WarehouseStorageDetailsId",
        to = "super::warehouse_storage_details::Column::Id",
        on_delete = "Cascade"
    )]
    WareHouseStorageDetails,
    #[sea_orm(has_many = "super::warehouse_storing_product_item::Entity")]
    Items,
}

impl Related<super::warehouse_storage_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WareHouseStorageDetails.def()
    }
}

impl Related<super::warehouse_storing_product_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

timestamped_active_model!();
