//! Inventory header for a house shifting booking.
//!
//! Per-item quantities live in `house_shifting_product_items`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "house_shifting_products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub house_shifting_details_id: i32,
    pub product_amount: Option<String>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house_shifting_details::Entity",
        from = "Column::HouseShiftingDetailsId",
        to = "super::house_shifting_details::Column::Id",
        on_delete = "Cascade"
    )]
    HouseShiftingDetails,
    #[sea_orm(has_many = "super::house_shifting_product_item::Entity")]
    Items,
}

impl Related<super::house_shifting_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseShiftingDetails.def()
    }
}

impl Related<super::house_shifting_product_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

timestamped_active_model!();
