//! One inventory line of a house shifting booking.
//!
//! `(house_shifting_products_id, item)` is unique; the index is created with
//! the schema.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::inventory_item::InventoryItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "house_shifting_product_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub house_shifting_products_id: i32,
    pub item: InventoryItem,
    pub quantity: i32,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house_shifting_products::Entity",
        from = "Column::HouseShiftingProductsId",
        to = "super::house_shifting_products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,
}

impl Related<super::house_shifting_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

timestamped_active_model!();
