use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::inventory_item::InventoryItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_storing_product_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_storing_products_id: i32,
    pub item: InventoryItem,
    pub quantity: i32,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse_storing_products::Entity",
        from = "Column::WarehouseStoringProductsId",
        to = "super::warehouse_storing_products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,
}

impl Related<super::warehouse_storing_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

timestamped_active_model!();
