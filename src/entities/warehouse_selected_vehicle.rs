use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_selected_vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_storage_details_id: i32,
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_image: Option<String>,
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
}

impl Related<super::warehouse_storage_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WareHouseStorageDetails.def()
    }
}

timestamped_active_model!();
