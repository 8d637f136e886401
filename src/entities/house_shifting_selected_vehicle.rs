use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "house_shifting_selected_vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub house_shifting_details_id: i32,
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_image: Option<String>,
    pub vehicle_amount: Option<String>,
    pub total_shifting_kms: Option<String>,
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
}

impl Related<super::house_shifting_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseShiftingDetails.def()
    }
}

timestamped_active_model!();
