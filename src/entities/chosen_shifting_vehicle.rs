use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chosen_shifting_vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_shifting_details_id: i32,
    pub vehicle_amount: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_image: Option<String>,
    pub order_placed_datetime: Option<DateTimeUtc>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_shifting_details::Entity",
        from = "Column::VehicleShiftingDetailsId",
        to = "super::vehicle_shifting_details::Column::Id",
        on_delete = "Cascade"
    )]
    VehicleShiftingDetails,
}

impl Related<super::vehicle_shifting_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleShiftingDetails.def()
    }
}

timestamped_active_model!();
