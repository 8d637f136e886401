//! Vehicle-only relocation booking details.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle_shifting_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub booking_id: String,
    pub shifting_type: Option<String>,
    pub moving_datetime: Option<String>,
    pub pickup_location: Option<String>,
    pub pickup_address: Option<String>,
    pub pickup_floor: Option<String>,
    pub pickup_lift: Option<String>,
    pub drop_location: Option<String>,
    pub drop_address: Option<String>,
    pub drop_floor: Option<String>,
    pub drop_lift: Option<String>,
    pub order_placed_datetime: Option<DateTimeUtc>,
    pub completed: Option<bool>,
    pub completed_date: Option<DateTimeUtc>,
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
    #[sea_orm(has_many = "super::chosen_shifting_vehicle::Entity")]
    ChosenVehicles,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::chosen_shifting_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChosenVehicles.def()
    }
}

impl Model {
    pub fn is_completed(&self) -> bool {
        self.completed == Some(true)
    }
}

timestamped_active_model!();
