//! Registration entity: raw signup input staged until the OTP is verified.
//!
//! Not linked to `users`; a verified record is promoted into a user and a
//! profile by the store.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_name: String,
    pub user_phone_number: String,
    pub user_email: String,
    #[serde(skip_serializing)]
    pub password1: Option<String>,
    #[serde(skip_serializing)]
    pub password2: Option<String>,
    pub terms_condition: bool,
    pub privacy_policy: bool,
    #[serde(skip_serializing)]
    pub otp: Option<String>,
    pub registered_datetime: DateTimeUtc,
    /// `None` while pending, `Some(true)` once the OTP was confirmed
    pub is_verified: Option<bool>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn verified(&self) -> bool {
        self.is_verified == Some(true)
    }
}

timestamped_active_model!();
