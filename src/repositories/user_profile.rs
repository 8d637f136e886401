//! User profile repository for database operations.

use chrono::{DateTime, Utc};
use log::info;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::user_profile;
use crate::error::Result;

/// Account details copied onto a profile.
#[derive(Debug, Clone, Default)]
pub struct NewUserProfile {
    pub user_name: String,
    pub user_phone_number: String,
    pub user_email: String,
    /// Already-hashed password (PHC string)
    pub password_hash: String,
    pub terms_condition: bool,
    pub privacy_policy: bool,
    /// Defaults to now
    pub user_created: Option<DateTime<Utc>>,
}

/// Repository for profile-related database operations.
pub struct UserProfileRepository;

impl UserProfileRepository {
    /// Create a profile owned by `user_id`.
    pub async fn create<C>(conn: &C, user_id: i32, input: NewUserProfile) -> Result<user_profile::Model>
    where
        C: ConnectionTrait,
    {
        let profile = user_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            user_name: ActiveValue::Set(input.user_name),
            user_phone_number: ActiveValue::Set(input.user_phone_number),
            user_email: ActiveValue::Set(input.user_email),
            password: ActiveValue::Set(input.password_hash),
            terms_condition: ActiveValue::Set(input.terms_condition),
            privacy_policy: ActiveValue::Set(input.privacy_policy),
            user_created: ActiveValue::Set(input.user_created.unwrap_or_else(Utc::now)),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        info!("Created profile {} for user {}", profile.id, user_id);
        Ok(profile)
    }

    /// Get all profiles belonging to one user.
    pub async fn get_for_user<C>(conn: &C, user_id: i32) -> Result<Vec<user_profile::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user_profile::Entity::find()
            .filter(user_profile::Column::UserId.eq(user_id))
            .order_by_asc(user_profile::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single profile by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<user_profile::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user_profile::Entity::find_by_id(id).one(conn).await?)
    }

    /// Update a profile in the database.
    pub async fn update<C>(conn: &C, profile: user_profile::ActiveModel) -> Result<user_profile::Model>
    where
        C: ConnectionTrait,
    {
        Ok(profile.update(conn).await?)
    }
}
