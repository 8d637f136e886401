//! User repository for database operations.

use chrono::Utc;
use log::{debug, info, warn};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::constants::{ERROR_SUPERUSER_FLAG, ERROR_SUPERUSER_STAFF};
use crate::entities::user;
use crate::error::{Result, StoreError};
use crate::utils::identity::{normalize_email, normalize_phone};
use crate::utils::password::{hash_password, verify_password};

/// Optional account fields accepted when creating a user.
///
/// Unset flags take the defaults of the constructor being called.
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}

/// Repository for user-related database operations.
pub struct UserRepository;

impl UserRepository {
    /// Create a regular user. Staff and superuser flags default to false.
    ///
    /// # Errors
    /// `Validation` for a missing or malformed phone number, `Integrity` when
    /// the phone number is already taken.
    pub async fn create_user<C>(
        conn: &C,
        phone_number: &str,
        email: Option<&str>,
        password: Option<&str>,
        fields: UserFields,
    ) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        let fields = UserFields {
            is_staff: Some(fields.is_staff.unwrap_or(false)),
            is_superuser: Some(fields.is_superuser.unwrap_or(false)),
            ..fields
        };
        Self::insert_user(conn, phone_number, email, password, fields).await
    }

    /// Create a superuser. Staff and superuser flags default to true and
    /// must not be explicitly set to false.
    pub async fn create_superuser<C>(
        conn: &C,
        phone_number: &str,
        email: Option<&str>,
        password: Option<&str>,
        fields: UserFields,
    ) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        let is_staff = fields.is_staff.unwrap_or(true);
        let is_superuser = fields.is_superuser.unwrap_or(true);
        if !is_staff {
            return Err(StoreError::validation(ERROR_SUPERUSER_STAFF));
        }
        if !is_superuser {
            return Err(StoreError::validation(ERROR_SUPERUSER_FLAG));
        }

        let fields = UserFields {
            is_staff: Some(is_staff),
            is_superuser: Some(is_superuser),
            ..fields
        };
        Self::insert_user(conn, phone_number, email, password, fields).await
    }

    async fn insert_user<C>(
        conn: &C,
        phone_number: &str,
        email: Option<&str>,
        password: Option<&str>,
        fields: UserFields,
    ) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        let phone_number = normalize_phone(phone_number)?;
        let password = password.map(hash_password).transpose()?;

        let new_user = user::ActiveModel {
            phone_number: ActiveValue::Set(phone_number),
            email: ActiveValue::Set(normalize_email(email)),
            password: ActiveValue::Set(password),
            first_name: ActiveValue::Set(fields.first_name.unwrap_or_default()),
            last_name: ActiveValue::Set(fields.last_name.unwrap_or_default()),
            is_staff: ActiveValue::Set(fields.is_staff.unwrap_or(false)),
            is_superuser: ActiveValue::Set(fields.is_superuser.unwrap_or(false)),
            is_active: ActiveValue::Set(fields.is_active.unwrap_or(true)),
            last_login: ActiveValue::Set(None),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        let user = new_user.insert(conn).await?;
        info!("Created user {} ({})", user.id, user.phone_number);
        Ok(user)
    }

    /// Find a user by phone number.
    pub async fn find_by_phone<C>(conn: &C, phone_number: &str) -> Result<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .filter(user::Column::PhoneNumber.eq(phone_number.trim()))
            .one(conn)
            .await?)
    }

    /// Get a user by phone number, failing with `NotFound` on a miss.
    pub async fn get_by_phone<C>(conn: &C, phone_number: &str) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        debug!("Looking up user by phone {}", phone_number);
        Self::find_by_phone(conn, phone_number)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("user with phone number {}", phone_number.trim())))
    }

    /// Get a user by id, failing with `NotFound` on a miss.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        user::Entity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))
    }

    /// Replace the stored password hash. `None` makes the password unusable.
    pub async fn set_password<C>(conn: &C, user: user::Model, raw: Option<&str>) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        let password = raw.map(hash_password).transpose()?;
        let mut active_model: user::ActiveModel = user.into();
        active_model.password = ActiveValue::Set(password);
        Ok(active_model.update(conn).await?)
    }

    /// Check a raw password against the user's stored hash.
    pub fn check_password(user: &user::Model, raw: &str) -> bool {
        user.password
            .as_deref()
            .is_some_and(|hash| verify_password(raw, hash))
    }

    /// Verify credentials and stamp `last_login`.
    ///
    /// # Errors
    /// `NotFound` for an unknown phone number, `InvalidCredentials` for a wrong
    /// or unusable password or an inactive account.
    pub async fn authenticate<C>(conn: &C, phone_number: &str, raw: &str) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        let user = Self::get_by_phone(conn, phone_number).await?;
        if !user.is_active || !Self::check_password(&user, raw) {
            warn!("Rejected login for {}", user.phone_number);
            return Err(StoreError::InvalidCredentials(user.phone_number));
        }

        let mut active_model: user::ActiveModel = user.into();
        active_model.last_login = ActiveValue::Set(Some(Utc::now()));
        Ok(active_model.update(conn).await?)
    }

    /// Update an existing user.
    pub async fn update<C>(conn: &C, user: user::ActiveModel) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        Ok(user.update(conn).await?)
    }

    /// Delete a user and, through cascades, everything the user owns.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let result = user::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("user {}", id)));
        }
        info!("Deleted user {}", id);
        Ok(())
    }
}
