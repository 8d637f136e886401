//! Registration repository: signup staging and OTP verification.

use chrono::Utc;
use log::{info, warn};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::constants::{
    ERROR_CONSENT_REQUIRED, ERROR_OTP_EXPIRED, ERROR_OTP_INVALID, ERROR_OTP_REQUIRED, ERROR_PASSWORD_MISMATCH,
    USER_NAME_MAX_LEN,
};
use crate::entities::registration;
use crate::error::{Result, StoreError};
use crate::utils::identity::{normalize_email, normalize_phone};
use crate::utils::otp;

/// Raw signup form input.
#[derive(Debug, Clone, Default)]
pub struct NewRegistration {
    pub user_name: String,
    pub user_phone_number: String,
    pub user_email: String,
    pub password1: String,
    pub password2: String,
    pub terms_condition: bool,
    pub privacy_policy: bool,
}

impl NewRegistration {
    fn validate(&self) -> Result<()> {
        let name = self.user_name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("user_name is required"));
        }
        if name.chars().count() > USER_NAME_MAX_LEN {
            return Err(StoreError::Validation(format!(
                "user_name must be at most {} characters",
                USER_NAME_MAX_LEN
            )));
        }
        if self.password1.is_empty() {
            return Err(StoreError::validation("password is required"));
        }
        if self.password1 != self.password2 {
            return Err(StoreError::validation(ERROR_PASSWORD_MISMATCH));
        }
        if !self.terms_condition || !self.privacy_policy {
            return Err(StoreError::validation(ERROR_CONSENT_REQUIRED));
        }
        Ok(())
    }
}

/// Repository for registration-related database operations.
pub struct RegistrationRepository;

impl RegistrationRepository {
    /// Stage a signup and issue its first OTP.
    pub async fn create<C>(conn: &C, input: NewRegistration, otp_length: usize) -> Result<registration::Model>
    where
        C: ConnectionTrait,
    {
        input.validate()?;
        let phone_number = normalize_phone(&input.user_phone_number)?;

        let record = registration::ActiveModel {
            user_name: ActiveValue::Set(input.user_name.trim().to_string()),
            user_phone_number: ActiveValue::Set(phone_number),
            user_email: ActiveValue::Set(normalize_email(Some(input.user_email.as_str())).unwrap_or_default()),
            password1: ActiveValue::Set(Some(input.password1)),
            password2: ActiveValue::Set(Some(input.password2)),
            terms_condition: ActiveValue::Set(input.terms_condition),
            privacy_policy: ActiveValue::Set(input.privacy_policy),
            otp: ActiveValue::Set(Some(otp::generate_otp(otp_length))),
            registered_datetime: ActiveValue::Set(Utc::now()),
            is_verified: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        info!("Staged registration {} for {}", record.id, record.user_phone_number);
        Ok(record)
    }

    /// Get a registration by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<registration::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(registration::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get the most recent registration for a phone number.
    pub async fn latest_for_phone<C>(conn: &C, phone_number: &str) -> Result<Option<registration::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(registration::Entity::find()
            .filter(registration::Column::UserPhoneNumber.eq(phone_number.trim()))
            .order_by_desc(registration::Column::Id)
            .one(conn)
            .await?)
    }

    async fn require<C>(conn: &C, id: i32) -> Result<registration::Model>
    where
        C: ConnectionTrait,
    {
        Self::get_by_id(conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("registration {}", id)))
    }

    /// Issue a new OTP and restart its lifetime.
    pub async fn resend_otp<C>(conn: &C, id: i32, otp_length: usize) -> Result<registration::Model>
    where
        C: ConnectionTrait,
    {
        let record = Self::require(conn, id).await?;
        if record.verified() {
            return Err(StoreError::validation("registration is already verified"));
        }

        let mut active_model: registration::ActiveModel = record.into();
        active_model.otp = ActiveValue::Set(Some(otp::generate_otp(otp_length)));
        active_model.registered_datetime = ActiveValue::Set(Utc::now());
        active_model.is_verified = ActiveValue::Set(None);
        Ok(active_model.update(conn).await?)
    }

    /// Confirm the OTP sent for a registration.
    ///
    /// Verifying an already verified record is a no-op.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `Validation` when the OTP is wrong or its
    /// lifetime has passed.
    pub async fn verify_otp<C>(conn: &C, id: i32, submitted: &str, ttl_minutes: u64) -> Result<registration::Model>
    where
        C: ConnectionTrait,
    {
        let record = Self::require(conn, id).await?;
        if record.verified() {
            return Ok(record);
        }

        let submitted = submitted.trim();
        if submitted.is_empty() {
            return Err(StoreError::validation(ERROR_OTP_REQUIRED));
        }
        if otp::is_expired(record.registered_datetime, ttl_minutes, Utc::now()) {
            warn!("Expired OTP submitted for registration {}", id);
            return Err(StoreError::validation(ERROR_OTP_EXPIRED));
        }
        if record.otp.as_deref() != Some(submitted) {
            warn!("Wrong OTP submitted for registration {}", id);
            return Err(StoreError::validation(ERROR_OTP_INVALID));
        }

        let mut active_model: registration::ActiveModel = record.into();
        active_model.is_verified = ActiveValue::Set(Some(true));
        active_model.otp = ActiveValue::Set(None);
        let record = active_model.update(conn).await?;
        info!("Verified registration {}", id);
        Ok(record)
    }

    /// Drop the raw password fields once they have been consumed.
    pub async fn clear_passwords<C>(conn: &C, record: registration::Model) -> Result<registration::Model>
    where
        C: ConnectionTrait,
    {
        let mut active_model: registration::ActiveModel = record.into();
        active_model.password1 = ActiveValue::Set(None);
        active_model.password2 = ActiveValue::Set(None);
        Ok(active_model.update(conn).await?)
    }
}
