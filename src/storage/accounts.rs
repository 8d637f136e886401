//! Signup flow: staging, OTP verification and account creation.

use log::info;
use sea_orm::TransactionTrait;

use super::BookingStore;
use crate::constants::ERROR_NOT_VERIFIED;
use crate::entities::{registration, user, user_profile};
use crate::error::{Result, StoreError};
use crate::repositories::{
    NewRegistration, NewUserProfile, RegistrationRepository, UserFields, UserProfileRepository, UserRepository,
};

impl BookingStore {
    /// Stage a signup and issue an OTP for it.
    pub async fn register(&self, input: NewRegistration) -> Result<registration::Model> {
        RegistrationRepository::create(&self.conn, input, self.registration.otp_length).await
    }

    pub async fn resend_otp(&self, registration_id: i32) -> Result<registration::Model> {
        RegistrationRepository::resend_otp(&self.conn, registration_id, self.registration.otp_length).await
    }

    pub async fn verify_registration(&self, registration_id: i32, otp: &str) -> Result<registration::Model> {
        RegistrationRepository::verify_otp(&self.conn, registration_id, otp, self.registration.otp_ttl_minutes).await
    }

    /// Turn a verified registration into a user with a profile.
    ///
    /// Runs in one transaction; the raw passwords on the staging record are
    /// wiped as part of it.
    ///
    /// # Errors
    /// `NotFound` for an unknown registration, `Validation` when it is not
    /// verified or its passwords were already consumed, `Integrity` when the
    /// phone number already has an account.
    pub async fn complete_registration(&self, registration_id: i32) -> Result<(user::Model, user_profile::Model)> {
        let txn = self.conn.begin().await?;

        let record = RegistrationRepository::get_by_id(&txn, registration_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("registration {}", registration_id)))?;
        if !record.verified() {
            return Err(StoreError::validation(ERROR_NOT_VERIFIED));
        }
        let password = record
            .password1
            .clone()
            .ok_or_else(|| StoreError::validation("registration has already been completed"))?;

        let (first_name, last_name) = match record.user_name.split_once(' ') {
            Some((first, last)) => (first.to_string(), last.trim().to_string()),
            None => (record.user_name.clone(), String::new()),
        };
        let email = Some(record.user_email.as_str()).filter(|e| !e.is_empty());
        let user = UserRepository::create_user(
            &txn,
            &record.user_phone_number,
            email,
            Some(password.as_str()),
            UserFields {
                first_name: Some(first_name),
                last_name: Some(last_name),
                ..Default::default()
            },
        )
        .await?;

        let profile = UserProfileRepository::create(
            &txn,
            user.id,
            NewUserProfile {
                user_name: record.user_name.clone(),
                user_phone_number: user.phone_number.clone(),
                user_email: record.user_email.clone(),
                password_hash: user.password.clone().unwrap_or_default(),
                terms_condition: record.terms_condition,
                privacy_policy: record.privacy_policy,
                user_created: Some(user.date_joined),
            },
        )
        .await?;

        RegistrationRepository::clear_passwords(&txn, record).await?;
        txn.commit().await?;

        info!("Completed registration {} as user {}", registration_id, user.id);
        Ok((user, profile))
    }

    /// Check a phone number and password.
    pub async fn login(&self, phone_number: &str, password: &str) -> Result<user::Model> {
        UserRepository::authenticate(&self.conn, phone_number, password).await
    }
}
