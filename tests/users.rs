use truckbook::constants::{ERROR_PHONE_REQUIRED, ERROR_SUPERUSER_STAFF};
use truckbook::repositories::{NewUserProfile, UserFields, UserProfileRepository, UserRepository};
use truckbook::{BookingStore, StoreError};

#[tokio::test]
async fn test_user_without_phone_is_rejected() {
    let store = BookingStore::in_memory().await.unwrap();
    let result = UserRepository::create_user(store.conn(), "   ", None, Some("pw"), UserFields::default()).await;
    assert!(matches!(result, Err(StoreError::Validation(msg)) if msg == ERROR_PHONE_REQUIRED));
}

#[tokio::test]
async fn test_duplicate_phone_is_integrity_error() {
    let store = BookingStore::in_memory().await.unwrap();
    UserRepository::create_user(store.conn(), "9999999999", None, Some("pw"), UserFields::default())
        .await
        .unwrap();

    let result = UserRepository::create_user(store.conn(), "9999999999", None, Some("pw"), UserFields::default()).await;
    assert!(matches!(result, Err(StoreError::Integrity(_))));
}

#[tokio::test]
async fn test_superuser_must_be_staff() {
    let store = BookingStore::in_memory().await.unwrap();
    let fields = UserFields {
        is_staff: Some(false),
        ..Default::default()
    };
    let result = UserRepository::create_superuser(store.conn(), "9000000001", None, Some("pw"), fields).await;
    assert!(matches!(result, Err(StoreError::Validation(msg)) if msg == ERROR_SUPERUSER_STAFF));
}

#[tokio::test]
async fn test_get_by_phone_and_authenticate() {
    let store = BookingStore::in_memory().await.unwrap();
    let user = UserRepository::create_user(store.conn(), "9876500000", None, Some("s3cret"), UserFields::default())
        .await
        .unwrap();

    let found = UserRepository::get_by_phone(store.conn(), "9876500000").await.unwrap();
    assert_eq!(found.id, user.id);

    let missing = UserRepository::get_by_phone(store.conn(), "1234567890").await;
    assert!(matches!(missing, Err(StoreError::NotFound(_))));

    let wrong = UserRepository::authenticate(store.conn(), "9876500000", "nope").await;
    assert!(matches!(wrong, Err(StoreError::InvalidCredentials(_))));

    let logged_in = UserRepository::authenticate(store.conn(), "9876500000", "s3cret").await.unwrap();
    assert!(logged_in.last_login.is_some());
}

#[tokio::test]
async fn test_inactive_user_cannot_authenticate() {
    let store = BookingStore::in_memory().await.unwrap();
    let fields = UserFields {
        is_active: Some(false),
        ..Default::default()
    };
    UserRepository::create_user(store.conn(), "9876500001", None, Some("pw"), fields)
        .await
        .unwrap();

    let result = UserRepository::authenticate(store.conn(), "9876500001", "pw").await;
    assert!(matches!(result, Err(StoreError::InvalidCredentials(_))));
}

#[tokio::test]
async fn test_profile_only_returned_for_its_user() {
    let store = BookingStore::in_memory().await.unwrap();
    let x = UserRepository::create_user(store.conn(), "9000000100", None, None, UserFields::default())
        .await
        .unwrap();
    let y = UserRepository::create_user(store.conn(), "9000000101", None, None, UserFields::default())
        .await
        .unwrap();

    UserProfileRepository::create(
        store.conn(),
        x.id,
        NewUserProfile {
            user_name: "Xavier".to_string(),
            user_phone_number: x.phone_number.clone(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let x_profiles = UserProfileRepository::get_for_user(store.conn(), x.id).await.unwrap();
    assert_eq!(x_profiles.len(), 1);
    assert_eq!(x_profiles[0].user_id, x.id);
    assert!(UserProfileRepository::get_for_user(store.conn(), y.id)
        .await
        .unwrap()
        .is_empty());

    // Deleting the user removes the profile with it
    UserRepository::delete(store.conn(), x.id).await.unwrap();
    assert!(UserProfileRepository::get_by_id(store.conn(), x_profiles[0].id)
        .await
        .unwrap()
        .is_none());
}

#[test]
fn test_password_is_not_serialized() {
    let user = truckbook::entities::user::Model {
        id: 1,
        phone_number: "9999999999".to_string(),
        email: Some("a@example.com".to_string()),
        password: Some("$argon2id$secret".to_string()),
        first_name: String::new(),
        last_name: String::new(),
        is_staff: false,
        is_superuser: false,
        is_active: true,
        last_login: Some(chrono::Utc::now()),
        date_joined: chrono::Utc::now(),
        created: chrono::Utc::now(),
        updated: chrono::Utc::now(),
    };
    let toml = toml::to_string(&user).unwrap();
    assert!(!toml.contains("argon2"));
}
