//! Unit tests for the user entity

use chrono::Utc;
use crate::domain::entities::user::User;

#[test]
fn test_new_user_is_active() {
    let user = User::new(1, "merchant", "merchant@courier.test", "$2b$04$hash");
    assert!(user.is_active());
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_matches_login_by_name_or_email() {
    let user = User::new(1, "merchant", "Merchant@Courier.test", "hash");

    assert!(user.matches_login(Some("merchant"), None));
    assert!(user.matches_login(None, Some("merchant@courier.test")));
    assert!(user.matches_login(Some("someone-else"), Some("merchant@courier.test")));
    assert!(!user.matches_login(Some("Merchant"), None));
    assert!(!user.matches_login(None, None));
}

#[test]
fn test_password_hash_not_serialized() {
    let mut user = User::new(1, "merchant", "merchant@courier.test", "secret-hash");
    user.deleted_at = Some(Utc::now());

    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("password_hash").is_none());
    assert!(!user.is_active());
}
