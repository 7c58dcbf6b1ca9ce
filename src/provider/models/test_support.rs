//! Test helpers for constructing `UserRecord` fixtures.
//!
//! This module provides builder functions for creating `UserRecord` instances
//! in tests, reducing boilerplate and ensuring consistency across test modules.
//!
//! # Examples
//!
//! ```
//! use userdeck::provider::models::test_support::{minimal_user, user_with_id};
//!
//! // Create a minimal user with id, first name, and username
//! let user = minimal_user(1, "Ada", "adal");
//!
//! // Create a user with only an ID (uses derived name/username)
//! let user = user_with_id(42);
//! ```

use super::UserRecord;

/// Constructs a minimal `UserRecord` with only id, first name, and username.
///
/// All other fields are set to their default values (`None`).
///
/// # Examples
///
/// ```
/// use userdeck::provider::models::test_support::minimal_user;
///
/// let user = minimal_user(1, "Ada", "adal");
/// assert_eq!(user.id, 1);
/// assert_eq!(user.first_name.as_deref(), Some("Ada"));
/// assert_eq!(user.username.as_deref(), Some("adal"));
/// ```
#[must_use]
pub fn minimal_user(id: u64, first_name: &str, username: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: Some(first_name.to_owned()),
        username: Some(username.to_owned()),
        ..Default::default()
    }
}

/// Creates a `UserRecord` with only an ID and derived name/username.
///
/// The first name is set to "User {id}" and the username to "user{id}".
#[must_use]
pub fn user_with_id(id: u64) -> UserRecord {
    minimal_user(id, &format!("User {id}"), &format!("user{id}"))
}

/// Constructs a fully populated `UserRecord` for display tests.
#[must_use]
pub fn complete_user(id: u64) -> UserRecord {
    UserRecord {
        id,
        title: Some("Ms".to_owned()),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        email: Some("ada@example.test".to_owned()),
        phone: Some("01-234-5678".to_owned()),
        city: Some("London".to_owned()),
        state: Some("London".to_owned()),
        country: Some("United Kingdom".to_owned()),
        avatar_url: Some("https://example.test/ada.jpg".to_owned()),
        username: Some("adal".to_owned()),
    }
}
