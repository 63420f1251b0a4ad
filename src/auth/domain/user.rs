//! Authenticated user context supplied with each request.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Identity of the user a request is executing on behalf of.
///
/// The transport layer builds this after verifying the request's
/// credentials; the task core treats it as an opaque, already-authenticated
/// fact. Credential material never reaches this type.
///
/// # Examples
///
/// ```
/// use taskboard::auth::domain::{AuthenticatedUser, UserId};
///
/// let user = AuthenticatedUser::new(UserId::new(), "root");
/// assert_eq!(user.username, "root");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Unique account identifier; the owner key recorded on tasks.
    pub id: UserId,

    /// Display name of the account.
    pub username: String,
}

impl AuthenticatedUser {
    /// Creates an authenticated user context.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
