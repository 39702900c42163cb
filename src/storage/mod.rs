//! Records and the repository interface for everything the site persists.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{contact::NewContact, newsletter::NewNewsletter};

pub use self::error::{StorageError, StorageResult};
pub use self::memory::MemStorage;

pub mod error;
pub mod memory;

pub type UserId = u64;
pub type ContactId = u64;
pub type NewsletterId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: NewsletterId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of [`Storage::subscribe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subscription {
    Created(Newsletter),
    Existing(Newsletter),
}

/// Create/read access to users, contact inquiries and newsletter subscriptions.
///
/// Identifiers are assigned per record kind from a counter starting at 1 and are never
/// reused. Listings come back in insertion order. Lookups report a missing record as
/// `None`; an `Err` always means the backend itself failed.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores the user as given. Usernames are not checked for uniqueness.
    async fn create_user(&self, user: NewUser) -> StorageResult<User>;

    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    async fn create_contact(&self, contact: NewContact) -> StorageResult<Contact>;

    async fn get_contacts(&self) -> StorageResult<Vec<Contact>>;

    /// Stores the subscription unconditionally; callers deduplicate.
    async fn create_newsletter(&self, newsletter: NewNewsletter) -> StorageResult<Newsletter>;

    /// Exact, case-sensitive match on the email address.
    async fn get_newsletter_by_email(&self, email: &str) -> StorageResult<Option<Newsletter>>;

    async fn get_newsletters(&self) -> StorageResult<Vec<Newsletter>>;

    /// Insert the subscription unless one already exists for the same email, atomically
    /// with respect to concurrent callers.
    async fn subscribe(&self, newsletter: NewNewsletter) -> StorageResult<Subscription>;
}
