//! User service - Handles user record management.
//!
//! Every operation is a single delegation to the injected store; the
//! service itself holds no state between calls.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user. The store assigns the identifier on creation.
    async fn register(&self, user: User) -> AppResult<User>;

    /// Check credentials. Returns true only if a record exists for the
    /// email and its stored password equals the given password exactly.
    async fn login(&self, email: &str, password: &str) -> AppResult<bool>;

    /// Get a user by identifier. Absence is `None`, not an error.
    async fn get_user(&self, id: i64) -> AppResult<Option<User>>;

    /// Replace the email and password of an existing record.
    ///
    /// Fails with [`crate::errors::AppError::UserNotFound`] when no
    /// record exists for the identifier.
    async fn update_user(&self, id: i64, updated: User) -> AppResult<User>;

    /// Delete a user by identifier. Deleting an absent identifier is
    /// indistinguishable from deleting an existing one.
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService over an injected store.
pub struct UserRecordManager {
    store: Arc<dyn UserRepository>,
}

impl UserRecordManager {
    /// Create new user service instance with the given store
    pub fn new(store: Arc<dyn UserRepository>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserRecordManager {
    async fn register(&self, user: User) -> AppResult<User> {
        self.store.save(user).await
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<bool> {
        // Exact value equality against the stored password
        let user = self.store.find_by_email(email).await?;
        Ok(user.is_some_and(|u| u.password == password))
    }

    async fn get_user(&self, id: i64) -> AppResult<Option<User>> {
        self.store.find_by_id(id).await
    }

    async fn update_user(&self, id: i64, updated: User) -> AppResult<User> {
        let mut user = self.store.find_by_id(id).await?.ok_or_not_found()?;

        user.email = updated.email;
        user.password = updated.password;

        self.store.save(user).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await
    }
}
