//! User repository over the persistence layer.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TryIntoModel,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Store contract the service layer depends on.
///
/// The store owns the canonical record and assigns identifiers
/// on first save.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by identifier
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Persist a user (create when the identifier is unset, update otherwise)
    async fn save(&self, user: User) -> AppResult<User>;

    /// Delete a user by identifier. Deleting an absent identifier is not an error.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        // An unset identifier inserts and lets the store assign the key;
        // a set identifier updates that row.
        let active_model = ActiveModel {
            id: user.id.map_or(NotSet, Set),
            name: Set(user.name),
            username: Set(user.username),
            email: Set(user.email),
            password: Set(user.password),
        };

        let model = active_model
            .save(self.db.as_ref())
            .await
            .map_err(AppError::from)?
            .try_into_model()
            .map_err(AppError::from)?;

        Ok(User::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        UserEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
