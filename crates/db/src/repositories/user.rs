//! User repository for database operations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use crate::entities::users;
use fintrack_core::auth::{User, UserRepository as UserStore};
use fintrack_core::storage::StorageError;
use fintrack_shared::types::UserId;

/// User repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
    }
}

fn storage_err(err: sea_orm::DbErr) -> StorageError {
    StorageError::new(err.to_string())
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StorageError> {
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        user.insert(&self.db)
            .await
            .map(to_domain)
            .map_err(storage_err)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError> {
        users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map(|user| user.map(to_domain))
            .map_err(storage_err)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|user| user.map(to_domain))
            .map_err(storage_err)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StorageError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(storage_err)?;

        Ok(count > 0)
    }
}
