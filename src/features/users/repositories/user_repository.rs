use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};

/// Persistence access for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its caller-supplied `userId`.
    ///
    /// `userId` is not unique; the earliest stored record wins.
    async fn find(&self, user_id: &str) -> Result<Option<User>>;

    /// Store a new user and return the persisted record
    async fn create(&self, user: NewUser) -> Result<User>;
}

/// Postgres-backed user repository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find(&self, user_id: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_id, name, email, address, lat, lng, created_at, updated_at
            FROM users
            WHERE user_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, name, email, address, lat, lng)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, email, address, lat, lng, created_at, updated_at
            "#,
        )
        .bind(&user.user_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.address)
        .bind(user.coordinates.lat)
        .bind(user.coordinates.lng)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(id = %user.id, user_id = %user.user_id, "User stored");

        Ok(user)
    }
}
