//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{
    phone::Phone, public_id::PublicId, user_id::UserId, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                public_id,
                name,
                phone,
                address,
                city,
                state,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.public_id.as_str())
        .bind(&user.name)
        .bind(user.phone.as_str())
        .bind(&user.address)
        .bind(&user.city)
        .bind(&user.state)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                name,
                phone,
                address,
                city,
                state,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_phone(&self, phone: &Phone) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                name,
                phone,
                address,
                city,
                state,
                created_at,
                updated_at
            FROM users
            WHERE phone = $1
            "#,
        )
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_phone(&self, phone: &Phone) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE phone = $1)")
                .bind(phone.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Credentials Repository Implementation
// ============================================================================

impl CredentialsRepository for PgAuthRepository {
    async fn create(&self, credentials: &Credentials) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_credentials (
                user_id,
                password_hash,
                refresh_token,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(credentials.user_id.as_uuid())
        .bind(credentials.password_hash.as_str())
        .bind(&credentials.refresh_token)
        .bind(credentials.created_at)
        .bind(credentials.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT
                user_id,
                password_hash,
                refresh_token,
                created_at,
                updated_at
            FROM auth_credentials
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credentials()).transpose()
    }

    async fn update(&self, credentials: &Credentials) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE auth_credentials SET
                password_hash = $2,
                refresh_token = $3,
                updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(credentials.user_id.as_uuid())
        .bind(credentials.password_hash.as_str())
        .bind(&credentials.refresh_token)
        .bind(credentials.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    public_id: String,
    name: String,
    phone: String,
    address: String,
    city: String,
    state: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| AuthError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            public_id,
            name: self.name,
            phone: Phone::from_db(self.phone),
            address: self.address,
            city: self.city,
            state: self.state,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    user_id: Uuid,
    password_hash: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialsRow {
    fn into_credentials(self) -> AuthResult<Credentials> {
        let password_hash = UserPassword::from_db(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Credentials {
            user_id: UserId::from_uuid(self.user_id),
            password_hash,
            refresh_token: self.refresh_token,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
