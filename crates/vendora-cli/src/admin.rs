//! Administrator account creation.

use anyhow::{Context, anyhow};
use sqlx::PgPool;
use validator::Validate;

use vendora_core::hash_password;
use vendora_models::{RegisterAdminRequest, RegisteredUser, UserRole};

/// Creates an `admin` account directly in the store.
///
/// Applies the same username and password rules as the HTTP registration
/// endpoints. Fails if the username is taken.
pub async fn create_admin(db: &PgPool, username: &str, password: &str) -> anyhow::Result<RegisteredUser> {
    let request = RegisterAdminRequest {
        username: username.to_string(),
        password: password.to_string(),
        admin_key: None,
    };
    request.validate()?;

    let hashed_password =
        hash_password(&request.password).map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let user = sqlx::query_as::<_, RegisteredUser>(
        "INSERT INTO users (username, password, role)
         VALUES ($1, $2, $3)
         ON CONFLICT (username) DO NOTHING
         RETURNING id, username",
    )
    .bind(request.normalized_username())
    .bind(&hashed_password)
    .bind(UserRole::Admin)
    .fetch_optional(db)
    .await
    .context("Failed to insert admin")?;

    user.ok_or_else(|| anyhow!("User {} already exists", request.normalized_username()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_stores_admin_role(pool: PgPool) {
        let user = create_admin(&pool, "Root", "secret1").await.unwrap();
        assert_eq!(user.username, "root");

        let role: UserRole = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_rejects_duplicate(pool: PgPool) {
        create_admin(&pool, "root", "secret1").await.unwrap();
        let err = create_admin(&pool, "root", "secret2").await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_rejects_short_password(pool: PgPool) {
        let err = create_admin(&pool, "root", "123").await.unwrap_err();
        assert!(err.to_string().contains("at least 6 characters"));
    }
}
