use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use vendora_auth::{IdentityClaim, UserRole, create_access_token};
use vendora_config::{JwtConfig, ServerConfig};
use vendora_core::password::{hash_password, verify_password};
use vendora_core::AppError;
use vendora_db::StoreError;
use vendora_models::{LoginRequest, LoginResponse, RegisterAdminRequest, RegisterRequest, RegisteredUser};

const INVALID_CREDENTIALS: &str = "invalid credentials";
const USERNAME_TAKEN: &str = "username already taken";

pub struct AuthService;

impl AuthService {
    /// Creates a `user` account. A taken username is a 400.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<RegisteredUser, AppError> {
        let username = dto.normalized_username();
        let hashed_password = hash_password(&dto.password)?;

        let user = Self::insert_user(db, &username, &hashed_password, UserRole::User)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => AppError::bad_request(anyhow!(USERNAME_TAKEN)),
                other => AppError::from(other),
            })?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Creates an `admin` account. A taken username is a 409.
    ///
    /// `adminKey` is compared only when `ADMIN_REGISTRATION_KEY` is configured.
    #[instrument(skip(db, dto, server_config), fields(username = %dto.username))]
    pub async fn register_admin(
        db: &PgPool,
        dto: RegisterAdminRequest,
        server_config: &ServerConfig,
    ) -> Result<RegisteredUser, AppError> {
        if let Some(expected) = &server_config.admin_registration_key {
            if dto.admin_key.as_deref() != Some(expected.as_str()) {
                warn!("Admin registration rejected: admin key mismatch");
                return Err(AppError::forbidden("invalid admin key"));
            }
        }

        let username = dto.normalized_username();
        let hashed_password = hash_password(&dto.password)?;

        let user = Self::insert_user(db, &username, &hashed_password, UserRole::Admin)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => AppError::conflict(USERNAME_TAKEN),
                other => AppError::from(other),
            })?;

        info!(user_id = user.id, "Admin registered");
        Ok(user)
    }

    /// Verifies the password and issues a one-hour token.
    ///
    /// Unknown usernames and wrong passwords produce the same 401.
    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i32,
            username: String,
            password: String,
            role: UserRole,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, password, role FROM users WHERE username = $1",
        )
        .bind(dto.normalized_username())
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let identity = IdentityClaim {
            id: user.id,
            username: user.username,
            role: user.role,
        };
        let token = create_access_token(&identity, jwt_config)?;

        info!(user_id = identity.id, role = %identity.role, "Login succeeded");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
        })
    }

    async fn insert_user(
        db: &PgPool,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<RegisteredUser, StoreError> {
        let user = sqlx::query_as::<_, RegisteredUser>(
            "INSERT INTO users (username, password, role) VALUES ($1, $2, $3) RETURNING id, username",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(db)
        .await?;

        Ok(user)
    }
}
