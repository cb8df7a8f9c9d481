//! User handlers

use std::sync::Arc;

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::Argon2;
use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use crate::store::{CreateUserTxParams, VerifyEmailTxParams};
use crate::user::User;
use crate::validation::{EmailAddress, FullName, Password, Username};

/// User registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "jane_doe")]
    pub username: String,
    #[schema(example = "password123")]
    pub password: String,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// User data without credentials
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            is_email_verified: user.is_email_verified,
            created_at: user.created_at,
        }
    }
}

/// Email verification query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct VerifyEmailQuery {
    pub email_id: i64,
    pub secret_code: String,
}

/// Email verification response
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    pub is_verified: bool,
}

/// Register user endpoint
///
/// POST /v1/users
///
/// The verification-email hand-off runs inside the same transaction as the
/// insert: if it cannot be enqueued, no user row is created.
#[utoipa::path(
    post,
    path = "/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid username, password, name or email"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    let username = Username::new(&req.username)?;
    let password = Password::new(&req.password)?;
    let full_name = FullName::new(&req.full_name)?;
    let email = EmailAddress::new(&req.email)?;

    let salt = SaltString::generate(&mut OsRng);
    let hashed_password = Argon2::default()
        .hash_password(password.as_str().as_bytes(), &salt)
        .map_err(|e| ApiError::internal(format!("password hashing failed: {e}")))?
        .to_string();

    let params = CreateUserTxParams {
        username: username.into_string(),
        hashed_password,
        full_name: full_name.into_string(),
        email: email.into_string(),
    };

    let distributor = state.distributor.clone();
    let user = state
        .store
        .create_user_tx(params, move |user| {
            let username = user.username.clone();
            Box::pin(async move {
                distributor
                    .distribute_send_verify_email(&username)
                    .await
                    .map_err(Into::into)
            })
        })
        .await?;

    tracing::info!(username = %user.username, "user registered");
    ok(user.into())
}

/// Verify email endpoint
///
/// GET /v1/verify_email?email_id=..&secret_code=..
#[utoipa::path(
    get,
    path = "/v1/verify_email",
    params(VerifyEmailQuery),
    responses(
        (status = 200, description = "Email verified", body = VerifyEmailResponse),
        (status = 404, description = "Verification absent, expired or already used")
    ),
    tag = "Users"
)]
pub async fn verify_email(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyEmailQuery>,
) -> ApiResult<VerifyEmailResponse> {
    let result = state
        .store
        .verify_email_tx(VerifyEmailTxParams {
            email_id: query.email_id,
            secret_code: query.secret_code,
        })
        .await?;

    ok(VerifyEmailResponse {
        is_verified: result.user.is_email_verified,
    })
}
