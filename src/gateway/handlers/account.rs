//! Account handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use crate::account::{Account, AccountRepo};
use crate::store::StoreError;
use crate::validation::{Currency, Owner};

/// Create account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = "Jane Doe")]
    pub owner: String,
    #[schema(example = "USD")]
    pub currency: String,
}

/// List accounts query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAccountsQuery {
    /// Page size, 1-100 (default 20)
    pub limit: Option<i64>,
    /// Rows to skip (default 0)
    pub offset: Option<i64>,
}

/// Create account endpoint
///
/// POST /v1/accounts
///
/// New accounts start with a zero balance; only transfers move it.
#[utoipa::path(
    post,
    path = "/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = Account),
        (status = 400, description = "Invalid owner or currency"),
        (status = 409, description = "Owner already has an account in this currency")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<Account> {
    let owner = Owner::new(&req.owner)?;
    let currency = Currency::parse(&req.currency)?;

    let account = AccountRepo::create(state.store.pool(), owner.as_str(), 0, currency.as_str())
        .await
        .map_err(StoreError::from)?;

    tracing::info!(account_id = account.id, owner = %account.owner, "account created");
    ok(account)
}

/// Get account endpoint
///
/// GET /v1/accounts/{id}
#[utoipa::path(
    get,
    path = "/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account found", body = Account),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Account> {
    let account = AccountRepo::get(state.store.pool(), id)
        .await
        .map_err(StoreError::from)?
        .ok_or_else(|| ApiError::not_found(format!("account {id} not found")))?;

    ok(account)
}

/// List accounts endpoint
///
/// GET /v1/accounts?limit=20&offset=0
#[utoipa::path(
    get,
    path = "/v1/accounts",
    params(ListAccountsQuery),
    responses(
        (status = 200, description = "Accounts page", body = Vec<Account>)
    ),
    tag = "Accounts"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListAccountsQuery>,
) -> ApiResult<Vec<Account>> {
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let offset = query.offset.unwrap_or(0).max(0);

    let accounts = AccountRepo::list(state.store.pool(), limit, offset)
        .await
        .map_err(StoreError::from)?;

    ok(accounts)
}
