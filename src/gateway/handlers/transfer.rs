//! Transfer handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, error_codes, ok};
use crate::account::{Account, AccountRepo, Transfer, TransferRepo};
use crate::store::{StoreError, TransferTxParams, TransferTxResult};
use crate::validation::Currency;

/// Create transfer request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransferRequest {
    #[schema(example = 1)]
    pub from_account_id: i64,
    #[schema(example = 2)]
    pub to_account_id: i64,
    /// Amount in minor currency units
    #[schema(example = 3000)]
    pub amount: i64,
    /// Both accounts must hold this currency
    #[schema(example = "USD")]
    pub currency: String,
}

/// Create transfer endpoint
///
/// POST /v1/transfers
///
/// Both accounts must exist and hold the request currency; the move itself
/// is one atomic unit of work. A 409 means a concurrent write collided and
/// the client may retry.
#[utoipa::path(
    post,
    path = "/v1/transfers",
    request_body = CreateTransferRequest,
    responses(
        (status = 200, description = "Transfer committed", body = TransferTxResult),
        (status = 400, description = "Invalid parameters or currency mismatch"),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Write conflict, caller may retry"),
        (status = 422, description = "Insufficient balance")
    ),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTransferRequest>,
) -> ApiResult<TransferTxResult> {
    let currency = Currency::parse(&req.currency)?;

    valid_account(&state, req.from_account_id, currency).await?;
    valid_account(&state, req.to_account_id, currency).await?;

    let result = state
        .store
        .transfer_tx(TransferTxParams {
            from_account_id: req.from_account_id,
            to_account_id: req.to_account_id,
            amount: req.amount,
        })
        .await?;

    tracing::info!(
        transfer_id = result.transfer.id,
        from = req.from_account_id,
        to = req.to_account_id,
        amount = req.amount,
        "transfer committed"
    );
    ok(result)
}

/// Get transfer endpoint
///
/// GET /v1/transfers/{id}
#[utoipa::path(
    get,
    path = "/v1/transfers/{id}",
    params(("id" = i64, Path, description = "Transfer ID")),
    responses(
        (status = 200, description = "Transfer found", body = Transfer),
        (status = 404, description = "Transfer not found")
    ),
    tag = "Transfers"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Transfer> {
    let transfer = TransferRepo::get(state.store.pool(), id)
        .await
        .map_err(StoreError::from)?
        .ok_or_else(|| ApiError::not_found(format!("transfer {id} not found")))?;

    ok(transfer)
}

/// Check that an account exists and holds the expected currency
async fn valid_account(
    state: &AppState,
    account_id: i64,
    currency: Currency,
) -> Result<Account, ApiError> {
    let account = AccountRepo::get(state.store.pool(), account_id)
        .await
        .map_err(StoreError::from)?
        .ok_or_else(|| ApiError::not_found(format!("account {account_id} not found")))?;

    if account.currency != currency.as_str() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            error_codes::CURRENCY_MISMATCH,
            format!(
                "account {} holds {}, not {}",
                account_id, account.currency, currency
            ),
        ));
    }

    Ok(account)
}
