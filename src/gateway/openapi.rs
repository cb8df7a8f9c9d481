//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::{Account, Entry, Transfer};
use crate::gateway::handlers::account::CreateAccountRequest;
use crate::gateway::handlers::transfer::CreateTransferRequest;
use crate::gateway::handlers::user::CreateUserRequest;
use crate::gateway::handlers::{HealthResponse, UserResponse, VerifyEmailResponse};
use crate::store::TransferTxResult;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ferrobank API",
        version = "1.0.0",
        description = "A small banking core: accounts, double-entry ledger and atomic transfers over PostgreSQL.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::transfer::create_transfer,
        crate::gateway::handlers::transfer::get_transfer,
        crate::gateway::handlers::user::create_user,
        crate::gateway::handlers::user::verify_email,
    ),
    components(schemas(
        Account,
        Entry,
        Transfer,
        TransferTxResult,
        CreateAccountRequest,
        CreateTransferRequest,
        CreateUserRequest,
        HealthResponse,
        UserResponse,
        VerifyEmailResponse,
    )),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Accounts", description = "Account creation and queries"),
        (name = "Transfers", description = "Atomic money movement"),
        (name = "Users", description = "Registration and email verification"),
    )
)]
pub struct ApiDoc;
