//! Request handlers

pub mod account;
pub mod health;
pub mod transfer;
pub mod user;

pub use account::{create_account, get_account, list_accounts};
pub use health::{HealthResponse, health_check};
pub use transfer::{create_transfer, get_transfer};
pub use user::{UserResponse, VerifyEmailResponse, create_user, verify_email};
