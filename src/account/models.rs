//! Data models for accounts and the ledger

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Bank account
///
/// `balance` is a signed amount in minor currency units (cents). It equals
/// the sum of all entry amounts ever posted against this account; the only
/// writer after creation is the transfer orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Ledger entry
///
/// Immutable, append-only. Negative amount = debit, positive = credit.
/// Entries are created only inside a transfer unit of work, in pairs whose
/// amounts sum to zero across the two accounts involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Entry {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Transfer record
///
/// Immutable, append-only. Invariant: `from_account_id != to_account_id`
/// and `amount > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}
