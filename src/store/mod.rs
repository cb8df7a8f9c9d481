//! Transactional store
//!
//! [`Store`] wraps the connection pool and owns transaction boundaries.
//! Multi-step writes go through [`Store::run_in_transaction`], which hands
//! the unit of work an open transaction; repositories are invoked on that
//! transaction (`&mut **tx`) so every read and write inside the unit
//! observes one consistent view and nothing is visible to other
//! transactions until commit.

pub mod error;
pub mod transfer_tx;
pub mod user_tx;

pub use error::StoreError;
pub use transfer_tx::{TransferTxParams, TransferTxResult};
pub use user_tx::{CreateUserTxParams, VerifyEmailTxParams, VerifyEmailTxResult};

use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};

/// A unit of work: borrows the open transaction, resolves to its outcome
pub type UnitOfWork<'t, T> = BoxFuture<'t, Result<T, StoreError>>;

/// Store provides repositories plus atomic multi-step workflows
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Create a new store on top of an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for standalone repository
    /// calls outside any transaction)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Execute a unit of work within one database transaction
    ///
    /// Begins a transaction at the store's default isolation level
    /// (read committed), runs `unit_of_work` against it, then commits on
    /// success or rolls back on failure. If the rollback itself fails, the
    /// returned [`StoreError::TransactionAborted`] carries both the original
    /// cause and the rollback cause. A commit failure is surfaced as a
    /// failure; the unit of work's effects are then not durable.
    ///
    /// Cancellation: if the caller drops the returned future (deadline,
    /// disconnect), the transaction guard is dropped and the driver rolls
    /// the open transaction back before returning the connection to the
    /// pool, so no partial effect becomes visible.
    ///
    /// Nested transactions are not supported; a unit of work must be
    /// self-contained.
    pub async fn run_in_transaction<T, F>(&self, unit_of_work: F) -> Result<T, StoreError>
    where
        F: for<'t> FnOnce(&'t mut Transaction<'static, Postgres>) -> UnitOfWork<'t, T>,
    {
        let mut tx = self.pool.begin().await?;

        match unit_of_work(&mut tx).await {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(cause) => match tx.rollback().await {
                Ok(()) => Err(cause),
                Err(rollback_err) => Err(StoreError::TransactionAborted {
                    cause: Box::new(cause),
                    rollback: rollback_err.to_string(),
                }),
            },
        }
    }
}
