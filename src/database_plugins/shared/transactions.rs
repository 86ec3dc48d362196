// ABOUTME: Transaction management with an RAII guard for the reset deletion sequence.
// ABOUTME: Rolls back automatically on drop and offers explicit commit and rollback.

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Transaction management with RAII guards
//!
//! The `TransactionGuard` ensures database transactions are properly handled:
//! - Automatic rollback on drop if not explicitly committed
//! - Commit and rollback consume the guard
//! - Works with any `SQLx` backend via generics
//!
//! ## Example Usage
//!
//! ```text
//! let tx = pool.begin().await?;
//! let mut guard = TransactionGuard::new(tx);
//!
//! sqlx::query("DELETE FROM activities").execute(guard.executor()?).await?;
//! sqlx::query("DELETE FROM accounts").execute(guard.executor()?).await?;
//!
//! // Explicit commit - if this line isn't reached, the transaction rolls back
//! guard.commit().await?;
//! ```

use sqlx::{Database, Transaction};
use tracing::{debug, warn};

use crate::errors::database::DatabaseError;
use crate::errors::{AppError, AppResult};

/// RAII guard for database transactions ensuring automatic rollback on drop
///
/// # Type Parameters
///
/// * `DB` - The database type (e.g., `Sqlite`)
pub struct TransactionGuard<'c, DB: Database> {
    transaction: Option<Transaction<'c, DB>>,
    committed: bool,
}

impl<'c, DB: Database> TransactionGuard<'c, DB> {
    /// Create a new transaction guard from an existing `SQLx` transaction
    #[must_use]
    pub fn new(transaction: Transaction<'c, DB>) -> Self {
        debug!("TransactionGuard created - transaction will auto-rollback if not committed");
        Self {
            transaction: Some(transaction),
            committed: false,
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction was already consumed or the commit fails
    pub async fn commit(mut self) -> AppResult<()> {
        let tx = self
            .transaction
            .take()
            .ok_or_else(|| AppError::internal("Transaction already consumed - cannot commit"))?;
        tx.commit()
            .await
            .map_err(|source| DatabaseError::TransactionFailed {
                action: "commit",
                source,
            })?;
        self.committed = true;
        debug!("TransactionGuard committed successfully");
        Ok(())
    }

    /// Explicitly rollback the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction was already consumed or the rollback fails
    pub async fn rollback(mut self) -> AppResult<()> {
        let tx = self
            .transaction
            .take()
            .ok_or_else(|| AppError::internal("Transaction already consumed - cannot rollback"))?;
        tx.rollback()
            .await
            .map_err(|source| DatabaseError::TransactionFailed {
                action: "rollback",
                source,
            })?;
        debug!("TransactionGuard rolled back explicitly");
        Ok(())
    }

    /// Check if the transaction has been committed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    /// Get a mutable reference to the underlying connection for executing queries
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction has already been committed or rolled back.
    pub fn executor(&mut self) -> AppResult<&mut <DB as Database>::Connection> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            AppError::internal("Transaction already consumed - guard used after commit/rollback")
        })
    }
}

impl<DB: Database> Drop for TransactionGuard<'_, DB> {
    fn drop(&mut self) {
        if self.transaction.is_some() && !self.committed {
            warn!(
                "TransactionGuard dropped without commit - transaction will be rolled back automatically"
            );
        }
    }
}

/// Type alias for `SQLite` transaction guard
pub type SqliteTransactionGuard<'c> = TransactionGuard<'c, sqlx::Sqlite>;
