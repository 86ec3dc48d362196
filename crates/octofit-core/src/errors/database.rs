// ABOUTME: Structured error types for database operations with sqlx conversion
// ABOUTME: Records the failing operation and table so lifecycle errors point at the right step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or configure the connection pool
    #[error("Failed to connect to database: {source}")]
    ConnectionFailed {
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Schema bootstrap failed
    #[error("Failed to create table {table}: {source}")]
    MigrationFailed {
        /// Table being created
        table: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A statement against a table failed
    #[error("Failed to {operation} in {table}: {source}")]
    QueryFailed {
        /// Short description of the statement ("insert row", "delete all rows", ...)
        operation: &'static str,
        /// Table the statement targeted
        table: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Begin, commit or rollback failed
    #[error("Transaction {action} failed: {source}")]
    TransactionFailed {
        /// "begin", "commit" or "rollback"
        action: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A stored value could not be decoded into its model type
    #[error("Invalid value in column {column}: {reason}")]
    InvalidData {
        /// Column holding the bad value
        column: &'static str,
        /// Why decoding failed
        reason: String,
    },
}

impl DatabaseError {
    /// Build a `QueryFailed` error
    #[must_use]
    pub const fn query(operation: &'static str, table: &'static str, source: sqlx::Error) -> Self {
        Self::QueryFailed {
            operation,
            table,
            source,
        }
    }

    /// Build an `InvalidData` error
    pub fn invalid_data(column: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            column,
            reason: reason.into(),
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match error {
            DatabaseError::InvalidData { .. } => ErrorCode::InternalError,
            _ => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}
