// ABOUTME: Account persistence: insert, existence check and listing
// ABOUTME: Accounts are listed in insertion order so callers can address them by position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::shared::mappers::parse_account_from_row;
use crate::errors::database::DatabaseError;
use crate::errors::AppResult;
use crate::models::Account;
use uuid::Uuid;

use super::Database;

impl Database {
    /// Insert an account
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_account_impl(&self, account: &Account) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO accounts (id, username, email, first_name, last_name, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(account.id.to_string())
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("insert row", "accounts", e))?;

        Ok(account.id)
    }

    /// Whether at least one account exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn account_exists_impl(&self) -> AppResult<bool> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts)")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("check existence", "accounts", e))?;
        Ok(exists != 0)
    }

    /// All accounts in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is malformed
    pub async fn list_accounts_impl(&self) -> AppResult<Vec<Account>> {
        let rows = sqlx::query(
            r"
            SELECT id, username, email, first_name, last_name, created_at
            FROM accounts
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("list rows", "accounts", e))?;

        rows.iter().map(parse_account_from_row).collect()
    }
}
