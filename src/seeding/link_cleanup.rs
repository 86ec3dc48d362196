// ABOUTME: Link-row cleanup strategies used by reset before either endpoint is deleted
// ABOUTME: Bulk join-table delete when the relation is addressable, per-owner clearing otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::{LinkRelation, StoreTransaction};
use crate::errors::AppResult;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::{debug, warn};

/// How the link rows of a relation are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCleanup {
    /// One statement deleting every row of the join relation
    BulkJoinDelete,
    /// Clear the links of each owner record one at a time, tolerating failures
    PerRecordClear,
}

impl LinkCleanup {
    /// Pick the strategy the open transaction supports for this relation
    ///
    /// # Errors
    ///
    /// Returns an error if the capability query fails
    pub async fn detect(
        tx: &mut dyn StoreTransaction,
        relation: LinkRelation,
    ) -> AppResult<Self> {
        let strategy = if tx.supports_bulk_link_delete(relation).await? {
            Self::BulkJoinDelete
        } else {
            Self::PerRecordClear
        };
        debug!(relation = %relation, strategy = %strategy, "Selected link cleanup strategy");
        Ok(strategy)
    }

    /// Remove every link row of the relation
    ///
    /// # Errors
    ///
    /// Returns an error if the bulk delete fails or the owner records cannot be listed.
    /// Individual per-owner failures are logged and counted, not returned.
    pub async fn apply(
        self,
        tx: &mut dyn StoreTransaction,
        relation: LinkRelation,
    ) -> AppResult<LinkCleanupReport> {
        match self {
            Self::BulkJoinDelete => {
                let rows_removed = tx.delete_all_links(relation).await?;
                Ok(LinkCleanupReport {
                    relation,
                    strategy: self,
                    rows_removed,
                    failed_owners: 0,
                })
            }
            Self::PerRecordClear => {
                let mut rows_removed = 0;
                let mut failed_owners = 0;
                for owner_id in tx.link_owner_ids(relation).await? {
                    match tx.clear_links(relation, owner_id).await {
                        Ok(rows) => rows_removed += rows,
                        Err(e) => {
                            warn!(
                                relation = %relation,
                                owner_id = %owner_id,
                                error = %e,
                                "Failed to clear links, continuing"
                            );
                            failed_owners += 1;
                        }
                    }
                }
                Ok(LinkCleanupReport {
                    relation,
                    strategy: self,
                    rows_removed,
                    failed_owners,
                })
            }
        }
    }
}

impl Display for LinkCleanup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::BulkJoinDelete => f.write_str("bulk join delete"),
            Self::PerRecordClear => f.write_str("per-record clear"),
        }
    }
}

/// Outcome of cleaning one relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCleanupReport {
    /// Relation that was cleaned
    pub relation: LinkRelation,
    /// Strategy used
    pub strategy: LinkCleanup,
    /// Link rows removed
    pub rows_removed: u64,
    /// Owner records whose links could not be cleared
    pub failed_owners: usize,
}
