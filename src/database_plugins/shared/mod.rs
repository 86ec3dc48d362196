// ABOUTME: Shared database helpers used by the SQLite store
// ABOUTME: Row mappers and the RAII transaction guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Model ↔ SQL row conversion helpers (row parsing, id and timestamp decoding)
pub mod mappers;

/// RAII transaction guard with explicit commit and rollback
pub mod transactions;
