// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for octofit-cli
// ABOUTME: Provides access to the demo data commands

pub mod populate;
