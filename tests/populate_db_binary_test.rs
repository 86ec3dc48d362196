// ABOUTME: End-to-end tests running the populate-db and octofit-cli binaries
// ABOUTME: Checks exit status and the resulting file database across populate, skip and force runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::DEMO_COUNTS;
use octofit_tracker::database::Database;
use octofit_tracker::database_plugins::SeedStore;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(binary: &str, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .env("RUST_LOG", "warn")
        .env_remove("DATABASE_URL")
        .output()
        .expect("Failed to run binary")
}

fn database_url(path: &Path) -> String {
    format!("sqlite:{}", path.display())
}

async fn account_ids(url: &str) -> Vec<uuid::Uuid> {
    let database = Database::new(url).await.unwrap();
    database
        .list_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect()
}

#[tokio::test]
async fn test_populate_db_binary_populates_skips_and_forces() {
    common::init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let url = database_url(&temp_dir.path().join("data").join("octofit.db"));
    let binary = env!("CARGO_BIN_EXE_populate-db");

    let first = run_binary(binary, &["--database-url", &url]);
    assert!(first.status.success(), "{first:?}");
    let database = Database::new(&url).await.unwrap();
    assert_eq!(common::snapshot_counts(&database).await.unwrap(), DEMO_COUNTS);
    drop(database);
    let original = account_ids(&url).await;

    let skipped = run_binary(binary, &["--database-url", &url]);
    assert!(skipped.status.success(), "{skipped:?}");
    assert_eq!(account_ids(&url).await, original);

    let forced = run_binary(binary, &["--database-url", &url, "--force"]);
    assert!(forced.status.success(), "{forced:?}");
    let replaced = account_ids(&url).await;
    assert_eq!(replaced.len(), 4);
    assert!(replaced.iter().all(|id| !original.contains(id)));
}

#[tokio::test]
async fn test_cli_populate_db_subcommand() {
    common::init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let url = database_url(&temp_dir.path().join("cli.db"));
    let binary = env!("CARGO_BIN_EXE_octofit-cli");

    let output = run_binary(binary, &["--database-url", &url, "populate-db", "--force"]);
    assert!(output.status.success(), "{output:?}");

    let database = Database::new(&url).await.unwrap();
    assert_eq!(common::snapshot_counts(&database).await.unwrap(), DEMO_COUNTS);
}

#[test]
fn test_invalid_database_url_fails_with_readable_error() {
    let postgres = "postgres://localhost/octofit";
    let runs = [
        run_binary(env!("CARGO_BIN_EXE_populate-db"), &["--database-url", postgres]),
        run_binary(
            env!("CARGO_BIN_EXE_octofit-cli"),
            &["--database-url", postgres, "populate-db"],
        ),
    ];

    for output in runs {
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Configuration is invalid"), "{stderr}");
        assert!(stderr.contains("only sqlite is supported"), "{stderr}");
        assert!(!stderr.contains("AppError {"), "{stderr}");
    }
}
