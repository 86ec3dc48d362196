// ABOUTME: Team leaderboard scoring from member activity calories
// ABOUTME: Each member's calorie sum is truncated toward zero before being added to the team total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::SeedStore;
use crate::errors::AppResult;
use tracing::debug;
use uuid::Uuid;

/// Convert a calorie sum into points
///
/// A missing sum (member without activities) scores 0.
#[must_use]
pub fn calories_to_points(sum: Option<f64>) -> i64 {
    // Saturating float-to-int cast; NaN maps to 0
    sum.unwrap_or(0.0).trunc() as i64
}

/// Total points of a team: the sum of its current members' truncated calorie sums
///
/// # Errors
///
/// Returns an error if the membership or aggregate query fails
pub async fn team_total_points<S>(store: &S, team_id: Uuid) -> AppResult<i64>
where
    S: SeedStore + ?Sized,
{
    let mut total: i64 = 0;
    for account_id in store.team_member_ids(team_id).await? {
        let points = calories_to_points(store.sum_calories_for_account(account_id).await?);
        debug!(team_id = %team_id, account_id = %account_id, points, "Member contribution");
        total = total.saturating_add(points);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sum_scores_zero() {
        assert_eq!(calories_to_points(None), 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(calories_to_points(Some(510.9)), 510);
        assert_eq!(calories_to_points(Some(0.99)), 0);
        assert_eq!(calories_to_points(Some(-12.7)), -12);
    }

    #[test]
    fn test_non_finite_sums_saturate() {
        assert_eq!(calories_to_points(Some(f64::NAN)), 0);
        assert_eq!(calories_to_points(Some(f64::INFINITY)), i64::MAX);
    }
}
