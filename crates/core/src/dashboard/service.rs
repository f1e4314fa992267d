//! Dashboard calculations.

use rust_decimal::Decimal;

use super::types::{ActivityItem, SavingsProgress};

/// Dashboard service for business logic.
pub struct DashboardService;

impl DashboardService {
    /// Measures `income - expenses` against a savings target.
    #[must_use]
    pub fn savings_progress(income: Decimal, expenses: Decimal, target: Decimal) -> SavingsProgress {
        let savings = income - expenses;
        SavingsProgress {
            savings,
            target,
            shortfall: (target - savings).max(Decimal::ZERO),
            achieved: savings >= target,
        }
    }

    /// Merges activity newest first and keeps at most `limit` items.
    #[must_use]
    pub fn merge_activity(
        mut items: Vec<ActivityItem>,
        limit: usize,
    ) -> Vec<ActivityItem> {
        items.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        items.truncate(limit);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::ActivityKind;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_savings_progress_shortfall() {
        let progress = DashboardService::savings_progress(dec!(1000), dec!(700), dec!(500));
        assert_eq!(progress.savings, dec!(300));
        assert_eq!(progress.shortfall, dec!(200));
        assert!(!progress.achieved);
    }

    #[test]
    fn test_savings_progress_achieved() {
        let progress = DashboardService::savings_progress(dec!(1000), dec!(200), dec!(500));
        assert_eq!(progress.shortfall, Decimal::ZERO);
        assert!(progress.achieved);
    }

    #[test]
    fn test_merge_activity_orders_newest_first() {
        let item = |kind, secs| ActivityItem {
            kind,
            label: "x".into(),
            amount: dec!(1),
            recorded_at: Utc.timestamp_opt(secs, 0).unwrap(),
        };
        let merged = DashboardService::merge_activity(
            vec![
                item(ActivityKind::Expense, 10),
                item(ActivityKind::Investment, 30),
                item(ActivityKind::Expense, 20),
            ],
            2,
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, ActivityKind::Investment);
        assert_eq!(merged[1].recorded_at, Utc.timestamp_opt(20, 0).unwrap());
    }
}
