//! Typed IDs for type-safe ledger row references.
//!
//! Using typed IDs prevents accidentally passing an `ExpenseId` where a
//! `BudgetId` is expected. Ledger rows use store-assigned integer keys.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw row key.
            #[must_use]
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the inner row key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(IncomeId, "Unique identifier for an income entry.");
typed_id!(BudgetId, "Unique identifier for a budget entry.");
typed_id!(ExpenseId, "Unique identifier for an expense entry.");
typed_id!(InvestmentId, "Unique identifier for an investment entry.");
typed_id!(SavingsGoalId, "Unique identifier for a savings goal entry.");
