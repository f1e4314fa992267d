//! Supported investment kinds.

use serde::{Deserialize, Serialize};

use super::error::FinanceError;

/// Kind of investment an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    /// Listed equities.
    Stocks,
    /// Fixed income.
    Bonds,
    /// Pooled funds.
    #[serde(rename = "Mutual Funds")]
    MutualFunds,
    /// Property.
    #[serde(rename = "Real Estate")]
    RealEstate,
    /// Anything else.
    Other,
}

impl InvestmentType {
    /// Every supported kind, in display order.
    pub const ALL: [Self; 5] = [
        Self::Stocks,
        Self::Bonds,
        Self::MutualFunds,
        Self::RealEstate,
        Self::Other,
    ];

    /// Returns the stored label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Bonds => "Bonds",
            Self::MutualFunds => "Mutual Funds",
            Self::RealEstate => "Real Estate",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InvestmentType {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == label)
            .ok_or_else(|| FinanceError::InvalidInvestmentType(s.to_string()))
    }
}
