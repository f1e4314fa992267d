//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod aggregation;
pub mod dashboard;
pub mod error;
pub mod ledger;

pub use aggregation::AggregationRepository;
pub use dashboard::DashboardRepository;
pub use error::LedgerError;
pub use ledger::LedgerRepository;
