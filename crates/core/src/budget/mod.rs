//! Per-category budget tracking.

pub mod service;
pub mod types;


pub use service::BudgetService;
pub use types::BudgetOverviewLine;
