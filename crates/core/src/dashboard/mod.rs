//! Dashboard figures and activity types.
//!
//! This module provides types for dashboard data:
//! - Ledger totals and savings progress
//! - Recent activity events

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::*;
