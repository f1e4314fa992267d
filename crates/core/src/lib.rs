//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All ledger entry types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Entry types and the validation engine guarding every write
//! - `budget` - Per-category budget utilization
//! - `dashboard` - Savings progress and summary views

pub mod budget;
pub mod dashboard;
pub mod ledger;
