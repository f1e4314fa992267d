//! Shared types, errors, and configuration for Fintrack.
//!
//! This crate provides common types used across all other crates:
//! - Money helpers for exact minor-unit storage
//! - Typed IDs for type-safe ledger row references
//! - Pagination types for list queries
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, LedgerPolicy};
pub use error::{AppError, AppResult};
