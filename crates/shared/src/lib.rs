//! Shared types, errors, and configuration for Tapza.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision and fixed-point display
//! - Typed IDs for draft and line references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
