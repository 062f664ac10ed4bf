//! Shared utilities and common types for the bed timeline service.
//!
//! This crate provides common functionality used across all other crates:
//! - Absolute and relative date/time formatting
//! - Common validation logic

pub mod datetime;
pub mod validation;
