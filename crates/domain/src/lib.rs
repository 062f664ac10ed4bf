//! Domain layer for the bed timeline service.
//!
//! This crate contains:
//! - Domain models (Asset, Bed, BedAssignment, BedHistory, TimelineEntry)
//! - The asset diff and timeline assembly services
//! - Domain error types

pub mod models;
pub mod services;

#[cfg(test)]
pub(crate) mod fixtures;
