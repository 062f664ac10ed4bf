//! HTTP route handlers.

pub mod bed_timeline;
pub mod health;
