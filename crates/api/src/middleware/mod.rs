//! HTTP middleware components.

pub mod logging;
pub mod trace_id;

pub use trace_id::{trace_id, REQUEST_ID_HEADER};
