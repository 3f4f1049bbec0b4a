//! contador server library entry.
//!
//! Wires config, the shared counter, request metrics, and the HTTP routes
//! into one axum `Router`. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
