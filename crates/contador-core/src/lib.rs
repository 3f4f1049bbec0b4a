//! contador core: the shared counter, JSON wire bodies, and error types.
//!
//! This crate carries no transport or runtime dependencies. The HTTP service
//! lives in `contador-server`; anything here can be reused by clients and
//! tests without pulling in axum or tokio.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod protocol;

pub use counter::Counter;
/// Unified error type and its `Result` alias.
pub use error::{ContadorError, Result};
