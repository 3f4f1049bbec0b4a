//! Top-level facade crate for contador.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use contador_core::*;
}

pub mod server {
    pub use contador_server::*;
}
