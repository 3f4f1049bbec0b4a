//! JSON bodies exchanged over HTTP (stable API).

use serde::{Deserialize, Serialize};

/// Liveness status reported by the service.
pub const STATUS_UP: &str = "UP";

/// `GET /healthcheck` body: `{"status":"UP"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            status: STATUS_UP.to_string(),
        }
    }
}

/// `GET /contador` body: `{"contador":<n>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContadorValue {
    pub contador: u64,
}

/// Body of every error response produced by the service itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable client code, see [`crate::error::ClientCode`].
    pub error: String,
    pub message: String,
}
