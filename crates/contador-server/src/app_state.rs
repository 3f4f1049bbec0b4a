//! Shared application state for the contador service.
//!
//! The counter is owned here and handed to handlers through axum `State`;
//! there is no process-wide global. A fresh `AppState` always starts at 0.

use std::sync::Arc;

use contador_core::Counter;

use crate::config::ServiceConfig;
use crate::obs::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<ServiceConfig>,
    counter: Arc<Counter>,
    metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            counter: Arc::new(Counter::new()),
            metrics: Arc::new(HttpMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.cfg
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn metrics(&self) -> &HttpMetrics {
        &self.metrics
    }
}
