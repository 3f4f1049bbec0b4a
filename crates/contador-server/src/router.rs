//! Axum router wiring.

use axum::{middleware, routing::get, Router};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/healthcheck", get(api::healthcheck))
        .route("/contador", get(api::contador));

    if state.cfg().server.metrics {
        router = router.route("/metrics", get(ops::metrics));
    }

    router
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .with_state(state)
}
