//! Axum router wiring.
//!
//! `/counters` resource routes plus the ops endpoints. Request metrics are
//! recorded for matched routes only.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, http::handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/counters",
            get(handlers::list_counters).post(handlers::create_counter),
        )
        .route(
            "/counters/:name",
            get(handlers::get_counter)
                .put(handlers::increase_counter)
                .delete(handlers::decrease_counter),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track::track))
        .with_state(state)
}
