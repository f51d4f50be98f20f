//! Shared fixtures for integration tests.

use std::sync::Arc;
use pattern_mux::{presets, Mux};

/// A path table with a realistic set of overlapping routes.
pub fn route_table() -> Mux<&'static str> {
    let mux = presets::path();
    for (pattern, handler) in ROUTES {
        mux.bind(pattern, *handler);
    }
    mux
}

pub const ROUTES: &[(&str, &str)] = &[
    ("/", "index"),
    ("/api/", "api"),
    ("/api/v1/", "api-v1"),
    ("/api/v1/users", "users"),
    ("/static/", "static"),
    ("/healthz", "health"),
];

/// Queries covering exact, prefix, fallback and unnormalized forms.
pub const QUERIES: &[&str] = &[
    "/",
    "",
    "/api",
    "/api/",
    "/api/v1/users",
    "/api/v1/users/7",
    "api/v1/orders",
    "/static/css/site.css",
    "/healthz",
    "/healthz/deep",
    "/unknown",
];

/// Resolve every fixture query, sequentially.
#[allow(dead_code)]
pub fn resolve_all(mux: &Mux<&'static str>) -> Vec<Option<&'static str>> {
    QUERIES
        .iter()
        .map(|q| mux.lookup(q).unwrap().map(|hit| hit.value))
        .collect()
}

#[allow(dead_code)]
pub fn shared_route_table() -> Arc<Mux<&'static str>> {
    Arc::new(route_table())
}
