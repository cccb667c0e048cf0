//! Route labels for spans and metrics.

/// Paths served by API handlers. Anything else falls through to the static frontend.
const KNOWN_ROUTES: [&str; 7] = [
    "/cars",
    "/carrito",
    "/comprar",
    "/confirmar-compra",
    "/healthcheck",
    "/metrics",
    "/api-doc/openapi.json",
];

const DOCS_ROUTE: &str = "/docs";
const STATIC_ROUTE: &str = "/{static}";

/// Maps a request path onto a bounded set of labels so metrics stay low-cardinality.
pub(super) fn route_label(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if let Some(route) = KNOWN_ROUTES.into_iter().find(|route| *route == trimmed) {
        return route;
    }

    if trimmed == DOCS_ROUTE || trimmed.starts_with("/docs/") {
        return DOCS_ROUTE;
    }

    STATIC_ROUTE
}
