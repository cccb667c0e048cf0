//! App Router

use salvo::{
    Router,
    cors::{AllowHeaders, AllowOrigin, Cors, CorsHandler},
    http::Method,
};

use crate::{cars, carts, checkout};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("cars").get(cars::index::handler))
        .push(
            Router::with_path("carrito")
                .get(carts::get::handler)
                .post(carts::create::handler)
                .delete(carts::delete::handler),
        )
        .push(Router::with_path("comprar").post(checkout::buy::handler))
        .push(Router::with_path("confirmar-compra").post(checkout::confirm::handler))
}

/// CORS policy for the storefront; `*` allows any origin.
pub(crate) fn cors(allow_origin: &str) -> CorsHandler {
    let cors = if allow_origin == "*" {
        Cors::new().allow_origin(AllowOrigin::any())
    } else {
        Cors::new().allow_origin(allow_origin)
    };

    cors.allow_methods(vec![Method::GET, Method::POST, Method::DELETE])
        .allow_headers(AllowHeaders::any())
        .into_handler()
}
