//! Add To Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use autos_app::domain::carts::models::ProductDescriptor;

use crate::{carts::errors::into_status_error, extensions::*};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// Any non-empty JSON value describing the product
    pub producto: Option<Value>,
}

/// Cart Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartUpdatedResponse {
    pub message: String,

    /// The cart after the addition
    pub carrito: Vec<Value>,
}

/// Add To Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Add Product To Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product missing"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartUpdatedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let items = state
        .app
        .carts
        .add_item(json.into_inner().producto)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(CartUpdatedResponse {
        message: "Producto agregado al carrito".to_string(),
        carrito: items
            .into_iter()
            .map(ProductDescriptor::into_value)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use autos_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{carts::errors::MISSING_PRODUCT, test_helpers::carts_service};

    use crate::messages::MessageResponse;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carrito").post(handler))
    }

    #[tokio::test]
    async fn test_add_returns_201_with_updated_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(|product| *product == Some(json!({"name": "Civic", "price": 21500})))
            .return_once(|product| Ok(vec![ProductDescriptor::new(product).unwrap()]));

        let mut res = TestClient::post("http://example.com/carrito")
            .json(&json!({ "producto": { "name": "Civic", "price": 21500 } }))
            .send(&make_service(carts))
            .await;

        let body: CartUpdatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.message, "Producto agregado al carrito");
        assert_eq!(body.carrito, vec![json!({"name": "Civic", "price": 21500})]);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_missing_product_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(Option::is_none)
            .return_once(|_| Err(CartsServiceError::MissingProduct));

        let mut res = TestClient::post("http://example.com/carrito")
            .json(&json!({}))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(body.message, MISSING_PRODUCT);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_invalid_json_returns_400() {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let res = TestClient::post("http://example.com/carrito")
            .raw_json("{not json")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
