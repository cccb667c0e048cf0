//! Error Bodies
//!
//! Every failed response is answered with a `{message}` JSON body, whatever
//! the caller's `Accept` header asks for.

use salvo::{catcher::Catcher, http::ResBody, prelude::*};

use crate::messages::MessageResponse;

/// Catcher that renders status errors as [`MessageResponse`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(message_body)
}

#[handler]
async fn message_body(res: &mut Response, ctrl: &mut FlowCtrl) {
    let message = match res.take_body() {
        ResBody::Error(error) => error.brief,
        _ => res
            .status_code
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Error")
            .to_string(),
    };

    res.render(Json(MessageResponse::new(message)));

    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn rejects() -> Result<&'static str, StatusError> {
        Err(StatusError::bad_request().brief("Producto no especificado"))
    }

    fn service() -> Service {
        Service::new(Router::with_path("comprar").post(rejects)).catcher(catcher())
    }

    #[tokio::test]
    async fn status_errors_become_message_bodies() -> TestResult {
        let mut res = TestClient::post("http://example.com/comprar")
            .add_header("accept", "*/*", true)
            .send(&service())
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Producto no especificado");

        Ok(())
    }

    #[tokio::test]
    async fn html_callers_still_get_json() -> TestResult {
        let mut res = TestClient::post("http://example.com/comprar")
            .add_header("accept", "text/html", true)
            .send(&service())
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        let body: MessageResponse = res.take_json().await?;

        assert!(
            content_type.is_some_and(|value| value.starts_with("application/json")),
            "expected a json content type"
        );
        assert_eq!(body.message, "Producto no especificado");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_get_a_message_too() -> TestResult {
        let mut res = TestClient::get("http://example.com/checkout")
            .send(&service())
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.message.is_empty(), "expected a not found message");

        Ok(())
    }
}
