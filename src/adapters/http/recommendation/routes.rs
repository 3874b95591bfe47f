//! Axum router configuration for recommendation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_recommendation, health, root, RecommendationAppState};

/// Create the recommendation API router.
///
/// # Routes
///
/// - `GET /` - Liveness message
/// - `GET /health` - Health check
/// - `POST /getRecommendation` - Recommend a package for survey answers
pub fn recommendation_router() -> Router<RecommendationAppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/getRecommendation", post(get_recommendation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    fn app() -> Router {
        recommendation_router()
            .with_state(RecommendationAppState::standard("http://localhost:8501/").unwrap())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/getRecommendation")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn root_route_is_mounted() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Cogni API is running"})
        );
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn recommendation_route_returns_success_envelope() {
        let response = app()
            .oneshot(post_json(json!({
                "org_type": "Mental Health Practitioner – Private Practice",
                "team_size": "2–5 providers",
                "client_volume": "Less than 100"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["recommendation"]["package"], "Fresh Start");
        assert_eq!(body["recommendation"]["seats"], 4);
        assert_eq!(body["recommendation"]["monthly_price"], 196);
    }

    #[tokio::test]
    async fn invalid_mapping_is_an_ok_error_envelope() {
        let response = app()
            .oneshot(post_json(json!({
                "org_type": "",
                "team_size": "",
                "client_volume": "Low"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid mapping"));
    }

    #[tokio::test]
    async fn missing_required_field_uses_error_envelope() {
        let response = app()
            .oneshot(post_json(json!({"org_type": "Other", "team_size": "1"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("client_volume"));
    }

    #[tokio::test]
    async fn get_on_recommendation_route_is_not_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/getRecommendation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
