use super::*;
use axum::{body, body::Body, http::Request};
use std::io::Write;
use tower::ServiceExt;

fn test_app() -> Router {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(
        br#"[
            {"identifier": "X1", "nombres": "Ana", "empresa": "Minera Norte"},
            {"identifier": "Y2", "nombres": "Luis"}
        ]"#,
    )
    .expect("write");
    let directory = PersonDirectory::load(file.path()).expect("directory");
    build_router(Arc::new(AppState {
        api: ApiContext { directory },
    }))
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let request = Request::get("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn known_person_is_returned_verbatim() {
    let request = Request::get("/api/person/X1")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"identifier": "X1", "nombres": "Ana", "empresa": "Minera Norte"})
    );
}

#[tokio::test]
async fn person_attributes_keep_file_order() {
    let request = Request::get("/api/person/X1")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(
        bytes.as_ref(),
        br#"{"identifier":"X1","nombres":"Ana","empresa":"Minera Norte"}"#
    );
}

#[tokio::test]
async fn unknown_person_is_404_with_error_body() {
    let request = Request::get("/api/person/UNKNOWN")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"error": "Person not found"})
    );
}

#[tokio::test]
async fn identifier_match_is_case_sensitive() {
    let request = Request::get("/api/person/x1")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn percent_encoded_identifier_is_decoded() {
    let app = build_router(Arc::new(AppState {
        api: ApiContext {
            directory: PersonDirectory::new(vec![Person::new("12.345.678-9 A")]),
        },
    }));
    let request = Request::get("/api/person/12.345.678-9%20A")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn error_codes_map_to_statuses() {
    assert_eq!(
        status_for(&ApiError::person_not_found()),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_for(&ApiError::new(ErrorCode::Internal, "boom")),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
