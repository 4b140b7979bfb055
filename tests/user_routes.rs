//! 사용자 라우트 통합 테스트
//!
//! 실제 라우트 설정과 기본 검증기를 사용하고, 서비스만 테스트 더블로 교체합니다.

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use common::{fixtures, StubUserService};

#[actix_web::test]
async fn create_user_with_full_body_returns_200() {
    let service = StubUserService::resolving(fixtures::default_user());
    let app = init_app!(service.clone());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(fixtures::default_request_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "message": "User created",
            "responseObject": { "user": fixtures::default_user() }
        })
    );
    assert_eq!(service.create_calls(), vec![fixtures::default_request_body()]);
    assert!(service.update_calls().is_empty());
}

#[actix_web::test]
async fn create_user_service_rejection_returns_500() {
    let service = StubUserService::rejecting("Error trying to save user");
    let app = init_app!(service.clone());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(fixtures::default_request_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "message": "Error creating user", "error": "Error trying to save user" })
    );
    assert_eq!(service.create_calls().len(), 1);
}

#[actix_web::test]
async fn create_user_with_missing_email_is_rejected_before_service() {
    let service = StubUserService::resolving(fixtures::default_user());
    let app = init_app!(service.clone());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Jane" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "error": "The following fields are required and must be not empty strings: email" })
    );
    assert!(service.create_calls().is_empty());
}

#[actix_web::test]
async fn create_user_with_empty_body_lists_every_missing_field() {
    let service = StubUserService::resolving(fixtures::default_user());
    let app = init_app!(service.clone());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "The following fields are required and must be not empty strings: name, email"
    );
    assert!(service.create_calls().is_empty());
}

#[actix_web::test]
async fn update_user_with_full_body_returns_200() {
    let service = StubUserService::resolving(fixtures::updated_user());
    let app = init_app!(service.clone());

    let request_body = fixtures::default_request_body().with("id", "64b7f0c2a1b2c3d4e5f60718");
    let req = test::TestRequest::put()
        .uri("/user")
        .set_json(&request_body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "message": "User updated",
            "responseObject": { "user": fixtures::updated_user() }
        })
    );
    assert_eq!(service.update_calls(), vec![request_body]);
    assert!(service.create_calls().is_empty());
}

#[actix_web::test]
async fn update_user_service_rejection_returns_500() {
    let service = StubUserService::rejecting("User not found");
    let app = init_app!(service.clone());

    let req = test::TestRequest::put()
        .uri("/user")
        .set_json(fixtures::default_request_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "message": "Error update user", "error": "User not found" })
    );
}

#[actix_web::test]
async fn update_user_with_empty_name_is_rejected_before_service() {
    let service = StubUserService::resolving(fixtures::updated_user());
    let app = init_app!(service.clone());

    let req = test::TestRequest::put()
        .uri("/user")
        .set_json(json!({ "name": "", "email": "jane@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(service.update_calls().is_empty());
}

#[actix_web::test]
async fn unknown_route_does_not_reach_controller() {
    let service = StubUserService::rejecting("Error trying to save user");
    let app = init_app!(service.clone());

    let req = test::TestRequest::post()
        .uri("/innapropriate-route")
        .set_json(fixtures::default_request_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(service.create_calls().is_empty());
}

#[actix_web::test]
async fn non_object_body_is_rejected_by_extractor() {
    let service = StubUserService::resolving(fixtures::default_user());
    let app = init_app!(service.clone());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!(["name", "email"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert!(service.create_calls().is_empty());
}

#[actix_web::test]
async fn health_check_reports_healthy() {
    let app = init_app!(StubUserService::resolving(fixtures::default_user()));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
