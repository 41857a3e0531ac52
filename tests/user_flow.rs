mod common;

use actix_web::{http::StatusCode, test};
use common::{test_data, TestContext};

#[tokio::test]
async fn test_sign_up_flow_success() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["_id"].is_string());
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["account"]["username"], "alice");
    assert_eq!(body["account"]["name"], "Alice");

    // credentials never leave the store
    for secret in ["salt", "passwordHash", "password_hash", "resetToken"] {
        assert!(body.get(secret).is_none(), "response leaks {secret}");
    }
}

#[tokio::test]
async fn test_sign_up_flow_missing_field() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.create_app()).await;

    let mut payload = test_data::sample_sign_up();
    payload["description"] = serde_json::json!("");

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing parameter(s)");
}

#[tokio::test]
async fn test_sign_up_flow_duplicate_email_or_username() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // same email, different casing, different username
    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up_with("A@X.com", "alice2"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email or username is already used");

    // same username, different email
    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up_with("b@x.com", "alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // usernames are case-sensitive: Alice is a different user
    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up_with("c@x.com", "Alice"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_log_in_flow() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;

    // right password returns the same id and the non-rotated token
    let req = test::TestRequest::post()
        .uri("/user/log_in")
        .set_json(serde_json::json!({ "email": "a@x.com", "password": "pw1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["_id"], created["_id"]);
    assert_eq!(body["token"], created["token"]);

    // wrong password
    let req = test::TestRequest::post()
        .uri("/user/log_in")
        .set_json(serde_json::json!({ "email": "a@x.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password isn't correct");

    // unknown email
    let req = test::TestRequest::post()
        .uri("/user/log_in")
        .set_json(serde_json::json!({ "email": "nobody@x.com", "password": "pw1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_update_profile_flow() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up())
        .to_request();
    let created: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let token = created["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up_with("b@x.com", "bob"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // partial update: only the submitted fields change, token stays
    let req = test::TestRequest::put()
        .uri("/user/update")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({ "email": "A@New.com", "name": "Alice B." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["_id"], created["_id"]);
    assert_eq!(body["token"], created["token"]);
    assert_eq!(body["email"], "a@new.com");
    assert_eq!(body["account"]["name"], "Alice B.");
    assert_eq!(body["account"]["username"], "alice");

    // another user's email or username is a conflict
    let req = test::TestRequest::put()
        .uri("/user/update")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({ "email": "b@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "this email is already used.");

    let req = test::TestRequest::put()
        .uri("/user/update")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({ "username": "bob" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "this username is already used.");

    // nothing to change
    let req = test::TestRequest::put()
        .uri("/user/update")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing parameter(s)");

    // no bearer token
    let req = test::TestRequest::put()
        .uri("/user/update")
        .set_json(serde_json::json!({ "name": "Eve" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_profile_fetch() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/sign_up")
        .set_json(test_data::sample_sign_up())
        .to_request();
    let created: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", created["_id"].as_str().unwrap()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["account"]["username"], "alice");
    assert!(body.get("token").is_none());
    assert!(body.get("salt").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
