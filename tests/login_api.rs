use actix_web::{App, http::StatusCode, test, web};
use std::sync::Arc;

use loginkeep::{
  adapters::http::{LoginRouter, LoginRouterDependencies, configure_app, security_headers},
  application::auth::{AuthUseCase, AuthUseCaseDependencies},
  domain::auth::{entities::User, ports::UserLoader},
  infrastructure::{
    persistence::memory::InMemoryUserRepository,
    security::{Argon2PasswordComparer, JwtTokenIssuer, ValidatorEmailValidator},
  },
};

const EMAIL: &str = "valid_email@mail.com";
const PASSWORD: &str = "hashedPassword";

fn make_router(repo: Arc<InMemoryUserRepository>) -> Arc<LoginRouter> {
  let auth_use_case = Arc::new(AuthUseCase::new(AuthUseCaseDependencies::new(
    repo.clone(),
    repo,
    Arc::new(Argon2PasswordComparer::new().unwrap()),
    Arc::new(JwtTokenIssuer::new("test_secret").unwrap()),
  )));

  Arc::new(LoginRouter::new(LoginRouterDependencies::new(
    auth_use_case,
    Arc::new(ValidatorEmailValidator::new()),
  )))
}

async fn seeded_repo() -> Arc<InMemoryUserRepository> {
  let hash = Argon2PasswordComparer::new()
    .unwrap()
    .hash(PASSWORD)
    .unwrap();
  let repo = Arc::new(InMemoryUserRepository::new());
  repo.insert(User::new(EMAIL, hash)).await;
  repo
}

macro_rules! init_app {
  ($repo:expr) => {{
    let router = make_router($repo);
    test::init_service(
      App::new()
        .wrap(security_headers())
        .configure(|cfg| configure_app(cfg, router)),
    )
    .await
  }};
}

#[actix_web::test]
async fn test_login_returns_access_token_for_valid_credentials() {
  let repo = seeded_repo().await;
  let app = init_app!(repo.clone());

  let req = test::TestRequest::post()
    .uri("/api/login")
    .set_json(serde_json::json!({ "email": EMAIL, "password": PASSWORD }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: serde_json::Value = test::read_body_json(resp).await;
  let token = body["accessToken"].as_str().unwrap();
  assert!(!token.is_empty());

  let stored = repo.load(EMAIL).await.unwrap().unwrap();
  assert_eq!(stored.access_token.as_deref(), Some(token));
}

#[actix_web::test]
async fn test_login_returns_401_when_user_does_not_exist() {
  let app = init_app!(Arc::new(InMemoryUserRepository::new()));

  let req = test::TestRequest::post()
    .uri("/api/login")
    .set_json(serde_json::json!({ "email": EMAIL, "password": PASSWORD }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
}

#[actix_web::test]
async fn test_login_returns_401_for_wrong_password() {
  let app = init_app!(seeded_repo().await);

  let req = test::TestRequest::post()
    .uri("/api/login")
    .set_json(serde_json::json!({ "email": EMAIL, "password": "wrong_password" }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_returns_400_for_missing_and_invalid_params() {
  let app = init_app!(seeded_repo().await);

  let cases = [
    (
      serde_json::json!({ "password": PASSWORD }),
      "Missing param: email",
    ),
    (serde_json::json!({ "email": EMAIL }), "Missing param: password"),
    (
      serde_json::json!({ "email": "invalid_email", "password": PASSWORD }),
      "Invalid param: email",
    ),
  ];

  for (payload, message) in cases {
    let req = test::TestRequest::post()
      .uri("/api/login")
      .set_json(payload)
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], message);
  }
}

#[actix_web::test]
async fn test_login_with_empty_payload_reports_missing_email() {
  let app = init_app!(seeded_repo().await);

  let req = test::TestRequest::post().uri("/api/login").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Missing param: email");
}

#[actix_web::test]
async fn test_login_with_malformed_payload_returns_500() {
  let app = init_app!(seeded_repo().await);

  let req = test::TestRequest::post()
    .uri("/api/login")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, serde_json::json!({ "error": "Internal error" }));
}

#[actix_web::test]
async fn test_login_with_oversized_payload_returns_json_error() {
  let app = init_app!(seeded_repo().await);

  let padding = "a".repeat(300 * 1024);
  let req = test::TestRequest::post()
    .uri("/api/login")
    .set_json(serde_json::json!({ "email": EMAIL, "password": padding }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, serde_json::json!({ "error": "Payload too large" }));
}

#[actix_web::test]
async fn test_responses_carry_cors_headers() {
  let app = init_app!(seeded_repo().await);

  let req = test::TestRequest::post()
    .uri("/api/login")
    .set_json(serde_json::json!({ "email": EMAIL, "password": PASSWORD }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  let headers = resp.headers();
  assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
  assert_eq!(headers.get("access-control-allow-methods").unwrap(), "*");
  assert_eq!(headers.get("access-control-allow-headers").unwrap(), "*");
  assert!(headers.get("x-powered-by").is_none());
}

#[actix_web::test]
async fn test_health_check() {
  let app = init_app!(Arc::new(InMemoryUserRepository::new()));

  let req = test::TestRequest::get().uri("/health").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(test::read_body(resp).await, web::Bytes::from_static(b"OK"));
}
