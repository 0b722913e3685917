use actix_web::{HttpResponse, http::StatusCode, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::LoginRequest,
  errors::ApiError,
  login_router::{LoginRouter, RouterRequest, RouterResponse},
};

/// Builds a router request from the raw payload
///
/// An empty payload counts as an empty JSON object; anything that does not
/// decode as a login object leaves the body absent.
pub fn router_request_from_payload(payload: &[u8]) -> RouterRequest {
  if payload.iter().all(u8::is_ascii_whitespace) {
    return RouterRequest::with_body(LoginRequest::default());
  }

  match serde_json::from_slice::<LoginRequest>(payload) {
    Ok(body) => RouterRequest::with_body(body),
    Err(e) => {
      tracing::warn!("Failed to decode login payload: {}", e);
      RouterRequest::default()
    }
  }
}

impl From<RouterResponse> for HttpResponse {
  fn from(response: RouterResponse) -> Self {
    let status =
      StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(response.body)
  }
}

/// Maps a failure to read the request body onto the JSON error contract
pub fn payload_error(error: &actix_web::Error) -> ApiError {
  if error.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
    tracing::warn!("Login payload rejected: {}", error);
    ApiError::PayloadTooLarge
  } else {
    ApiError::internal(error)
  }
}

/// Handler for user login
///
/// POST /api/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200, ErrorResponse otherwise
pub async fn login_handler(
  payload: Result<web::Bytes, actix_web::Error>,
  router: web::Data<Arc<LoginRouter>>,
) -> HttpResponse {
  let payload = match payload {
    Ok(payload) => payload,
    Err(e) => return RouterResponse::from(payload_error(&e)).into(),
  };
  let request = router_request_from_payload(&payload);

  router.route(Some(&request)).await.into()
}
