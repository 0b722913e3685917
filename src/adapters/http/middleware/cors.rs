use actix_web::middleware::DefaultHeaders;

/// Permissive CORS headers added to every response
///
/// The login API is called from browser apps on any origin. actix-web never
/// emits `x-powered-by`, so there is nothing to strip.
///
/// # Example
///
/// ```no_run
/// use actix_web::App;
/// # use loginkeep::adapters::http::middleware::security_headers;
///
/// let app = App::new().wrap(security_headers());
/// ```
pub fn security_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add(("Access-Control-Allow-Origin", "*"))
    .add(("Access-Control-Allow-Methods", "*"))
    .add(("Access-Control-Allow-Headers", "*"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{App, HttpResponse, test, web};

  #[actix_web::test]
  async fn test_adds_cors_headers() {
    let app = test::init_service(
      App::new()
        .wrap(security_headers())
        .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    let headers = resp.headers();
    for name in [
      "access-control-allow-origin",
      "access-control-allow-methods",
      "access-control-allow-headers",
    ] {
      assert_eq!(headers.get(name).unwrap(), "*");
    }
    assert!(headers.get("x-powered-by").is_none());
  }
}
