//! JSON REST API for the Rolodex people directory.
//!
//! Exposes an axum [`Router`] backed by any [`rolodex_core::store::PersonStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolodex_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod people;

use std::sync::Arc;

use axum::{Router, routing::get};
use rolodex_core::store::PersonStore;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;
pub use people::PEOPLE_TOTAL_COUNT;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. The CORS layer is permissive and exposes the
/// `People-Total-Count` header so browser clients can read it.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any)
    .expose_headers([PEOPLE_TOTAL_COUNT]);

  Router::new()
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route(
      "/people/{id}",
      get(people::get_one::<S>)
        .put(people::update_one::<S>)
        .delete(people::delete_one::<S>),
    )
    .layer(cors)
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rolodex_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn router() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    api_router(Arc::new(store))
  }

  fn person_json(first: &str, last: &str, active: bool) -> String {
    format!(
      r#"{{
        "FirstName": "{first}",
        "LastName": "{last}",
        "StreetAddress": "742 Evergreen Terrace",
        "City": "Springfield",
        "State": "OR",
        "ZipCode": "97477",
        "DateOfBirth": "1980-05-12",
        "Interests": "gardening",
        "AvatarUrl": "https://example.com/avatar.png",
        "Active": {active}
      }}"#
    )
  }

  async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(json) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(json)
      }
      None => Body::empty(),
    };
    app
      .clone()
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap()
  }

  async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
  }

  // ── List ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_empty_store_returns_empty_array_with_zero_total() {
    let app = router().await;
    let resp = send(&app, "GET", "/people", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let total = resp.headers().get("people-total-count").unwrap();
    assert_eq!(total, "0");
    assert_eq!(body_json(resp).await, serde_json::json!([]));
  }

  #[tokio::test]
  async fn list_total_header_counts_before_pagination() {
    let app = router().await;
    for i in 0..3 {
      send(&app, "POST", "/people", Some(person_json(&format!("P{i}"), "Page", true))).await;
    }

    let resp = send(&app, "GET", "/people?limit=2&offset=0", None).await;
    let total = resp.headers().get("people-total-count").unwrap();
    assert_eq!(total, "3");
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn list_filters_by_name_and_hides_inactive() {
    let app = router().await;
    send(&app, "POST", "/people", Some(person_json("Alice", "Smith", true))).await;
    send(&app, "POST", "/people", Some(person_json("Bob", "Smith", false))).await;

    let resp = send(&app, "GET", "/people?name=smith", None).await;
    let body = body_json(resp).await;
    let people = body.as_array().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0]["FirstName"], "Alice");
  }

  #[tokio::test]
  async fn list_exposes_total_header_to_browsers() {
    let app = router().await;
    let resp = app
      .clone()
      .oneshot(
        Request::builder()
          .method("GET")
          .uri("/people")
          .header(header::ORIGIN, "http://localhost:3000")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();

    let exposed = resp
      .headers()
      .get(header::ACCESS_CONTROL_EXPOSE_HEADERS)
      .unwrap()
      .to_str()
      .unwrap();
    assert!(exposed.contains("people-total-count"), "exposed: {exposed}");
  }

  #[tokio::test]
  async fn list_speed_param_delays_the_response() {
    let app = router().await;
    let start = std::time::Instant::now();
    let resp = send(&app, "GET", "/people?speed=50", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
      start.elapsed() >= std::time::Duration::from_millis(50),
      "elapsed: {:?}",
      start.elapsed()
    );
  }

  // ── Get one ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_missing_returns_null_not_an_error() {
    let app = router().await;
    let resp = send(&app, "GET", "/people/12345", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "null");
  }

  #[tokio::test]
  async fn get_returns_the_record() {
    let app = router().await;
    send(&app, "POST", "/people", Some(person_json("Grace", "Hopper", true))).await;

    let resp = send(&app, "GET", "/people", None).await;
    let id = body_json(resp).await[0]["Id"].as_i64().unwrap();

    let resp = send(&app, "GET", &format!("/people/{id}"), None).await;
    let body = body_json(resp).await;
    assert_eq!(body["LastName"], "Hopper");
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_returns_success_text() {
    let app = router().await;
    let resp = send(&app, "POST", "/people", Some(person_json("Ada", "Lovelace", true))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "Success");
  }

  #[tokio::test]
  async fn post_ignores_client_id_and_created_date() {
    let app = router().await;
    let payload = r#"{
      "Id": 999,
      "FirstName": "Ada",
      "LastName": "Lovelace",
      "StreetAddress": "12 St James's Square",
      "City": "London",
      "State": "LDN",
      "ZipCode": "SW1Y 4JH",
      "DateOfBirth": "1815-12-10",
      "Interests": "analytical engines",
      "AvatarUrl": "https://example.com/ada.png",
      "CreatedDate": "2000-01-01T00:00:00Z",
      "Active": true
    }"#;
    send(&app, "POST", "/people", Some(payload.to_string())).await;

    let resp = send(&app, "GET", "/people", None).await;
    let body = body_json(resp).await;
    let person = &body.as_array().unwrap()[0];
    assert_ne!(person["Id"], 999);
    let created = person["CreatedDate"].as_str().unwrap();
    assert!(!created.starts_with("2000-"), "created: {created}");
  }

  // ── Update ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn put_overwrites_and_returns_success_text() {
    let app = router().await;
    send(&app, "POST", "/people", Some(person_json("Grace", "Hopper", true))).await;
    let resp = send(&app, "GET", "/people", None).await;
    let id = body_json(resp).await[0]["Id"].as_i64().unwrap();

    let resp = send(
      &app,
      "PUT",
      &format!("/people/{id}"),
      Some(person_json("Grace", "Murray", true)),
    )
    .await;
    assert_eq!(body_string(resp).await, "Success");

    let resp = send(&app, "GET", &format!("/people/{id}"), None).await;
    assert_eq!(body_json(resp).await["LastName"], "Murray");
  }

  #[tokio::test]
  async fn put_missing_id_still_reports_success() {
    // The silent no-op is part of the legacy contract.
    let app = router().await;
    let resp = send(
      &app,
      "PUT",
      "/people/42",
      Some(person_json("Ghost", "Writer", true)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "Success");

    let resp = send(&app, "GET", "/people", None).await;
    assert_eq!(body_json(resp).await, serde_json::json!([]));
  }

  #[tokio::test]
  async fn put_can_soft_delete_and_undelete() {
    let app = router().await;
    send(&app, "POST", "/people", Some(person_json("Alice", "Smith", true))).await;
    let resp = send(&app, "GET", "/people", None).await;
    let id = body_json(resp).await[0]["Id"].as_i64().unwrap();

    send(
      &app,
      "PUT",
      &format!("/people/{id}"),
      Some(person_json("Alice", "Smith", false)),
    )
    .await;
    let resp = send(&app, "GET", &format!("/people/{id}"), None).await;
    assert_eq!(body_string(resp).await, "null");

    send(
      &app,
      "PUT",
      &format!("/people/{id}"),
      Some(person_json("Alice", "Smith", true)),
    )
    .await;
    let resp = send(&app, "GET", &format!("/people/{id}"), None).await;
    assert_eq!(body_json(resp).await["Active"], true);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_removes_even_inactive_records() {
    let app = router().await;
    send(&app, "POST", "/people", Some(person_json("Bob", "Smith", false))).await;

    // Hidden from reads, but delete reaches it; ids start at 1.
    let resp = send(&app, "DELETE", "/people/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.is_empty());

    let resp = send(&app, "DELETE", "/people/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK, "repeat delete is a no-op");
  }
}
