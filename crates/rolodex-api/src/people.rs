//! Handlers for the `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | Optional `?limit=&offset=&name=&speed=` |
//! | `GET`    | `/people/{id}` | JSON record, or `null` if absent/inactive |
//! | `POST`   | `/people` | Body: person JSON; responds `"Success"` or a failure message |
//! | `PUT`    | `/people/{id}` | Same response contract as POST |
//! | `DELETE` | `/people/{id}` | 200, no body |

use std::{sync::Arc, time::Duration};

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
  response::IntoResponse,
};
use rolodex_core::{
  person::{Person, PersonDraft},
  store::{PersonQuery, PersonStore},
};
use serde::Deserialize;

use crate::error::ApiError;

/// Response header on the list endpoint carrying the total number of
/// matching active records before pagination.
pub const PEOPLE_TOTAL_COUNT: HeaderName =
  HeaderName::from_static("people-total-count");

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub limit:  Option<u32>,
  pub offset: Option<u32>,
  pub name:   Option<String>,
  /// Artificial delay in milliseconds, applied when non-negative. A testing
  /// hook for exercising client-side loading states.
  pub speed:  Option<i64>,
}

/// `GET /people[?limit=&offset=&name=&speed=]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = PersonQuery {
    name:   params.name,
    limit:  params.limit.unwrap_or(0),
    offset: params.offset.unwrap_or(0),
  };

  let page = store
    .list(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  // The delay runs after the query and before the response is emitted.
  if let Some(ms) = params.speed
    && ms >= 0
  {
    tokio::time::sleep(Duration::from_millis(ms as u64)).await;
  }

  let mut headers = HeaderMap::new();
  headers.insert(PEOPLE_TOTAL_COUNT, HeaderValue::from(page.total));

  Ok((headers, Json(page.people)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/{id}` — a missing or inactive record is not a fault; the
/// body is JSON `null`.
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Option<Person>>, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let person = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(person))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /people` — body: person JSON.
///
/// Legacy wire contract: always 200, with a plain-text body of `"Success"`
/// or the storage failure message. Existing clients parse the string, so
/// the shape is kept even though the store reports failures as a typed
/// `Result`.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<PersonDraft>,
) -> String
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match store.create(draft).await {
    Ok(person) => {
      tracing::info!(id = person.id, "person created");
      "Success".to_string()
    }
    Err(e) => {
      tracing::warn!(error = %e, "create failed");
      e.to_string()
    }
  }
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /people/{id}` — body: person JSON.
///
/// Same response contract as [`create`]. Updating a missing id is a silent
/// no-op in the store, so it too reports `"Success"`.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(draft): Json<PersonDraft>,
) -> String
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match store.update(id, draft).await {
    Ok(()) => "Success".to_string(),
    Err(e) => {
      tracing::warn!(id, error = %e, "update failed");
      e.to_string()
    }
  }
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /people/{id}` — removes the record regardless of its active
/// flag; a missing id is a silent no-op. No response body.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::OK)
}
