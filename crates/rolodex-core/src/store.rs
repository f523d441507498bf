//! The `PersonStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `rolodex-store-sqlite`). The HTTP layer (`rolodex-api`) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{Person, PersonDraft};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Parameters for [`PersonStore::list`].
#[derive(Debug, Clone, Default)]
pub struct PersonQuery {
  /// Case-insensitive substring filter applied to first OR last name.
  /// `None` or empty means no filter.
  pub name:   Option<String>,
  /// Page size. `0` disables pagination and returns the whole filtered set.
  pub limit:  u32,
  /// Records to skip before the page starts. Ignored when `limit == 0`.
  pub offset: u32,
}

/// One page of list results plus the pre-pagination total, so a caller can
/// compute page counts.
#[derive(Debug, Clone)]
pub struct PersonPage {
  pub people: Vec<Person>,
  pub total:  u64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Rolodex storage backend.
///
/// Visibility rule: records with `active == false` are excluded from `list`
/// and `get`, but `update` and `delete` still operate on them.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List active records ordered by id, filtered and paginated per `query`.
  fn list<'a>(
    &'a self,
    query: &'a PersonQuery,
  ) -> impl Future<Output = Result<PersonPage, Self::Error>> + Send + 'a;

  /// Retrieve one active record by id. `None` if the id is absent or the
  /// record is inactive.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Insert a new record. The store assigns the id and sets both timestamps
  /// to the current time; the returned [`Person`] is the stored row.
  fn create(
    &self,
    draft: PersonDraft,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of the record with `id` (regardless of
  /// its active flag) and refresh `updated_date`. `created_date` is never
  /// touched.
  ///
  /// A missing id is a silent no-op, not an error. Legacy contract,
  /// preserved deliberately.
  fn update(
    &self,
    id: i64,
    draft: PersonDraft,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Permanently remove the record with `id`, active or not. A missing id
  /// is a silent no-op.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
