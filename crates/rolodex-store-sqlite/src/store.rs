//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use rolodex_core::{
  person::{Person, PersonDraft},
  store::{PersonPage, PersonQuery, PersonStore},
};

use crate::{
  Error, Result,
  encode::{COLUMNS, RawPerson, encode_date, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A people store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// call runs on the driver's dedicated thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn list(&self, query: &PersonQuery) -> Result<PersonPage> {
    // An empty filter string means no filter at all.
    let pattern = query
      .name
      .as_deref()
      .filter(|n| !n.is_empty())
      .map(|n| format!("%{}%", n.to_lowercase()));

    // limit == 0 disables pagination; SQLite treats LIMIT -1 as unbounded.
    let limit: i64 = if query.limit == 0 { -1 } else { i64::from(query.limit) };
    let offset: i64 = if query.limit == 0 { 0 } else { i64::from(query.offset) };

    let (raws, total): (Vec<RawPerson>, i64) = self
      .conn
      .call(move |conn| {
        let (total, raws) = if let Some(p) = pattern {
          let total: i64 = conn.query_row(
            "SELECT COUNT(*) FROM people
             WHERE active = 1
               AND (LOWER(first_name) LIKE ?1 OR LOWER(last_name) LIKE ?1)",
            rusqlite::params![p],
            |row| row.get(0),
          )?;

          let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM people
             WHERE active = 1
               AND (LOWER(first_name) LIKE ?1 OR LOWER(last_name) LIKE ?1)
             ORDER BY id
             LIMIT ?2 OFFSET ?3"
          ))?;
          let raws = stmt
            .query_map(rusqlite::params![p, limit, offset], RawPerson::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

          (total, raws)
        } else {
          let total: i64 = conn.query_row(
            "SELECT COUNT(*) FROM people WHERE active = 1",
            [],
            |row| row.get(0),
          )?;

          let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM people
             WHERE active = 1
             ORDER BY id
             LIMIT ?1 OFFSET ?2"
          ))?;
          let raws = stmt
            .query_map(rusqlite::params![limit, offset], RawPerson::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

          (total, raws)
        };

        Ok((raws, total))
      })
      .await?;

    let people = raws
      .into_iter()
      .map(RawPerson::into_person)
      .collect::<Result<_>>()?;

    Ok(PersonPage { people, total: total as u64 })
  }

  async fn get(&self, id: i64) -> Result<Option<Person>> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM people WHERE id = ?1 AND active = 1"),
              rusqlite::params![id],
              RawPerson::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn create(&self, draft: PersonDraft) -> Result<Person> {
    let now = Utc::now();
    let now_str = encode_dt(now);
    let dob_str = encode_date(draft.date_of_birth);
    let row = draft.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (
             first_name, last_name, street_address, street_address_additional,
             city, state, zip_code, date_of_birth, interests, avatar_url,
             created_date, updated_date, active
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.street_address,
            row.street_address_additional,
            row.city,
            row.state,
            row.zip_code,
            dob_str,
            row.interests,
            row.avatar_url,
            now_str,
            now_str,
            row.active,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Person {
      id,
      first_name:                draft.first_name,
      last_name:                 draft.last_name,
      street_address:            draft.street_address,
      street_address_additional: draft.street_address_additional,
      city:                      draft.city,
      state:                     draft.state,
      zip_code:                  draft.zip_code,
      date_of_birth:             draft.date_of_birth,
      interests:                 draft.interests,
      avatar_url:                draft.avatar_url,
      created_date:              now,
      updated_date:              now,
      active:                    draft.active,
    })
  }

  async fn update(&self, id: i64, draft: PersonDraft) -> Result<()> {
    let now_str = encode_dt(Utc::now());
    let dob_str = encode_date(draft.date_of_birth);

    // A missing id matches zero rows, which is exactly the silent no-op the
    // contract calls for. created_date is deliberately not in the SET list.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE people SET
             first_name = ?1, last_name = ?2, street_address = ?3,
             street_address_additional = ?4, city = ?5, state = ?6,
             zip_code = ?7, date_of_birth = ?8, interests = ?9,
             avatar_url = ?10, active = ?11, updated_date = ?12
           WHERE id = ?13",
          rusqlite::params![
            draft.first_name,
            draft.last_name,
            draft.street_address,
            draft.street_address_additional,
            draft.city,
            draft.state,
            draft.zip_code,
            dob_str,
            draft.interests,
            draft.avatar_url,
            draft.active,
            now_str,
            id,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete(&self, id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
