//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, dates of birth as `YYYY-MM-DD`,
//! and the active flag as an INTEGER (rusqlite maps it to `bool`).

use chrono::{DateTime, NaiveDate, Utc};
use rolodex_core::Person;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `people` row, before the text columns
/// are decoded into chrono types.
pub struct RawPerson {
  pub id:                        i64,
  pub first_name:                String,
  pub last_name:                 String,
  pub street_address:            String,
  pub street_address_additional: Option<String>,
  pub city:                      String,
  pub state:                     String,
  pub zip_code:                  String,
  pub date_of_birth:             String,
  pub interests:                 String,
  pub avatar_url:                String,
  pub created_date:              String,
  pub updated_date:              String,
  pub active:                    bool,
}

impl RawPerson {
  /// Read a `RawPerson` from a row selected with [`COLUMNS`] order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawPerson {
      id:                        row.get(0)?,
      first_name:                row.get(1)?,
      last_name:                 row.get(2)?,
      street_address:            row.get(3)?,
      street_address_additional: row.get(4)?,
      city:                      row.get(5)?,
      state:                     row.get(6)?,
      zip_code:                  row.get(7)?,
      date_of_birth:             row.get(8)?,
      interests:                 row.get(9)?,
      avatar_url:                row.get(10)?,
      created_date:              row.get(11)?,
      updated_date:              row.get(12)?,
      active:                    row.get(13)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:                        self.id,
      first_name:                self.first_name,
      last_name:                 self.last_name,
      street_address:            self.street_address,
      street_address_additional: self.street_address_additional,
      city:                      self.city,
      state:                     self.state,
      zip_code:                  self.zip_code,
      date_of_birth:             decode_date(&self.date_of_birth)?,
      interests:                 self.interests,
      avatar_url:                self.avatar_url,
      created_date:              decode_dt(&self.created_date)?,
      updated_date:              decode_dt(&self.updated_date)?,
      active:                    self.active,
    })
  }
}

/// Column list matching [`RawPerson::from_row`] indices.
pub const COLUMNS: &str = "id, first_name, last_name, street_address, \
   street_address_additional, city, state, zip_code, date_of_birth, \
   interests, avatar_url, created_date, updated_date, active";
