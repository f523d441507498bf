//! Person — the sole entity of the directory.
//!
//! `Person` is both the wire representation and the storage row shape. The
//! JSON member names are PascalCase (`FirstName`, `ZipCode`, ...) to stay
//! compatible with the clients of the original service.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored person record.
///
/// `id`, `created_date`, and `updated_date` are owned by the store: the id
/// is assigned once at insert and never reused, `created_date` is
/// write-once, and `updated_date` advances on every successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
  pub id:                        i64,
  pub first_name:                String,
  pub last_name:                 String,
  pub street_address:            String,
  pub street_address_additional: Option<String>,
  pub city:                      String,
  pub state:                     String,
  pub zip_code:                  String,
  pub date_of_birth:             NaiveDate,
  pub interests:                 String,
  pub avatar_url:                String,
  pub created_date:              DateTime<Utc>,
  pub updated_date:              DateTime<Utc>,
  pub active:                    bool,
}

/// The client-supplied shape for create and update requests.
///
/// Carries every mutable field of [`Person`]. Anything else a client sends
/// (`Id`, `CreatedDate`, `UpdatedDate`) is dropped at deserialization, which
/// is how the server ignores client-supplied identifiers and timestamps.
///
/// `active` defaults to `true` when absent so freshly created records are
/// visible; a client may still set it explicitly to soft-delete (or
/// undelete) via update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonDraft {
  pub first_name:                String,
  pub last_name:                 String,
  pub street_address:            String,
  #[serde(default)]
  pub street_address_additional: Option<String>,
  pub city:                      String,
  pub state:                     String,
  pub zip_code:                  String,
  pub date_of_birth:             NaiveDate,
  pub interests:                 String,
  pub avatar_url:                String,
  #[serde(default = "default_active")]
  pub active:                    bool,
}

fn default_active() -> bool { true }
