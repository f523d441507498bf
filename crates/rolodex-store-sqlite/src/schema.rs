//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps deleted ids from ever being reassigned, which is
/// what makes `id` stable enough to hand out to clients.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS people (
    id                        INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name                TEXT NOT NULL,
    last_name                 TEXT NOT NULL,
    street_address            TEXT NOT NULL,
    street_address_additional TEXT,
    city                      TEXT NOT NULL,
    state                     TEXT NOT NULL,
    zip_code                  TEXT NOT NULL,
    date_of_birth             TEXT NOT NULL,   -- ISO 8601 date
    interests                 TEXT NOT NULL,
    avatar_url                TEXT NOT NULL,
    created_date              TEXT NOT NULL,   -- RFC 3339 UTC; server-assigned, write-once
    updated_date              TEXT NOT NULL,   -- RFC 3339 UTC; refreshed on every update
    active                    INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX IF NOT EXISTS people_active_idx ON people(active);
CREATE INDEX IF NOT EXISTS people_name_idx   ON people(last_name, first_name);

PRAGMA user_version = 1;
";
