//! Core types and trait definitions for the Rolodex people directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod person;
pub mod store;

pub use person::{Person, PersonDraft};
pub use store::{PersonPage, PersonQuery, PersonStore};
