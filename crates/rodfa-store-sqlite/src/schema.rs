//! SQL schema for the RODFA SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS phone_records (
    phone        TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    location     TEXT NOT NULL,
    region       TEXT NOT NULL,
    operator     TEXT NOT NULL,
    email        TEXT NOT NULL,
    last_seen_at TEXT,                      -- ISO 8601 UTC or NULL
    social       TEXT NOT NULL DEFAULT '[]',-- JSON array of platform names
    occupation   TEXT,
    age          INTEGER
);

PRAGMA user_version = 1;
";
