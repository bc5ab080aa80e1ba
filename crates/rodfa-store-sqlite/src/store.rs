//! [`PhoneStore`] — the SQLite implementation of [`PhoneDirectory`].

use std::path::Path;

use rodfa_core::directory::{PhoneDirectory, PhoneRecord};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawPhoneRecord, encode_dt, encode_social},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A phone directory backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct PhoneStore {
  conn: tokio_rusqlite::Connection,
}

impl PhoneStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
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

// ─── PhoneDirectory impl ─────────────────────────────────────────────────────

impl PhoneDirectory for PhoneStore {
  type Error = Error;

  async fn find(&self, phone: &str) -> Result<Option<PhoneRecord>> {
    let exact = phone.to_owned();
    // Stored numbers carry formatting; match on the query with '+' stripped
    // appearing anywhere in the stored value.
    let pattern = format!("%{}%", phone.replace('+', ""));

    let raw: Option<RawPhoneRecord> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT phone, name, location, region, operator, email,
                      last_seen_at, social, occupation, age
               FROM phone_records
               WHERE phone = ?1 OR phone LIKE ?2
               LIMIT 1",
              rusqlite::params![exact, pattern],
              |row| {
                Ok(RawPhoneRecord {
                  phone:        row.get(0)?,
                  name:         row.get(1)?,
                  location:     row.get(2)?,
                  region:       row.get(3)?,
                  operator:     row.get(4)?,
                  email:        row.get(5)?,
                  last_seen_at: row.get(6)?,
                  social:       row.get(7)?,
                  occupation:   row.get(8)?,
                  age:          row.get(9)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPhoneRecord::into_record).transpose()
  }

  async fn add(&self, record: PhoneRecord) -> Result<PhoneRecord> {
    let phone        = record.phone.clone();
    let name         = record.name.clone();
    let location     = record.location.clone();
    let region       = record.region.clone();
    let operator     = record.operator.clone();
    let email        = record.email.clone();
    let last_seen_at = record.last_seen_at.map(encode_dt);
    let social       = encode_social(&record.social)?;
    let occupation   = record.occupation.clone();
    let age          = record.age.map(i64::from);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO phone_records (
             phone, name, location, region, operator, email,
             last_seen_at, social, occupation, age
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            phone,
            name,
            location,
            region,
            operator,
            email,
            last_seen_at,
            social,
            occupation,
            age,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }
}
