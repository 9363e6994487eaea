//! Landmark repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide read-only lookups over `landmarks`, including the day-of-week
//!   join with `landmarkavailability`.
//! - Keep SQL and row mapping inside the persistence boundary.
//!
//! # Invariants
//! - Every argument is bound as a parameter; no SQL is built from input.
//! - Each operation issues exactly one query.
//! - Only connectivity failures become `RepoError::StoreUnavailable`; every
//!   other database error is passed through untouched as `RepoError::Db`.
//! - Day-of-week results are not de-duplicated: a landmark is returned once
//!   per matching availability row.

use crate::db::DbError;
use crate::model::landmark::{Landmark, LandmarkId};
use log::{debug, error};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const LANDMARK_SELECT_SQL: &str = "SELECT
    l.id,
    l.name,
    l.city,
    l.description,
    l.venue_type,
    l.approval_status,
    l.image_url,
    l.place_id,
    l.order_num
FROM landmarks l";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for landmark queries.
#[derive(Debug)]
pub enum RepoError {
    /// The store could not be reached or used. Wraps the driver error.
    StoreUnavailable(rusqlite::Error),
    /// Any other database failure, passed through as reported by the driver.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreUnavailable(err) => {
                write!(f, "unable to connect to landmark store: {err}")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoreUnavailable(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl RepoError {
    /// Returns whether this error means the store itself is unreachable.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

/// Read-only landmark lookups.
pub trait LandmarkRepository {
    /// Returns the landmark with `id`, or `None` when no row matches.
    fn get_by_id(&self, id: LandmarkId) -> RepoResult<Option<Landmark>>;
    /// Returns every landmark in storage scan order.
    fn get_all(&self) -> RepoResult<Vec<Landmark>>;
    /// Returns landmarks whose `city` equals `city` exactly.
    fn get_by_city(&self, city: &str) -> RepoResult<Vec<Landmark>>;
    /// Returns landmarks whose `venue_type` equals `venue_type` exactly.
    fn get_by_venue_type(&self, venue_type: &str) -> RepoResult<Vec<Landmark>>;
    /// Returns one landmark per availability row on `day_of_week`.
    fn get_by_day_of_week(&self, day_of_week: &str) -> RepoResult<Vec<Landmark>>;
}

/// SQLite-backed landmark repository over a caller-owned connection.
pub struct SqliteLandmarkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLandmarkRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_landmarks<P: Params>(
        &self,
        op: &'static str,
        sql: &str,
        params: P,
    ) -> RepoResult<Vec<Landmark>> {
        let started_at = Instant::now();
        let result = self
            .collect_landmarks(sql, params)
            .map_err(classify_query_error);
        log_query_outcome(op, started_at, result.as_ref().map(Vec::len));
        result
    }

    fn collect_landmarks<P: Params>(
        &self,
        sql: &str,
        params: P,
    ) -> rusqlite::Result<Vec<Landmark>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, parse_landmark_row)?;
        rows.collect()
    }
}

impl LandmarkRepository for SqliteLandmarkRepository<'_> {
    fn get_by_id(&self, id: LandmarkId) -> RepoResult<Option<Landmark>> {
        let started_at = Instant::now();
        let result = self
            .conn
            .query_row(
                &format!("{LANDMARK_SELECT_SQL} WHERE l.id = ?1;"),
                params![id],
                parse_landmark_row,
            )
            .optional()
            .map_err(classify_query_error);
        log_query_outcome(
            "get_by_id",
            started_at,
            result.as_ref().map(|found| usize::from(found.is_some())),
        );
        result
    }

    fn get_all(&self) -> RepoResult<Vec<Landmark>> {
        self.query_landmarks("get_all", &format!("{LANDMARK_SELECT_SQL};"), [])
    }

    fn get_by_city(&self, city: &str) -> RepoResult<Vec<Landmark>> {
        self.query_landmarks(
            "get_by_city",
            &format!("{LANDMARK_SELECT_SQL} WHERE l.city = ?1;"),
            params![city],
        )
    }

    fn get_by_venue_type(&self, venue_type: &str) -> RepoResult<Vec<Landmark>> {
        self.query_landmarks(
            "get_by_venue_type",
            &format!("{LANDMARK_SELECT_SQL} WHERE l.venue_type = ?1;"),
            params![venue_type],
        )
    }

    fn get_by_day_of_week(&self, day_of_week: &str) -> RepoResult<Vec<Landmark>> {
        self.query_landmarks(
            "get_by_day_of_week",
            &format!(
                "{LANDMARK_SELECT_SQL}
                 JOIN landmarkavailability la ON l.id = la.landmark_id
                 WHERE la.day_of_week = ?1;"
            ),
            params![day_of_week],
        )
    }
}

/// Maps one result row into a `Landmark` by fixed column names.
///
/// A missing column surfaces as `rusqlite::Error::InvalidColumnName`.
fn parse_landmark_row(row: &Row<'_>) -> rusqlite::Result<Landmark> {
    Ok(Landmark {
        id: row.get("id")?,
        name: row.get("name")?,
        city: row.get("city")?,
        description: row.get("description")?,
        venue_type: row.get("venue_type")?,
        approval_status: row
            .get::<_, Option<bool>>("approval_status")?
            .unwrap_or(false),
        image_url: row.get("image_url")?,
        place_id: row.get("place_id")?,
        order_num: row.get::<_, Option<i32>>("order_num")?.unwrap_or(0),
    })
}

fn classify_query_error(err: rusqlite::Error) -> RepoError {
    if is_connectivity_failure(&err) {
        RepoError::StoreUnavailable(err)
    } else {
        RepoError::Db(DbError::Sqlite(err))
    }
}

/// True when the store file cannot be opened or read at all, including
/// `SystemIoFailure` from the underlying file or device. Lock contention
/// (`DatabaseBusy`, `DatabaseLocked`, `FileLockingProtocolFailed`) is not.
fn is_connectivity_failure(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => matches!(
            failure.code,
            ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure
                | ErrorCode::PermissionDenied
        ),
        _ => false,
    }
}

fn log_query_outcome(op: &str, started_at: Instant, outcome: Result<usize, &RepoError>) {
    let duration_ms = started_at.elapsed().as_millis();
    match outcome {
        Ok(rows) => debug!(
            "event=landmark_query module=repo op={op} status=ok rows={rows} duration_ms={duration_ms}"
        ),
        Err(err) => {
            let error_code = if err.is_store_unavailable() {
                "store_unavailable"
            } else {
                "db_error"
            };
            error!(
                "event=landmark_query module=repo op={op} status=error duration_ms={duration_ms} error_code={error_code} error={err}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_query_error, parse_landmark_row, RepoError};
    use crate::db::DbError;
    use rusqlite::{ffi, Connection};

    fn sqlite_failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn connectivity_codes_become_store_unavailable() {
        for code in [
            ffi::SQLITE_CANTOPEN,
            ffi::SQLITE_NOTADB,
            ffi::SQLITE_IOERR,
            ffi::SQLITE_PERM,
        ] {
            let err = classify_query_error(sqlite_failure(code));
            assert!(err.is_store_unavailable(), "code {code} should be translated");
        }
    }

    #[test]
    fn lock_contention_is_not_a_connectivity_failure() {
        for code in [ffi::SQLITE_BUSY, ffi::SQLITE_LOCKED, ffi::SQLITE_PROTOCOL] {
            let err = classify_query_error(sqlite_failure(code));
            assert!(
                matches!(err, RepoError::Db(DbError::Sqlite(_))),
                "code {code} should pass through"
            );
        }
    }

    #[test]
    fn other_failures_pass_through_untranslated() {
        let constraint = classify_query_error(sqlite_failure(ffi::SQLITE_CONSTRAINT));
        assert!(matches!(constraint, RepoError::Db(_)));

        let missing_column =
            classify_query_error(rusqlite::Error::InvalidColumnName("venue_type".to_string()));
        assert!(matches!(missing_column, RepoError::Db(_)));
    }

    #[test]
    fn store_unavailable_keeps_the_driver_error_as_source() {
        let err = classify_query_error(sqlite_failure(ffi::SQLITE_CANTOPEN));
        let source = std::error::Error::source(&err).expect("source should be present");
        assert!(source.downcast_ref::<rusqlite::Error>().is_some());
        assert!(err.to_string().starts_with("unable to connect to landmark store"));
    }

    #[test]
    fn null_flag_and_order_read_as_false_and_zero() {
        let conn = Connection::open_in_memory().unwrap();
        let landmark = conn
            .query_row(
                "SELECT
                    7 AS id,
                    NULL AS name,
                    NULL AS city,
                    NULL AS description,
                    NULL AS venue_type,
                    NULL AS approval_status,
                    NULL AS image_url,
                    NULL AS place_id,
                    NULL AS order_num;",
                [],
                parse_landmark_row,
            )
            .unwrap();

        assert_eq!(landmark.id, 7);
        assert_eq!(landmark.name, None);
        assert!(!landmark.approval_status);
        assert_eq!(landmark.order_num, 0);
    }
}
