//! Landmark lookup CLI.
//!
//! # Responsibility
//! - Provide a minimal executable over `landmark_core` lookups.
//! - Print one JSON object per landmark for scripting.
//!
//! Configuration comes from the environment:
//! - `LANDMARKS_DB_PATH`: database file (required for queries).
//! - `LANDMARKS_LOG_LEVEL`: log level, defaults per build mode.
//! - `LANDMARKS_LOG_DIR`: absolute log directory; file logging is off when unset.

use landmark_core::db::{open_db_read_only, DbOptions};
use landmark_core::{Landmark, LandmarkService, SqliteLandmarkRepository};
use log::info;
use rusqlite::Connection;
use std::process::ExitCode;

const USAGE: &str = "usage: landmark_cli [all | id <n> | city <name> | venue <type> | day <day>]";

#[derive(Debug)]
enum Query {
    All,
    ById(i64),
    City(String),
    Venue(String),
    Day(String),
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = match parse_args(&args) {
        Ok(Some(query)) => query,
        Ok(None) => {
            println!("landmark_core ping={}", landmark_core::ping());
            println!("landmark_core version={}", landmark_core::core_version());
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `None` when no arguments were given (linkage probe).
fn parse_args(args: &[String]) -> Result<Option<Query>, String> {
    let mut iter = args.iter().map(String::as_str);
    let query = match (iter.next(), iter.next()) {
        (None, _) => return Ok(None),
        (Some("all"), None) => Query::All,
        (Some("id"), Some(value)) => Query::ById(
            value
                .parse()
                .map_err(|_| format!("invalid landmark id `{value}`"))?,
        ),
        (Some("city"), Some(value)) => Query::City(value.to_string()),
        (Some("venue"), Some(value)) => Query::Venue(value.to_string()),
        (Some("day"), Some(value)) => Query::Day(value.to_string()),
        (Some(command @ ("id" | "city" | "venue" | "day")), None) => {
            return Err(format!("`{command}` needs a value"));
        }
        (Some(other), _) => return Err(format!("unrecognized command `{other}`")),
    };

    if iter.next().is_some() {
        return Err("too many arguments".to_string());
    }
    Ok(Some(query))
}

fn run(query: Query) -> Result<(), String> {
    if let Ok(log_dir) = std::env::var("LANDMARKS_LOG_DIR") {
        let level = std::env::var("LANDMARKS_LOG_LEVEL")
            .unwrap_or_else(|_| landmark_core::default_log_level().to_string());
        landmark_core::init_logging(&level, &log_dir)?;
    }

    let db_path = std::env::var("LANDMARKS_DB_PATH")
        .map_err(|_| "LANDMARKS_DB_PATH is not set".to_string())?;
    let conn = open_store(&db_path)?;
    let service = LandmarkService::new(SqliteLandmarkRepository::new(&conn));

    let landmarks = match query {
        Query::All => service.list_landmarks(),
        Query::ById(id) => service
            .get_landmark(id)
            .map(|found| found.into_iter().collect::<Vec<_>>()),
        Query::City(city) => service.landmarks_in_city(&city),
        Query::Venue(venue_type) => service.landmarks_by_venue_type(&venue_type),
        Query::Day(day) => service.landmarks_open_on(&day),
    }
    .map_err(|err| err.to_string())?;

    info!("event=cli_query module=cli status=ok rows={}", landmarks.len());
    print_landmarks(&landmarks)
}

/// Opens the configured store without creating it or touching its schema.
fn open_store(db_path: &str) -> Result<Connection, String> {
    open_db_read_only(db_path, DbOptions::default())
        .map_err(|err| format!("unable to open landmark store `{db_path}`: {err}"))
}

fn print_landmarks(landmarks: &[Landmark]) -> Result<(), String> {
    for landmark in landmarks {
        let line = serde_json::to_string(landmark).map_err(|err| err.to_string())?;
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{open_store, parse_args, Query};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_a_probe() {
        assert!(parse_args(&[]).unwrap().is_none());
    }

    #[test]
    fn lookup_commands_parse() {
        assert!(matches!(
            parse_args(&args(&["id", "42"])).unwrap(),
            Some(Query::ById(42))
        ));
        assert!(matches!(
            parse_args(&args(&["day", "Monday"])).unwrap(),
            Some(Query::Day(day)) if day == "Monday"
        ));
        assert!(matches!(parse_args(&args(&["all"])).unwrap(), Some(Query::All)));
    }

    #[test]
    fn malformed_arguments_are_rejected() {
        assert!(parse_args(&args(&["id", "abc"])).is_err());
        assert!(parse_args(&args(&["city"]))
            .unwrap_err()
            .contains("needs a value"));
        assert!(parse_args(&args(&["all", "extra"])).is_err());
        assert!(parse_args(&args(&["city", "Austin", "TX"])).is_err());
    }

    #[test]
    fn missing_store_is_reported_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.db");
        let path_str = path.to_str().unwrap();

        let err = open_store(path_str).unwrap_err();
        assert!(err.contains("unable to open landmark store"));
        assert!(!path.exists());
    }
}
