//! Completion records: one row per (tracker, calendar day).
//!
//! Dates are normalized to day granularity by `utils::date` before they
//! reach this module; everything here stores and compares "YYYY-MM-DD"
//! strings only.

use crate::errors::{AppError, AppResult};
use crate::utils::date::format_day;
use chrono::NaiveDate;
use rusqlite::{Connection, params};

/// Idempotent insert: marking the same day twice leaves a single record.
pub fn mark_completed(conn: &Connection, tracker_id: &str, day: NaiveDate) -> AppResult<()> {
    let exists: bool = conn
        .prepare("SELECT 1 FROM trackers WHERE id = ?1")?
        .exists([tracker_id])?;
    if !exists {
        return Err(AppError::TrackerNotFound(tracker_id.to_string()));
    }

    conn.execute(
        "INSERT OR IGNORE INTO records (tracker_id, date) VALUES (?1, ?2)",
        params![tracker_id, format_day(day)],
    )?;
    Ok(())
}

/// Remove the record for (tracker, day); no-op when absent.
pub fn mark_incomplete(conn: &Connection, tracker_id: &str, day: NaiveDate) -> AppResult<()> {
    conn.execute(
        "DELETE FROM records WHERE tracker_id = ?1 AND date = ?2",
        params![tracker_id, format_day(day)],
    )?;
    Ok(())
}

pub fn is_completed(conn: &Connection, tracker_id: &str, day: NaiveDate) -> AppResult<bool> {
    let exists = conn
        .prepare("SELECT 1 FROM records WHERE tracker_id = ?1 AND date = ?2")?
        .exists(params![tracker_id, format_day(day)])?;
    Ok(exists)
}

/// Lifetime completion count for one tracker.
pub fn completion_count(conn: &Connection, tracker_id: &str) -> AppResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM records WHERE tracker_id = ?1",
        [tracker_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Completions across all trackers on one day.
pub fn completion_count_on(conn: &Connection, day: NaiveDate) -> AppResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM records WHERE date = ?1",
        [&format_day(day)],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Every completion record ever created.
pub fn total_completions(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    Ok(count)
}
