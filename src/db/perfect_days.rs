//! Persisted set of perfect days (days where every scheduled tracker was
//! completed). The set is only ever mutated through
//! `core::stats::recompute_perfect_day`.

use crate::errors::AppResult;
use crate::utils::date::{format_day, parse_day};
use chrono::NaiveDate;
use rusqlite::Connection;

pub fn add_day(conn: &Connection, day: NaiveDate) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO perfect_days (date) VALUES (?1)",
        [&format_day(day)],
    )?;
    Ok(())
}

pub fn remove_day(conn: &Connection, day: NaiveDate) -> AppResult<()> {
    conn.execute("DELETE FROM perfect_days WHERE date = ?1", [&format_day(day)])?;
    Ok(())
}

pub fn contains_day(conn: &Connection, day: NaiveDate) -> AppResult<bool> {
    let exists = conn
        .prepare("SELECT 1 FROM perfect_days WHERE date = ?1")?
        .exists([&format_day(day)])?;
    Ok(exists)
}

/// All perfect days, ascending. Rows that no longer parse as dates are
/// dropped rather than failing the statistics screen.
pub fn load_days(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT date FROM perfect_days ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        if let Ok(day) = parse_day(&r?) {
            out.push(day);
        }
    }
    Ok(out)
}

pub fn count_days(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM perfect_days", [], |row| row.get(0))?;
    Ok(count)
}
