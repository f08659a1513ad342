use crate::db::categories::get_category;
use crate::errors::{AppError, AppResult};
use crate::models::category::PINNED_CATEGORY_ID;
use crate::models::color::Rgb;
use crate::models::schedule::Schedule;
use crate::models::tracker::Tracker;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A tracker row as stored, before the schedule/color strings have been
/// decoded. Kept separate from `Tracker` so one corrupted row can be
/// skipped without failing the whole query.
#[derive(Debug, Clone)]
pub struct TrackerRow {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color_hex: String,
    pub schedule: String,
    pub is_habit: bool,
    pub is_pinned: bool,
    pub old_category_id: Option<String>,
    pub category_id: String,
}

impl TrackerRow {
    /// Decode the persisted strings into the domain representation.
    pub fn decode(&self) -> AppResult<Tracker> {
        Ok(Tracker {
            id: self.id.clone(),
            name: self.name.clone(),
            emoji: self.emoji.clone(),
            color: Rgb::from_hex(&self.color_hex)?,
            schedule: Schedule::decode(&self.schedule)?,
            is_habit: self.is_habit,
            is_pinned: self.is_pinned,
            old_category_id: self.old_category_id.clone(),
        })
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<TrackerRow> {
    Ok(TrackerRow {
        id: row.get("id")?,
        name: row.get("name")?,
        emoji: row.get("emoji")?,
        color_hex: row.get("color_hex")?,
        schedule: row.get("schedule")?,
        is_habit: row.get::<_, i32>("is_habit")? == 1,
        is_pinned: row.get::<_, i32>("is_pinned")? == 1,
        old_category_id: row.get("old_category_id")?,
        category_id: row.get("category_id")?,
    })
}

/// Insert a new tracker bound to an existing category.
pub fn insert_tracker(conn: &Connection, tracker: &Tracker, category_id: &str) -> AppResult<()> {
    if get_category(conn, category_id)?.is_none() {
        return Err(AppError::CategoryNotFound(category_id.to_string()));
    }

    conn.execute(
        "INSERT INTO trackers
            (id, name, emoji, color_hex, schedule, is_habit, is_pinned,
             old_category_id, category_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            tracker.id,
            tracker.name,
            tracker.emoji,
            tracker.color.to_hex(),
            tracker.schedule.encode(),
            tracker.is_habit as i32,
            tracker.is_pinned as i32,
            tracker.old_category_id,
            category_id,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Full replace of the mutable fields plus category re-binding.
/// Edits are read-modify-write keyed by id; there is no partial update.
pub fn update_tracker(
    conn: &Connection,
    id: &str,
    tracker: &Tracker,
    category_id: &str,
) -> AppResult<()> {
    if get_category(conn, category_id)?.is_none() {
        return Err(AppError::CategoryNotFound(category_id.to_string()));
    }

    let changed = conn.execute(
        "UPDATE trackers
         SET name = ?1, emoji = ?2, color_hex = ?3, schedule = ?4,
             category_id = ?5
         WHERE id = ?6",
        params![
            tracker.name,
            tracker.emoji,
            tracker.color.to_hex(),
            tracker.schedule.encode(),
            category_id,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::TrackerNotFound(id.to_string()));
    }
    Ok(())
}

/// Delete a tracker. Completion records cascade with it. A second delete
/// of the same id fails loudly rather than passing silently.
pub fn delete_tracker(conn: &Connection, id: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM trackers WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::TrackerNotFound(id.to_string()));
    }
    Ok(())
}

pub fn get_tracker(conn: &Connection, id: &str) -> AppResult<Option<Tracker>> {
    let row = conn
        .query_row("SELECT * FROM trackers WHERE id = ?1", [id], map_row)
        .optional()?;
    match row {
        Some(r) => Ok(Some(r.decode()?)),
        None => Ok(None),
    }
}

pub fn get_tracker_row(conn: &Connection, id: &str) -> AppResult<Option<TrackerRow>> {
    let row = conn
        .query_row("SELECT * FROM trackers WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(row)
}

/// All stored tracker rows, insertion order.
pub fn load_all_rows(conn: &Connection) -> AppResult<Vec<TrackerRow>> {
    let mut stmt = conn.prepare("SELECT * FROM trackers ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_trackers(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM trackers", [], |row| row.get(0))?;
    Ok(count)
}

/// Pin: move into the reserved Pinned category, remembering the previous
/// one. Unpin: move back to the remembered category. If that category was
/// deleted while the tracker sat pinned, the unpin is refused with
/// CategoryNotFound so the caller can surface it (the tracker stays
/// pinned).
pub fn set_pinned(conn: &Connection, id: &str, pinned: bool) -> AppResult<()> {
    let row = get_tracker_row(conn, id)?.ok_or_else(|| AppError::TrackerNotFound(id.to_string()))?;

    // Already in the requested state: nothing to do.
    if row.is_pinned == pinned {
        return Ok(());
    }

    if pinned {
        conn.execute(
            "UPDATE trackers
             SET is_pinned = 1, old_category_id = category_id, category_id = ?1
             WHERE id = ?2",
            params![PINNED_CATEGORY_ID, id],
        )?;
    } else {
        let old_id = row
            .old_category_id
            .ok_or_else(|| AppError::CategoryNotFound("<no previous category>".to_string()))?;
        if get_category(conn, &old_id)?.is_none() {
            return Err(AppError::CategoryNotFound(old_id));
        }
        conn.execute(
            "UPDATE trackers
             SET is_pinned = 0, old_category_id = NULL, category_id = ?1
             WHERE id = ?2",
            params![old_id, id],
        )?;
    }
    Ok(())
}
