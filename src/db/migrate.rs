use crate::models::category::{PINNED_CATEGORY_ID, PINNED_CATEGORY_TITLE};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the tracker tables with the modern schema.
fn create_tracker_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id         TEXT PRIMARY KEY,
            title      TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS trackers (
            id              TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            emoji           TEXT NOT NULL,
            color_hex       TEXT NOT NULL,
            schedule        TEXT NOT NULL DEFAULT '',
            is_habit        INTEGER NOT NULL DEFAULT 1,
            is_pinned       INTEGER NOT NULL DEFAULT 0,
            old_category_id TEXT,
            category_id     TEXT NOT NULL REFERENCES categories(id),
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS records (
            tracker_id TEXT NOT NULL REFERENCES trackers(id) ON DELETE CASCADE,
            date       TEXT NOT NULL,
            PRIMARY KEY (tracker_id, date)
        );

        CREATE TABLE IF NOT EXISTS perfect_days (
            date TEXT PRIMARY KEY
        );

        CREATE INDEX IF NOT EXISTS idx_trackers_category ON trackers(category_id);
        CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
        "#,
    )?;
    Ok(())
}

/// The reserved Pinned category must exist before any pin operation.
/// Created once; the marker row in `log` keeps this idempotent across
/// databases that predate the marker.
fn ensure_pinned_category(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO categories (id, title, created_at)
         VALUES (?1, ?2, datetime('now'))",
        [PINNED_CATEGORY_ID, PINNED_CATEGORY_TITLE],
    )?;
    Ok(())
}

/// 0.3.0: trackers gained `old_category_id` so unpin can restore the
/// previous placement. Guarded by a marker row in `log`.
fn migrate_add_old_category_column(conn: &Connection) -> Result<()> {
    let version = "20250412_0003_add_old_category_id";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // Fresh databases already have the column; only mark the migration.
    let mut cols = conn.prepare("PRAGMA table_info('trackers')")?;
    let has_column = cols
        .query_map([], |row| row.get::<_, String>(1))?
        .filter_map(|r| r.ok())
        .any(|c| c == "old_category_id");

    if !has_column {
        conn.execute("ALTER TABLE trackers ADD COLUMN old_category_id TEXT;", [])?;
        success(format!(
            "Migration applied: {} → added 'old_category_id' to trackers table",
            version
        ));
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added old_category_id to trackers')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure tracker tables
    let fresh = !table_exists(conn, "trackers")?;
    create_tracker_tables(conn)?;
    if fresh {
        success("Created tracker tables (modern schema).");
    }

    // 3) Column-level migrations
    migrate_add_old_category_column(conn)?;

    // 4) Reserved category
    ensure_pinned_category(conn)?;

    Ok(())
}
