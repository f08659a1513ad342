//! High-level facade over the persisted store.
//!
//! Owns the connection; every other component reads and writes through
//! here. Each mutating call persists synchronously, appends a row to the
//! operation log and bumps the revision counter; callers poll the
//! revision to know the previous query result is stale and must be
//! rebuilt (full requery, no incremental diffing).

use crate::core::query::{self, QueryOutput};
use crate::core::stats::{self, Statistics};
use crate::db::pool::DbPool;
use crate::db::{categories, initialize, log, perfect_days, records, trackers};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::filter::FilterMode;
use crate::models::tracker::Tracker;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct Repository {
    pool: DbPool,
    revision: u64,
}

impl Repository {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool, revision: 0 })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool, revision: 0 })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Monotonic change counter. Bumped after every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn committed(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::log_operation(&self.pool.conn, operation, target, message)?;
        self.revision += 1;
        Ok(())
    }

    // ---------------------------
    // Trackers
    // ---------------------------

    pub fn create_tracker(&mut self, tracker: &Tracker, category_id: &str) -> AppResult<()> {
        trackers::insert_tracker(&self.pool.conn, tracker, category_id)?;
        self.committed("add_tracker", &tracker.id, &format!("Added tracker '{}'", tracker.name))
    }

    pub fn update_tracker(
        &mut self,
        id: &str,
        tracker: &Tracker,
        category_id: &str,
    ) -> AppResult<()> {
        trackers::update_tracker(&self.pool.conn, id, tracker, category_id)?;
        self.committed("edit_tracker", id, &format!("Updated tracker '{}'", tracker.name))
    }

    pub fn delete_tracker(&mut self, id: &str) -> AppResult<()> {
        trackers::delete_tracker(&self.pool.conn, id)?;
        self.committed("del_tracker", id, "Deleted tracker")
    }

    pub fn set_pinned(&mut self, id: &str, pinned: bool) -> AppResult<()> {
        trackers::set_pinned(&self.pool.conn, id, pinned)?;
        let op = if pinned { "pin_tracker" } else { "unpin_tracker" };
        self.committed(op, id, if pinned { "Pinned tracker" } else { "Unpinned tracker" })
    }

    pub fn get_tracker(&self, id: &str) -> AppResult<Option<Tracker>> {
        trackers::get_tracker(&self.pool.conn, id)
    }

    /// All trackers, insertion order. Rows that fail to decode are
    /// skipped; one corrupted row must not take the whole list down.
    pub fn list_trackers(&self) -> AppResult<Vec<Tracker>> {
        let rows = trackers::load_all_rows(&self.pool.conn)?;
        Ok(rows.iter().filter_map(|r| r.decode().ok()).collect())
    }

    // ---------------------------
    // Categories
    // ---------------------------

    pub fn create_category(&mut self, title: &str) -> AppResult<Category> {
        let category = categories::insert_category(&self.pool.conn, title)?;
        self.committed("add_category", &category.id, &format!("Added category '{}'", title))?;
        Ok(category)
    }

    pub fn rename_category(&mut self, id: &str, new_title: &str) -> AppResult<()> {
        categories::rename_category(&self.pool.conn, id, new_title)?;
        self.committed("rename_category", id, &format!("Renamed category to '{}'", new_title))
    }

    pub fn delete_category(&mut self, id: &str) -> AppResult<()> {
        categories::delete_category(&mut self.pool.conn, id)?;
        self.committed("del_category", id, "Deleted category and its trackers")
    }

    pub fn get_category(&self, id: &str) -> AppResult<Option<Category>> {
        categories::get_category(&self.pool.conn, id)
    }

    pub fn list_categories(&self) -> AppResult<Vec<Category>> {
        categories::list_categories(&self.pool.conn)
    }

    /// Resolve a category by exact title, creating it on first use.
    pub fn category_by_title_or_create(&mut self, title: &str) -> AppResult<Category> {
        if let Some(existing) = categories::get_category_by_title(&self.pool.conn, title)? {
            return Ok(existing);
        }
        self.create_category(title)
    }

    // ---------------------------
    // Completions
    // ---------------------------

    pub fn mark_completed(&mut self, tracker_id: &str, day: NaiveDate) -> AppResult<()> {
        records::mark_completed(&self.pool.conn, tracker_id, day)?;
        stats::recompute_perfect_day(&self.pool.conn, day)?;
        self.committed("check", tracker_id, &format!("Completed on {}", day))
    }

    pub fn mark_incomplete(&mut self, tracker_id: &str, day: NaiveDate) -> AppResult<()> {
        records::mark_incomplete(&self.pool.conn, tracker_id, day)?;
        stats::recompute_perfect_day(&self.pool.conn, day)?;
        self.committed("uncheck", tracker_id, &format!("Uncompleted on {}", day))
    }

    pub fn is_completed(&self, tracker_id: &str, day: NaiveDate) -> AppResult<bool> {
        records::is_completed(&self.pool.conn, tracker_id, day)
    }

    pub fn completion_count(&self, tracker_id: &str) -> AppResult<i64> {
        records::completion_count(&self.pool.conn, tracker_id)
    }

    pub fn completion_count_on(&self, day: NaiveDate) -> AppResult<i64> {
        records::completion_count_on(&self.pool.conn, day)
    }

    // ---------------------------
    // Queries & statistics
    // ---------------------------

    pub fn query(
        &self,
        date: NaiveDate,
        filter: FilterMode,
        search: Option<&str>,
    ) -> AppResult<QueryOutput> {
        query::query(&self.pool.conn, date, filter, search)
    }

    pub fn statistics(&self, date: NaiveDate) -> AppResult<Statistics> {
        stats::gather(&self.pool.conn, date)
    }

    pub fn best_streak(&self) -> AppResult<i64> {
        stats::best_streak(&self.pool.conn)
    }

    pub fn total_perfect_days(&self) -> AppResult<i64> {
        perfect_days::count_days(&self.pool.conn)
    }

    pub fn total_completions(&self) -> AppResult<i64> {
        records::total_completions(&self.pool.conn)
    }

    pub fn average_completion_rate(&self, day: NaiveDate) -> AppResult<f64> {
        stats::average_completion_rate(&self.pool.conn, day)
    }

    /// True once at least one tracker exists; drives the "no statistics
    /// yet" placeholder.
    pub fn has_trackers(&self) -> AppResult<bool> {
        Ok(trackers::count_trackers(&self.pool.conn)? > 0)
    }

    /// Look up a tracker or fail loudly. Convenience for CLI handlers.
    pub fn require_tracker(&self, id: &str) -> AppResult<Tracker> {
        self.get_tracker(id)?
            .ok_or_else(|| AppError::TrackerNotFound(id.to_string()))
    }
}
