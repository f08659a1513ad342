//! Builds the sectioned tracker list for one date, filter mode and
//! optional search string.
//!
//! All predicates are AND-ed: the tracker's schedule must cover the
//! weekday of the query date, the name must contain the search text
//! (case-insensitive), and the completion-mode filter must hold. Results
//! are grouped by category in creation order, with the synthetic Pinned
//! section emitted first when non-empty.

use crate::db::{categories, records, trackers};
use crate::errors::AppResult;
use crate::models::category::{PINNED_CATEGORY_ID, PINNED_SECTION_LABEL};
use crate::models::filter::FilterMode;
use crate::models::tracker::Tracker;
use crate::utils::date::{today, weekday_index};
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub trackers: Vec<Tracker>,
}

#[derive(Debug, Clone)]
pub struct QueryOutput {
    /// The date the query actually ran against. Differs from the caller's
    /// date when the `today` filter forces it.
    pub date: NaiveDate,
    pub sections: Vec<Section>,
    /// Stored rows that failed to decode and were skipped.
    pub skipped_rows: usize,
}

impl QueryOutput {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

pub fn query(
    conn: &Connection,
    date: NaiveDate,
    filter: FilterMode,
    search: Option<&str>,
) -> AppResult<QueryOutput> {
    // The "today" mode overrides whatever date the caller picked.
    let date = match filter {
        FilterMode::TrackersForToday => today(),
        _ => date,
    };
    let weekday = weekday_index(date);
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let rows = trackers::load_all_rows(conn)?;
    let mut skipped_rows = 0;

    // (category_id, tracker) pairs surviving all predicates, in storage
    // order. A row that fails to decode is skipped, never fatal.
    let mut visible: Vec<(String, Tracker)> = Vec::new();
    for row in &rows {
        let tracker = match row.decode() {
            Ok(t) => t,
            Err(_) => {
                skipped_rows += 1;
                continue;
            }
        };

        if !tracker.schedule.contains_index(weekday) {
            continue;
        }

        if let Some(needle) = &needle {
            if !tracker.name.to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }

        match filter {
            FilterMode::AllTrackers | FilterMode::TrackersForToday => {}
            FilterMode::Completed => {
                if !records::is_completed(conn, &tracker.id, date)? {
                    continue;
                }
            }
            FilterMode::NotCompleted => {
                if records::is_completed(conn, &tracker.id, date)? {
                    continue;
                }
            }
        }

        visible.push((row.category_id.clone(), tracker));
    }

    let mut sections = Vec::new();

    // Pinned section comes first and always under its fixed label,
    // never the stored internal title.
    let pinned: Vec<Tracker> = visible
        .iter()
        .filter(|(cat, _)| cat == PINNED_CATEGORY_ID)
        .map(|(_, t)| t.clone())
        .collect();
    if !pinned.is_empty() {
        sections.push(Section {
            title: PINNED_SECTION_LABEL.to_string(),
            trackers: pinned,
        });
    }

    for category in categories::list_categories(conn)? {
        let in_category: Vec<Tracker> = visible
            .iter()
            .filter(|(cat, _)| *cat == category.id)
            .map(|(_, t)| t.clone())
            .collect();
        if !in_category.is_empty() {
            sections.push(Section {
                title: category.title,
                trackers: in_category,
            });
        }
    }

    Ok(QueryOutput {
        date,
        sections,
        skipped_rows,
    })
}
