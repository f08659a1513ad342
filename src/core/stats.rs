//! Perfect days, streaks and completion statistics.
//!
//! A perfect day is a day where at least one tracker was scheduled and
//! every scheduled tracker has a completion record. The persisted
//! perfect-day set is recomputed incrementally: after each completion
//! toggle the affected day is re-evaluated and inserted or removed.

use crate::db::{perfect_days, records, trackers};
use crate::errors::AppResult;
use crate::utils::date::weekday_index;
use chrono::{Days, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;

/// Number of trackers whose schedule covers the given day.
fn count_scheduled_on(conn: &Connection, day: NaiveDate) -> AppResult<i64> {
    let weekday = weekday_index(day);
    let count = trackers::load_all_rows(conn)?
        .iter()
        .filter_map(|r| r.decode().ok())
        .filter(|t| t.schedule.contains_index(weekday))
        .count();
    Ok(count as i64)
}

pub fn is_perfect_day(conn: &Connection, day: NaiveDate) -> AppResult<bool> {
    let scheduled = count_scheduled_on(conn, day)?;
    if scheduled == 0 {
        return Ok(false);
    }
    Ok(scheduled == records::completion_count_on(conn, day)?)
}

/// Re-evaluate one day and sync the persisted perfect-day set. This is
/// the only mutation path for that set; it runs after every completion
/// toggle affecting the day.
pub fn recompute_perfect_day(conn: &Connection, day: NaiveDate) -> AppResult<()> {
    let perfect = is_perfect_day(conn, day)?;
    let stored = perfect_days::contains_day(conn, day)?;

    if perfect && !stored {
        perfect_days::add_day(conn, day)?;
    } else if !perfect && stored {
        perfect_days::remove_day(conn, day)?;
    }
    Ok(())
}

/// Longest run of consecutive perfect days. Scans the ascending day set,
/// extending the current run while each day is exactly one day after the
/// previous. Empty set yields 0.
pub fn best_streak(conn: &Connection) -> AppResult<i64> {
    let days = perfect_days::load_days(conn)?;
    if days.is_empty() {
        return Ok(0);
    }

    let mut best: i64 = 1;
    let mut run: i64 = 1;
    for pair in days.windows(2) {
        if pair[0].checked_add_days(Days::new(1)) == Some(pair[1]) {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }
    Ok(best)
}

/// Share of trackers completed on the given day, in percent.
///
/// The denominator is all trackers in storage, not just those scheduled
/// that day.
pub fn average_completion_rate(conn: &Connection, day: NaiveDate) -> AppResult<f64> {
    let total = trackers::count_trackers(conn)?;
    if total == 0 {
        return Ok(0.0);
    }
    let completed = records::completion_count_on(conn, day)?;
    Ok(completed as f64 / total as f64 * 100.0)
}

/// Everything the statistics screen shows, in one fetch.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub best_streak: i64,
    pub perfect_days: i64,
    pub total_completions: i64,
    pub average_completion_rate: f64,
}

pub fn gather(conn: &Connection, day: NaiveDate) -> AppResult<Statistics> {
    Ok(Statistics {
        best_streak: best_streak(conn)?,
        perfect_days: perfect_days::count_days(conn)?,
        total_completions: records::total_completions(conn)?,
        average_completion_rate: average_completion_rate(conn, day)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::Repository;
    use crate::models::color::SELECTION_PALETTE;
    use crate::models::schedule::{Schedule, Weekday};
    use crate::models::tracker::Tracker;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn daily(name: &str) -> Tracker {
        Tracker::new_habit(name, "⭐", SELECTION_PALETTE[0], Schedule::every_day()).unwrap()
    }

    #[test]
    fn perfect_day_requires_every_scheduled_tracker_completed() {
        let mut repo = Repository::open_in_memory().unwrap();
        let cat = repo.create_category("Daily").unwrap();
        let trackers: Vec<Tracker> = (0..3).map(|i| daily(&format!("t{}", i))).collect();
        for t in &trackers {
            repo.create_tracker(t, &cat.id).unwrap();
        }

        let day = monday();
        assert!(!is_perfect_day(repo.conn(), day).unwrap());

        for t in &trackers {
            repo.mark_completed(&t.id, day).unwrap();
        }
        assert!(is_perfect_day(repo.conn(), day).unwrap());
        assert_eq!(repo.total_perfect_days().unwrap(), 1);

        // Removing one completion flips the day back.
        repo.mark_incomplete(&trackers[0].id, day).unwrap();
        assert!(!is_perfect_day(repo.conn(), day).unwrap());
        assert_eq!(repo.total_perfect_days().unwrap(), 0);
    }

    #[test]
    fn day_with_nothing_scheduled_is_never_perfect() {
        let mut repo = Repository::open_in_memory().unwrap();
        let cat = repo.create_category("Weekdays").unwrap();
        let t = Tracker::new_habit(
            "Standup",
            "🧍",
            SELECTION_PALETTE[1],
            Schedule::from_days([Weekday::Monday]),
        )
        .unwrap();
        repo.create_tracker(&t, &cat.id).unwrap();

        // Tuesday has zero scheduled trackers.
        let tuesday = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        assert!(!is_perfect_day(repo.conn(), tuesday).unwrap());
    }

    #[test]
    fn best_streak_finds_longest_consecutive_run() {
        let repo = Repository::open_in_memory().unwrap();
        let conn = repo.conn();
        for d in ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-05"] {
            perfect_days::add_day(conn, crate::utils::date::parse_day(d).unwrap()).unwrap();
        }
        assert_eq!(best_streak(conn).unwrap(), 3);
    }

    #[test]
    fn best_streak_on_empty_set_is_zero() {
        let repo = Repository::open_in_memory().unwrap();
        assert_eq!(best_streak(repo.conn()).unwrap(), 0);
    }

    #[test]
    fn best_streak_single_day_is_one() {
        let repo = Repository::open_in_memory().unwrap();
        perfect_days::add_day(repo.conn(), monday()).unwrap();
        assert_eq!(best_streak(repo.conn()).unwrap(), 1);
    }

    #[test]
    fn average_rate_uses_all_trackers_as_denominator() {
        let mut repo = Repository::open_in_memory().unwrap();
        let cat = repo.create_category("Daily").unwrap();

        // 5 trackers, only 1 scheduled on Monday and completed there.
        let mon_only = Tracker::new_habit(
            "Mon",
            "1️⃣",
            SELECTION_PALETTE[0],
            Schedule::from_days([Weekday::Monday]),
        )
        .unwrap();
        repo.create_tracker(&mon_only, &cat.id).unwrap();
        for i in 0..4 {
            let t = Tracker::new_habit(
                &format!("tue{}", i),
                "2️⃣",
                SELECTION_PALETTE[1],
                Schedule::from_days([Weekday::Tuesday]),
            )
            .unwrap();
            repo.create_tracker(&t, &cat.id).unwrap();
        }
        repo.mark_completed(&mon_only.id, monday()).unwrap();

        // 1 completion / 5 trackers in storage = 20%.
        let rate = repo.average_completion_rate(monday()).unwrap();
        assert!((rate - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_rate_without_trackers_is_zero() {
        let repo = Repository::open_in_memory().unwrap();
        assert_eq!(repo.average_completion_rate(monday()).unwrap(), 0.0);
    }

    #[test]
    fn gather_collects_all_fields() {
        let mut repo = Repository::open_in_memory().unwrap();
        let cat = repo.create_category("Daily").unwrap();
        let t = daily("Water");
        repo.create_tracker(&t, &cat.id).unwrap();
        repo.mark_completed(&t.id, monday()).unwrap();

        let stats = repo.statistics(monday()).unwrap();
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.perfect_days, 1);
        assert_eq!(stats.total_completions, 1);
        assert!((stats.average_completion_rate - 100.0).abs() < f64::EPSILON);
    }
}
