//! Repository behavior through the library API: CRUD, pinning, cascades,
//! completion toggling and the perfect-day bookkeeping behind statistics.

use chrono::NaiveDate;
use habitrack::db::repository::Repository;
use habitrack::errors::AppError;
use habitrack::models::color::SELECTION_PALETTE;
use habitrack::models::filter::FilterMode;
use habitrack::models::schedule::{Schedule, Weekday};
use habitrack::models::tracker::Tracker;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn habit(name: &str, days: &[Weekday]) -> Tracker {
    Tracker::new_habit(
        name,
        "⭐",
        SELECTION_PALETTE[0],
        Schedule::from_days(days.iter().copied()),
    )
    .unwrap()
}

#[test]
fn create_get_update_delete_round_trip() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Health").unwrap();

    let t = habit("Drink Water", &[Weekday::Monday, Weekday::Friday]);
    repo.create_tracker(&t, &cat.id).unwrap();

    let loaded = repo.get_tracker(&t.id).unwrap().unwrap();
    assert_eq!(loaded, t);

    // Full replace.
    let mut edited = loaded.clone();
    edited.name = "Drink More Water".to_string();
    edited.schedule = Schedule::every_day();
    repo.update_tracker(&t.id, &edited, &cat.id).unwrap();
    let reloaded = repo.get_tracker(&t.id).unwrap().unwrap();
    assert_eq!(reloaded.name, "Drink More Water");
    assert_eq!(reloaded.schedule.len(), 7);

    repo.delete_tracker(&t.id).unwrap();
    assert!(repo.get_tracker(&t.id).unwrap().is_none());
}

#[test]
fn create_fails_for_unknown_category() {
    let mut repo = Repository::open_in_memory().unwrap();
    let t = habit("Orphan", &[Weekday::Monday]);
    let err = repo.create_tracker(&t, "no-such-category").unwrap_err();
    assert!(matches!(err, AppError::CategoryNotFound(_)));
}

#[test]
fn double_delete_fails_loudly() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Health").unwrap();
    let t = habit("Drink Water", &[Weekday::Monday]);
    repo.create_tracker(&t, &cat.id).unwrap();

    repo.delete_tracker(&t.id).unwrap();
    let err = repo.delete_tracker(&t.id).unwrap_err();
    assert!(matches!(err, AppError::TrackerNotFound(_)));
}

#[test]
fn deleting_tracker_cascades_completion_records() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Health").unwrap();
    let t = habit("Drink Water", &[Weekday::Monday]);
    repo.create_tracker(&t, &cat.id).unwrap();

    repo.mark_completed(&t.id, monday()).unwrap();
    assert_eq!(repo.total_completions().unwrap(), 1);

    repo.delete_tracker(&t.id).unwrap();
    assert_eq!(repo.total_completions().unwrap(), 0);
}

#[test]
fn deleting_category_cascades_trackers() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Doomed").unwrap();
    let t = habit("Drink Water", &[Weekday::Monday]);
    repo.create_tracker(&t, &cat.id).unwrap();
    repo.mark_completed(&t.id, monday()).unwrap();

    repo.delete_category(&cat.id).unwrap();

    assert!(repo.get_tracker(&t.id).unwrap().is_none());
    assert_eq!(repo.total_completions().unwrap(), 0);
    let out = repo.query(monday(), FilterMode::AllTrackers, None).unwrap();
    assert!(out.is_empty());
}

#[test]
fn completion_toggle_is_idempotent_and_reversible() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Health").unwrap();
    let t = habit("Drink Water", &[Weekday::Monday]);
    repo.create_tracker(&t, &cat.id).unwrap();

    let before = repo.completion_count(&t.id).unwrap();

    // Double-complete does not double-count.
    repo.mark_completed(&t.id, monday()).unwrap();
    repo.mark_completed(&t.id, monday()).unwrap();
    assert_eq!(repo.completion_count(&t.id).unwrap(), before + 1);
    assert!(repo.is_completed(&t.id, monday()).unwrap());

    // Complete-then-undo restores the original count.
    repo.mark_incomplete(&t.id, monday()).unwrap();
    assert!(!repo.is_completed(&t.id, monday()).unwrap());
    assert_eq!(repo.completion_count(&t.id).unwrap(), before);

    // Undo with no record is a no-op.
    repo.mark_incomplete(&t.id, monday()).unwrap();
    assert_eq!(repo.completion_count(&t.id).unwrap(), before);
}

#[test]
fn marking_unknown_tracker_fails() {
    let mut repo = Repository::open_in_memory().unwrap();
    let err = repo.mark_completed("ghost", monday()).unwrap_err();
    assert!(matches!(err, AppError::TrackerNotFound(_)));
}

#[test]
fn pin_moves_to_pinned_section_and_unpin_restores() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Health").unwrap();
    let t = habit("Drink Water", &[Weekday::Monday]);
    repo.create_tracker(&t, &cat.id).unwrap();

    repo.set_pinned(&t.id, true).unwrap();
    let pinned = repo.get_tracker(&t.id).unwrap().unwrap();
    assert!(pinned.is_pinned);
    assert_eq!(pinned.old_category_id.as_deref(), Some(cat.id.as_str()));

    let out = repo.query(monday(), FilterMode::AllTrackers, None).unwrap();
    assert_eq!(out.sections[0].title, "Pinned");

    repo.set_pinned(&t.id, false).unwrap();
    let unpinned = repo.get_tracker(&t.id).unwrap().unwrap();
    assert!(!unpinned.is_pinned);
    assert!(unpinned.old_category_id.is_none());

    let out = repo.query(monday(), FilterMode::AllTrackers, None).unwrap();
    assert_eq!(out.sections[0].title, "Health");
}

#[test]
fn unpin_with_deleted_old_category_is_refused_and_stays_pinned() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Vanishing").unwrap();
    let t = habit("Drink Water", &[Weekday::Monday]);
    repo.create_tracker(&t, &cat.id).unwrap();

    repo.set_pinned(&t.id, true).unwrap();
    // Deleting the old category only removes the trackers still in it;
    // the pinned tracker survives in the Pinned category.
    repo.delete_category(&cat.id).unwrap();
    assert!(repo.get_tracker(&t.id).unwrap().is_some());

    let err = repo.set_pinned(&t.id, false).unwrap_err();
    assert!(matches!(err, AppError::CategoryNotFound(_)));
    assert!(repo.get_tracker(&t.id).unwrap().unwrap().is_pinned);
}

#[test]
fn categories_list_in_creation_order_without_pinned() {
    let mut repo = Repository::open_in_memory().unwrap();
    repo.create_category("First").unwrap();
    repo.create_category("Second").unwrap();
    repo.create_category("Third").unwrap();

    let titles: Vec<String> = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    // The reserved category stays out of listings but is retrievable.
    let pinned = repo
        .get_category(habitrack::models::category::PINNED_CATEGORY_ID)
        .unwrap();
    assert!(pinned.is_some());
}

#[test]
fn rename_category_and_not_found_cases() {
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Old Name").unwrap();
    repo.rename_category(&cat.id, "New Name").unwrap();
    assert_eq!(repo.get_category(&cat.id).unwrap().unwrap().title, "New Name");

    assert!(matches!(
        repo.rename_category("ghost", "X").unwrap_err(),
        AppError::CategoryNotFound(_)
    ));
    assert!(matches!(
        repo.delete_category("ghost").unwrap_err(),
        AppError::CategoryNotFound(_)
    ));
}

#[test]
fn revision_bumps_on_every_mutation() {
    let mut repo = Repository::open_in_memory().unwrap();
    let r0 = repo.revision();

    let cat = repo.create_category("Health").unwrap();
    assert!(repo.revision() > r0);

    let t = habit("Drink Water", &[Weekday::Monday]);
    let r1 = repo.revision();
    repo.create_tracker(&t, &cat.id).unwrap();
    assert!(repo.revision() > r1);

    let r2 = repo.revision();
    repo.mark_completed(&t.id, monday()).unwrap();
    assert!(repo.revision() > r2);
}

#[test]
fn drink_water_scenario() {
    // Create "Drink Water" on Mon/Wed/Fri; it appears on Monday, not on
    // Tuesday; after completion it shows under `completed` and drops out
    // of `not-completed`.
    let mut repo = Repository::open_in_memory().unwrap();
    let cat = repo.create_category("Health").unwrap();
    let t = habit(
        "Drink Water",
        &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
    );
    repo.create_tracker(&t, &cat.id).unwrap();

    let tuesday = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();

    let out = repo.query(monday(), FilterMode::AllTrackers, None).unwrap();
    assert_eq!(out.sections[0].trackers[0].name, "Drink Water");

    let out = repo.query(tuesday, FilterMode::AllTrackers, None).unwrap();
    assert!(out.is_empty());

    repo.mark_completed(&t.id, monday()).unwrap();

    let out = repo.query(monday(), FilterMode::Completed, None).unwrap();
    assert_eq!(out.sections[0].trackers[0].name, "Drink Water");

    let out = repo.query(monday(), FilterMode::NotCompleted, None).unwrap();
    assert!(out.is_empty());
}
