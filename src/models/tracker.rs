use super::color::Rgb;
use super::schedule::Schedule;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use uuid::Uuid;

/// A habit or one-off event as the user defined it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tracker {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: Rgb,
    pub schedule: Schedule,
    pub is_habit: bool,
    pub is_pinned: bool,
    /// Category the tracker lived in before it was pinned; used to put it
    /// back on unpin. None while unpinned.
    pub old_category_id: Option<String>,
}

impl Tracker {
    /// Build a new habit recurring on the given weekdays.
    pub fn new_habit(name: &str, emoji: &str, color: Rgb, schedule: Schedule) -> AppResult<Self> {
        Self::build(name, emoji, color, schedule, true)
    }

    /// Build a one-off event. Events are implicitly scheduled on all
    /// seven days at creation time.
    pub fn new_event(name: &str, emoji: &str, color: Rgb) -> AppResult<Self> {
        Self::build(name, emoji, color, Schedule::every_day(), false)
    }

    fn build(
        name: &str,
        emoji: &str,
        color: Rgb,
        schedule: Schedule,
        is_habit: bool,
    ) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("tracker name must not be empty".into()));
        }
        if emoji.trim().is_empty() {
            return Err(AppError::Validation("tracker emoji must not be empty".into()));
        }
        if is_habit && schedule.is_empty() {
            return Err(AppError::Validation(
                "a habit needs at least one scheduled weekday".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            emoji: emoji.trim().to_string(),
            color,
            schedule,
            is_habit,
            is_pinned: false,
            old_category_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::SELECTION_PALETTE;
    use crate::models::schedule::Weekday;

    #[test]
    fn new_event_is_scheduled_every_day() {
        let t = Tracker::new_event("Dentist", "🦷", SELECTION_PALETTE[2]).unwrap();
        assert!(!t.is_habit);
        assert_eq!(t.schedule.len(), 7);
    }

    #[test]
    fn new_habit_requires_name_emoji_and_days() {
        let color = SELECTION_PALETTE[0];
        let days = Schedule::from_days([Weekday::Monday]);
        assert!(Tracker::new_habit("", "💧", color, days.clone()).is_err());
        assert!(Tracker::new_habit("Water", " ", color, days.clone()).is_err());
        assert!(Tracker::new_habit("Water", "💧", color, Schedule::new()).is_err());
        assert!(Tracker::new_habit("Water", "💧", color, days).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let color = SELECTION_PALETTE[0];
        let a = Tracker::new_event("A", "🅰️", color).unwrap();
        let b = Tracker::new_event("B", "🅱️", color).unwrap();
        assert_ne!(a.id, b.id);
    }
}
