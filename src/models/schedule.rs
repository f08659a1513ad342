//! Weekday schedule and its persisted string form.
//!
//! A schedule is the set of weekdays a habit recurs on. It is stored as the
//! Monday-first indices joined with commas ("0,2,4" = Mon, Wed, Fri); an
//! empty set encodes to the empty string.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday-first index: Mon=0 .. Sun=6.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(idx: u8) -> AppResult<Self> {
        Self::ALL
            .get(idx as usize)
            .copied()
            .ok_or_else(|| AppError::InvalidWeekday(idx.to_string()))
    }

    /// Parse a short weekday name as typed on the command line.
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Monday),
            "tue" | "tuesday" => Ok(Weekday::Tuesday),
            "wed" | "wednesday" => Ok(Weekday::Wednesday),
            "thu" | "thursday" => Ok(Weekday::Thursday),
            "fri" | "friday" => Ok(Weekday::Friday),
            "sat" | "saturday" => Ok(Weekday::Saturday),
            "sun" | "sunday" => Ok(Weekday::Sunday),
            other => Err(AppError::InvalidWeekday(other.to_string())),
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule(BTreeSet<Weekday>);

impl Schedule {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Schedule covering all seven days. One-off events get this at
    /// creation time so the weekday predicate is trivially satisfied.
    pub fn every_day() -> Self {
        Self(Weekday::ALL.into_iter().collect())
    }

    pub fn from_days<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        Self(days.into_iter().collect())
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    /// Does the schedule cover the weekday at the given Monday-first index?
    pub fn contains_index(&self, idx: u8) -> bool {
        Weekday::from_index(idx).map(|d| self.contains(d)).unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Persisted form: sorted Monday-first indices joined with commas.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|d| d.index().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the persisted form. The empty string decodes to the empty
    /// schedule; any unparsable token is a decode error.
    pub fn decode(s: &str) -> AppResult<Self> {
        if s.is_empty() {
            return Ok(Self::new());
        }
        let mut days = BTreeSet::new();
        for token in s.split(',') {
            let idx: u8 = token
                .trim()
                .parse()
                .map_err(|_| AppError::DecodeSchedule(s.to_string()))?;
            let day =
                Weekday::from_index(idx).map_err(|_| AppError::DecodeSchedule(s.to_string()))?;
            days.insert(day);
        }
        Ok(Self(days))
    }

    /// Parse a CLI day list such as "mon,wed,fri".
    pub fn parse_names(s: &str) -> AppResult<Self> {
        let mut days = BTreeSet::new();
        for token in s.split(',') {
            days.insert(Weekday::from_name(token)?);
        }
        Ok(Self(days))
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() == 7 {
            return write!(f, "every day");
        }
        let names: Vec<&str> = self.0.iter().map(|d| d.short_name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_sorted_indices() {
        let s = Schedule::from_days([Weekday::Friday, Weekday::Monday, Weekday::Wednesday]);
        assert_eq!(s.encode(), "0,2,4");
    }

    #[test]
    fn decode_empty_string_is_empty_schedule() {
        let s = Schedule::decode("").unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn decode_rejects_bad_tokens() {
        assert!(Schedule::decode("0,x,4").is_err());
        assert!(Schedule::decode("0,9").is_err());
    }

    #[test]
    fn round_trip_every_subset() {
        // All 128 subsets of {0..6}.
        for mask in 0u8..128 {
            let days = (0u8..7)
                .filter(|i| mask & (1u8 << i) != 0)
                .map(|i| Weekday::from_index(i).unwrap());
            let s = Schedule::from_days(days);
            assert_eq!(Schedule::decode(&s.encode()).unwrap(), s);
        }
    }

    #[test]
    fn every_day_covers_all_indices() {
        let s = Schedule::every_day();
        for idx in 0..7 {
            assert!(s.contains_index(idx));
        }
        assert_eq!(s.encode(), "0,1,2,3,4,5,6");
    }

    #[test]
    fn parse_names_accepts_short_and_long() {
        let s = Schedule::parse_names("mon,Wednesday,FRI").unwrap();
        assert_eq!(s.encode(), "0,2,4");
        assert!(Schedule::parse_names("mon,funday").is_err());
    }
}
