use clap::ValueEnum;

/// Completion-mode filter applied on top of the weekday and search
/// predicates when building the tracker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    /// No additional constraint.
    #[default]
    #[value(name = "all")]
    AllTrackers,
    /// Same as `all`, but forces the query date to today.
    #[value(name = "today")]
    TrackersForToday,
    /// Only trackers with a completion record for the query date.
    #[value(name = "completed")]
    Completed,
    /// Only trackers without a completion record for the query date.
    #[value(name = "not-completed")]
    NotCompleted,
}
