use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Mark a tracker completed (or undo it) for a calendar day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { id, date: day, undo } = cmd {
        let day = match day {
            Some(s) => date::parse_day(s)?,
            None => date::today(),
        };

        let mut repo = Repository::open(&cfg.database)?;
        let tracker = repo.require_tracker(id)?;

        if *undo {
            repo.mark_incomplete(id, day)?;
            success(format!("'{}' unmarked for {}", tracker.name, day));
        } else {
            repo.mark_completed(id, day)?;
            success(format!("'{}' completed for {}", tracker.name, day));
        }

        let count = repo.completion_count(id)?;
        info(format!("Total completions for '{}': {}", tracker.name, count));
    }
    Ok(())
}
