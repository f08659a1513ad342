use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::models::color::Rgb;
use crate::models::schedule::Schedule;
use crate::ui::messages::success;

/// Edit a tracker. Reads the current record, applies the requested
/// changes and writes the whole record back (no partial update).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        emoji,
        color,
        days,
        category,
    } = cmd
    {
        let mut repo = Repository::open(&cfg.database)?;
        let mut tracker = repo.require_tracker(id)?;

        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("tracker name must not be empty".into()));
            }
            tracker.name = name.trim().to_string();
        }
        if let Some(emoji) = emoji {
            if emoji.trim().is_empty() {
                return Err(AppError::Validation("tracker emoji must not be empty".into()));
            }
            tracker.emoji = emoji.trim().to_string();
        }
        if let Some(color) = color {
            tracker.color = Rgb::from_arg(color)?;
        }
        if let Some(days) = days {
            let schedule = Schedule::parse_names(days)?;
            if tracker.is_habit && schedule.is_empty() {
                return Err(AppError::Validation(
                    "a habit needs at least one scheduled weekday".into(),
                ));
            }
            tracker.schedule = schedule;
        }

        // Category re-binding: keep the current one unless asked to move.
        let category_id = match category {
            Some(title) => repo.category_by_title_or_create(title)?.id,
            None => {
                let row = crate::db::trackers::get_tracker_row(repo.conn(), id)?
                    .ok_or_else(|| AppError::TrackerNotFound(id.to_string()))?;
                row.category_id
            }
        };

        repo.update_tracker(id, &tracker, &category_id)?;
        success(format!("Updated tracker '{}'", tracker.name));
    }
    Ok(())
}
