use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::models::color::Rgb;
use crate::models::schedule::Schedule;
use crate::models::tracker::Tracker;
use crate::ui::messages::success;

/// Create a new tracker (habit or one-off event).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        emoji,
        color,
        days,
        event,
        category,
    } = cmd
    {
        let color = Rgb::from_arg(color)?;

        let tracker = if *event {
            Tracker::new_event(name, emoji, color)?
        } else {
            let days = days.as_deref().ok_or_else(|| {
                AppError::Validation("a habit needs --days (e.g. --days mon,wed,fri)".into())
            })?;
            Tracker::new_habit(name, emoji, color, Schedule::parse_names(days)?)?
        };

        let mut repo = Repository::open(&cfg.database)?;
        let category_title = category.as_deref().unwrap_or(&cfg.default_category);
        let category = repo.category_by_title_or_create(category_title)?;
        repo.create_tracker(&tracker, &category.id)?;

        success(format!(
            "Added {} '{}' ({}) in '{}' with id {}",
            if tracker.is_habit { "habit" } else { "event" },
            tracker.name,
            tracker.schedule,
            category.title,
            tracker.id
        ));
    }
    Ok(())
}
