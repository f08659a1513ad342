use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREY, RESET, completion_mark};
use crate::utils::date;

/// List trackers visible for a date, sectioned by category.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: day,
        filter,
        search,
    } = cmd
    {
        let day = match day {
            Some(s) => date::parse_day(s)?,
            None => date::today(),
        };

        let repo = Repository::open(&cfg.database)?;
        let out = repo.query(day, *filter, search.as_deref())?;

        if out.skipped_rows > 0 {
            warning(format!(
                "{} stored tracker(s) could not be decoded and were skipped",
                out.skipped_rows
            ));
        }

        if out.is_empty() {
            println!("No trackers for {}.", out.date);
            return Ok(());
        }

        println!("\n=== {} ===", out.date);
        for section in &out.sections {
            println!("\n{}{}{}", CYAN, section.title, RESET);
            for tracker in &section.trackers {
                let done = repo.is_completed(&tracker.id, out.date)?;
                let days_count = repo.completion_count(&tracker.id)?;
                let glyph = if cfg.show_emoji {
                    format!("{} ", tracker.emoji)
                } else {
                    String::new()
                };
                println!(
                    "  {} {}{} ({}) | {} day(s) {}{}{}",
                    completion_mark(done),
                    glyph,
                    tracker.name,
                    tracker.schedule,
                    days_count,
                    GREY,
                    tracker.id,
                    RESET,
                );
            }
        }
        println!();
    }
    Ok(())
}
