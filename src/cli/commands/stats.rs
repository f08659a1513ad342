use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_streak};
use crate::utils::date;

/// Show streak and completion statistics.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date: day, json } = cmd {
        let day = match day {
            Some(s) => date::parse_day(s)?,
            None => date::today(),
        };

        let repo = Repository::open(&cfg.database)?;

        if !repo.has_trackers()? {
            println!("No trackers yet: nothing to analyze.");
            return Ok(());
        }

        let stats = repo.statistics(day)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        header(format!("Statistics ({})", day));
        println!(
            "{}• Best streak:{} {}{} day(s){}",
            CYAN,
            RESET,
            color_for_streak(stats.best_streak),
            stats.best_streak,
            RESET
        );
        println!("{}• Perfect days:{} {}", CYAN, RESET, stats.perfect_days);
        println!("{}• Completed trackers:{} {}", CYAN, RESET, stats.total_completions);
        println!(
            "{}• Average completion:{} {:.1}%",
            CYAN, RESET, stats.average_completion_rate
        );
        println!();
    }
    Ok(())
}
