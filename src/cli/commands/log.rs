use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};

/// Print the internal operation log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let mut pool = DbPool::new(&cfg.database)?;
            let rows = load_log(&mut pool)?;

            if rows.is_empty() {
                println!("Log is empty.");
                return Ok(());
            }

            println!("LOG:");
            for (date, operation, message) in rows {
                println!("- {}{}{} [{}] {}", GREY, date, RESET, operation, message);
            }
        }
    }
    Ok(())
}
