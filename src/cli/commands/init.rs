use crate::cli::parser::Cli;
use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Initialize configuration and database.
/// Opening the repository runs all pending migrations and creates the
/// reserved Pinned category.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = crate::config::Config::init_all(cli.db.clone(), cli.test)?;

    // init_all resolves a relative --db into the config directory; open
    // the resolved path so the database lands where the config says.
    Repository::open(&cfg.database)?;

    success("Database initialized.");
    Ok(())
}
