use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Delete a tracker; its completion records go with it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut repo = Repository::open(&cfg.database)?;
        let tracker = repo.require_tracker(id)?;
        repo.delete_tracker(id)?;
        success(format!("Deleted tracker '{}'", tracker.name));
    }
    Ok(())
}
