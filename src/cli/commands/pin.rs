use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Pin or unpin a tracker. An unpin whose old category has since been
/// deleted is refused with a warning; the tracker stays pinned.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, pinned) = match cmd {
        Commands::Pin { id } => (id, true),
        Commands::Unpin { id } => (id, false),
        _ => return Ok(()),
    };

    let mut repo = Repository::open(&cfg.database)?;
    let tracker = repo.require_tracker(id)?;

    match repo.set_pinned(id, pinned) {
        Ok(()) => {
            if pinned {
                success(format!("Pinned '{}'", tracker.name));
            } else {
                success(format!("Unpinned '{}'", tracker.name));
            }
            Ok(())
        }
        Err(AppError::CategoryNotFound(old)) if !pinned => {
            warning(format!(
                "Cannot unpin '{}': its previous category ({}) no longer exists. \
                 Move it with `edit {} --category <title>` instead.",
                tracker.name, old, id
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
