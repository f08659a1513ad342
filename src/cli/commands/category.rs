use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET};

/// Manage categories: create, rename, delete (cascades trackers), list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Category {
        add,
        rename,
        title,
        del,
        list,
    } = cmd
    {
        let mut repo = Repository::open(&cfg.database)?;

        if let Some(new_title) = add {
            let category = repo.create_category(new_title)?;
            success(format!("Added category '{}' with id {}", category.title, category.id));
            return Ok(());
        }

        if let Some(id) = rename {
            let new_title = title.as_deref().ok_or_else(|| {
                AppError::Validation("--rename needs --title for the new name".into())
            })?;
            repo.rename_category(id, new_title)?;
            success(format!("Renamed category to '{}'", new_title));
            return Ok(());
        }

        if let Some(id) = del {
            repo.delete_category(id)?;
            success("Deleted category and all trackers in it.");
            return Ok(());
        }

        if *list {
            let categories = repo.list_categories()?;
            if categories.is_empty() {
                println!("No categories yet.");
                return Ok(());
            }
            println!("CATEGORIES:");
            for c in categories {
                println!("- {} {}{}{}", c.title, GREY, c.id, RESET);
            }
        }
    }
    Ok(())
}
