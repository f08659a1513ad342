use crate::errors::{AppError, AppResult};
use crate::models::category::{Category, PINNED_CATEGORY_ID};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

fn map_row(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        title: row.get("title")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new user category and return it.
pub fn insert_category(conn: &Connection, title: &str) -> AppResult<Category> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("category title must not be empty".into()));
    }

    let category = Category {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        created_at: Local::now().to_rfc3339(),
    };

    conn.execute(
        "INSERT INTO categories (id, title, created_at) VALUES (?1, ?2, ?3)",
        [&category.id, &category.title, &category.created_at],
    )?;

    Ok(category)
}

pub fn rename_category(conn: &Connection, id: &str, new_title: &str) -> AppResult<()> {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return Err(AppError::Validation("category title must not be empty".into()));
    }

    let changed = conn.execute(
        "UPDATE categories SET title = ?1 WHERE id = ?2",
        [new_title, id],
    )?;
    if changed == 0 {
        return Err(AppError::CategoryNotFound(id.to_string()));
    }
    Ok(())
}

/// Delete a category and every tracker in it. Completion records of the
/// deleted trackers go with them (FK cascade).
pub fn delete_category(conn: &mut Connection, id: &str) -> AppResult<()> {
    if get_category(conn, id)?.is_none() {
        return Err(AppError::CategoryNotFound(id.to_string()));
    }

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM trackers WHERE category_id = ?1", [id])?;
    tx.execute("DELETE FROM categories WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(())
}

pub fn get_category(conn: &Connection, id: &str) -> AppResult<Option<Category>> {
    let category = conn
        .query_row("SELECT * FROM categories WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(category)
}

pub fn get_category_by_title(conn: &Connection, title: &str) -> AppResult<Option<Category>> {
    let category = conn
        .query_row(
            "SELECT * FROM categories WHERE title = ?1 AND id != ?2 LIMIT 1",
            [title, PINNED_CATEGORY_ID],
            map_row,
        )
        .optional()?;
    Ok(category)
}

/// All user categories in creation order. The reserved Pinned category is
/// excluded here; it is still retrievable by id.
pub fn list_categories(conn: &Connection) -> AppResult<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM categories
         WHERE id != ?1
         ORDER BY created_at ASC",
    )?;

    let rows = stmt.query_map([PINNED_CATEGORY_ID], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
