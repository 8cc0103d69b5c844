use anyhow::{Context, Result};
use tokio_postgres::Row;

use crate::db::Session;
use crate::models::{Item, ItemCreate};

/// Total mapping from a stored row to the output shape. Every statement
/// in this module selects or returns the same column list.
fn item_from_row(row: &Row) -> Result<Item> {
    Ok(Item {
        id: row.try_get("id").context("Failed to read item id")?,
        name: row.try_get("name").context("Failed to read item name")?,
        description: row
            .try_get("description")
            .context("Failed to read item description")?,
    })
}

/// List items in insertion order, applying an offset-then-limit window.
pub async fn list(session: &Session, skip: i64, limit: i64) -> Result<Vec<Item>> {
    let rows = session
        .query(
            "SELECT id, name, description FROM items ORDER BY id OFFSET $1 LIMIT $2",
            &[&skip, &limit],
        )
        .await
        .context("Failed to list items")?;

    let items = rows
        .iter()
        .map(item_from_row)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Listed {} items (skip: {}, limit: {})", items.len(), skip, limit);
    Ok(items)
}

/// Fetch a single item by id. `None` means the id is absent from the store.
pub async fn get(session: &Session, id: i64) -> Result<Option<Item>> {
    let row = session
        .query_opt(
            "SELECT id, name, description FROM items WHERE id = $1",
            &[&id],
        )
        .await
        .context("Failed to query item")?;

    match row {
        Some(row) => {
            tracing::debug!("Read item with id: {}", id);
            Ok(Some(item_from_row(&row)?))
        }
        None => {
            tracing::debug!("Item not found with id: {}", id);
            Ok(None)
        }
    }
}

/// Insert a new item. The store assigns the id and returns the stored result.
pub async fn create(session: &Session, input: &ItemCreate) -> Result<Item> {
    let row = session
        .query_one(
            "INSERT INTO items (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
            &[&input.name, &input.description],
        )
        .await
        .context("Failed to insert item")?;

    let item = item_from_row(&row)?;
    tracing::debug!("Created item with id: {}", item.id);
    Ok(item)
}

/// Overwrite every mutable field of an existing item (full replace, not a
/// merge) and return the updated record. `None` when the id does not exist.
pub async fn update(session: &Session, id: i64, input: &ItemCreate) -> Result<Option<Item>> {
    let row = session
        .query_opt(
            "UPDATE items SET name = $2, description = $3 WHERE id = $1
             RETURNING id, name, description",
            &[&id, &input.name, &input.description],
        )
        .await
        .context("Failed to update item")?;

    match row {
        Some(row) => {
            tracing::debug!("Updated item with id: {}", id);
            Ok(Some(item_from_row(&row)?))
        }
        None => Ok(None),
    }
}

/// Remove an item permanently, returning its last state before removal.
/// `None` when the id does not exist.
pub async fn delete(session: &Session, id: i64) -> Result<Option<Item>> {
    let row = session
        .query_opt(
            "DELETE FROM items WHERE id = $1 RETURNING id, name, description",
            &[&id],
        )
        .await
        .context("Failed to delete item")?;

    match row {
        Some(row) => {
            tracing::debug!("Deleted item with id: {}", id);
            Ok(Some(item_from_row(&row)?))
        }
        None => Ok(None),
    }
}
