/**
 * File Records
 *
 * One row per accepted upload. Rows are never updated or deleted, so a file
 * overwritten on disk keeps every record that named it.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// Row of the `files` table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FileRecord {
    pub id: i64,
    pub filename: String,
    /// Uploader, when known. Not a foreign key.
    pub user_id: Option<i64>,
}

/// Insert a record for an accepted upload
///
/// # Returns
/// The new record's ID
pub async fn record_file(
    pool: &SqlitePool,
    filename: &str,
    user_id: Option<i64>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO files (filename, user_id)
        VALUES (?, ?)
        "#,
    )
    .bind(filename)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All records for a filename, oldest first
pub async fn get_files_by_name(
    pool: &SqlitePool,
    filename: &str,
) -> Result<Vec<FileRecord>, sqlx::Error> {
    sqlx::query_as::<_, FileRecord>(
        r#"
        SELECT id, filename, user_id
        FROM files
        WHERE filename = ?
        ORDER BY id
        "#,
    )
    .bind(filename)
    .fetch_all(pool)
    .await
}
