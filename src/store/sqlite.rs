//! SQLite implementation of the persistence adapter.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use super::schema;

/// A decoded result row: column name → JSON value.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

/// Failure from the embedded store, carrying the underlying driver message.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    /// Message from the underlying SQLite driver.
    pub message: String,
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// A positional statement parameter.
///
/// Parameters are always bound to `?` placeholders, never interpolated into
/// the statement text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    /// SQL NULL.
    Null,
    /// 64-bit integer (also carries booleans as 0/1).
    Int(i64),
    /// Double-precision float.
    Real(f64),
    /// UTF-8 text.
    Text(String),
}

impl SqlArg {
    /// Converts a JSON field into a bindable parameter.
    ///
    /// Booleans become 0/1 integers the way SQLite stores them; absent and
    /// null fields bind as NULL; arrays and objects fall back to their JSON
    /// text rendering.
    #[must_use]
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        use serde_json::Value;
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(Value::Bool(b)) => Self::Int(i64::from(*b)),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Real))
                .unwrap_or(Self::Null),
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(other) => Self::Text(other.to_string()),
        }
    }
}

/// Outcome of a write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Number of rows changed by the statement (0 when the target id did
    /// not exist).
    pub rows_affected: u64,
    /// Rowid generated by the most recent INSERT on this connection.
    pub inserted_id: i64,
}

/// Shared handle to the embedded SQLite store.
///
/// Opened once at process start and cloned into every request handler. The
/// pool is capped at a single connection: the embedded store serializes
/// writes internally and needs no pooling; the pool only provides async
/// access to that one connection.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if missing) the database file at `path`, enables
    /// foreign-key enforcement, and bootstraps the schema.
    ///
    /// Returning `Ok` is the readiness signal: the caller may start
    /// accepting requests as soon as this resolves.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be created or opened,
    /// or if schema bootstrap fails.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError {
                message: format!("failed to create data directory: {e}"),
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let store = Self::connect(options).await?;
        tracing::info!(path = %path.display(), "connected to the election database");
        Ok(store)
    }

    /// Opens a fresh in-memory store with the full schema, for tests and
    /// ephemeral use.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if schema bootstrap fails.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        // The single connection must never be recycled: an in-memory
        // database lives and dies with it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        for statement in schema::BOOTSTRAP {
            sqlx::query(statement).execute(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Runs a read statement and returns every matching row.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] with the driver message on failure.
    pub async fn query_all(&self, sql: &str, args: &[SqlArg]) -> Result<Vec<JsonRow>, StoreError> {
        let rows = bind_args(sql, args).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_json).collect()
    }

    /// Runs a read statement and returns the first matching row, if any.
    ///
    /// An absent row is not an error; callers decide what "not found"
    /// means.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] with the driver message on failure.
    pub async fn query_one(
        &self,
        sql: &str,
        args: &[SqlArg],
    ) -> Result<Option<JsonRow>, StoreError> {
        let row = bind_args(sql, args).fetch_optional(&self.pool).await?;
        row.as_ref().map(row_to_json).transpose()
    }

    /// Runs a write statement (INSERT/UPDATE/DELETE).
    ///
    /// Each call is its own implicit transaction.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] with the driver message on failure,
    /// including foreign-key violations.
    pub async fn execute(&self, sql: &str, args: &[SqlArg]) -> Result<ExecResult, StoreError> {
        let result = bind_args(sql, args).execute(&self.pool).await?;
        Ok(ExecResult {
            rows_affected: result.rows_affected(),
            inserted_id: result.last_insert_rowid(),
        })
    }
}

/// Binds positional parameters onto a prepared statement.
fn bind_args<'q>(
    sql: &'q str,
    args: &'q [SqlArg],
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    let mut query = sqlx::query(sql);
    for arg in args {
        query = match arg {
            SqlArg::Null => query.bind(None::<i64>),
            SqlArg::Int(v) => query.bind(*v),
            SqlArg::Real(v) => query.bind(*v),
            SqlArg::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

/// Decodes a row into a JSON object using SQLite's per-value type.
///
/// SQLite is dynamically typed, so the decode target follows the stored
/// value rather than the column declaration. Anything that is not NULL,
/// INTEGER, or REAL decodes as text.
fn row_to_json(row: &SqliteRow) -> Result<JsonRow, StoreError> {
    use serde_json::Value;

    let mut object = JsonRow::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(idx)?),
                "REAL" => Value::from(row.try_get::<f64, _>(idx)?),
                _ => Value::from(row.try_get::<String, _>(idx)?),
            }
        };
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn store() -> Store {
        let Ok(store) = Store::open_in_memory().await else {
            panic!("in-memory store should open");
        };
        store
    }

    #[tokio::test]
    async fn insert_returns_generated_id() {
        let store = store().await;

        let Ok(result) = store
            .execute(
                "INSERT INTO parties (name) VALUES (?)",
                &[SqlArg::Text("Build Party".into())],
            )
            .await
        else {
            panic!("insert should succeed");
        };

        assert_eq!(result.rows_affected, 1);
        assert_eq!(result.inserted_id, 1);
    }

    #[tokio::test]
    async fn query_one_absent_row_is_none() {
        let store = store().await;

        let Ok(row) = store
            .query_one("SELECT * FROM parties WHERE id = ?", &[SqlArg::Int(42)])
            .await
        else {
            panic!("read should succeed");
        };

        assert!(row.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_id_changes_nothing() {
        let store = store().await;

        let Ok(result) = store
            .execute(
                "UPDATE voters SET email = ? WHERE id = ?",
                &[SqlArg::Text("x@y.z".into()), SqlArg::Int(99)],
            )
            .await
        else {
            panic!("update should succeed");
        };

        assert_eq!(result.rows_affected, 0);
    }

    #[tokio::test]
    async fn quoted_text_binds_without_injection() {
        let store = store().await;

        let name = "Robert'); DROP TABLE parties;--";
        let Ok(result) = store
            .execute(
                "INSERT INTO parties (name) VALUES (?)",
                &[SqlArg::Text(name.into())],
            )
            .await
        else {
            panic!("insert should succeed");
        };

        let Ok(Some(row)) = store
            .query_one(
                "SELECT * FROM parties WHERE id = ?",
                &[SqlArg::Int(result.inserted_id)],
            )
            .await
        else {
            panic!("row should exist");
        };

        assert_eq!(
            row.get("name").and_then(|v| v.as_str()),
            Some(name),
            "bound text must round-trip verbatim"
        );
    }

    #[tokio::test]
    async fn null_and_integer_columns_decode() {
        let store = store().await;

        let Ok(result) = store
            .execute(
                "INSERT INTO candidates (first_name, last_name, industry_connected) \
                 VALUES (?, ?, ?)",
                &[
                    SqlArg::Text("Ada".into()),
                    SqlArg::Text("Lovelace".into()),
                    SqlArg::from_json(Some(&serde_json::Value::Bool(true))),
                ],
            )
            .await
        else {
            panic!("insert should succeed");
        };

        let Ok(Some(row)) = store
            .query_one(
                "SELECT * FROM candidates WHERE id = ?",
                &[SqlArg::Int(result.inserted_id)],
            )
            .await
        else {
            panic!("row should exist");
        };

        assert_eq!(row.get("industry_connected"), Some(&serde_json::json!(1)));
        assert_eq!(row.get("party_id"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn from_json_maps_primitive_types() {
        use serde_json::json;

        assert_eq!(SqlArg::from_json(None), SqlArg::Null);
        assert_eq!(SqlArg::from_json(Some(&json!(null))), SqlArg::Null);
        assert_eq!(SqlArg::from_json(Some(&json!(false))), SqlArg::Int(0));
        assert_eq!(SqlArg::from_json(Some(&json!(7))), SqlArg::Int(7));
        assert_eq!(SqlArg::from_json(Some(&json!(1.5))), SqlArg::Real(1.5));
        assert_eq!(
            SqlArg::from_json(Some(&json!("hi"))),
            SqlArg::Text("hi".into())
        );
    }
}
