use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::debug;

use crate::{CatechistError, Result};


pub mod models;

pub use models::{Document, DocumentMetadata, QaRecord};

pub type DbPool = Pool<Sqlite>;

/// Read-only handle to the question/answer corpus database.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    pool: DbPool,
}

impl CorpusStore {
    /// Open the corpus database. The file must already exist; the
    /// connection is read-only for the lifetime of the process.
    #[inline]
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(|e| {
                CatechistError::Database(format!(
                    "Failed to open corpus database {}: {e}",
                    path.as_ref().display()
                ))
            })?;

        Ok(Self { pool })
    }

    #[inline]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Load the full corpus, ordered by id. An empty result set is fatal;
    /// the pipeline must not serve queries without data.
    #[inline]
    pub async fn load_all(&self) -> Result<Vec<QaRecord>> {
        let records = sqlx::query_as::<_, QaRecord>(
            "SELECT id, question, answer FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatechistError::Database(format!("Failed to load corpus records: {e}")))?;

        if records.is_empty() {
            return Err(CatechistError::EmptyCorpus(
                "no records found in the questions table".to_string(),
            ));
        }

        debug!("Loaded {} corpus records", records.len());
        Ok(records)
    }

    /// Number of records in the corpus, without loading them.
    #[inline]
    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatechistError::Database(format!("Failed to count corpus records: {e}")))
    }
}
