use async_trait::async_trait;
use jiff::Timestamp;
use sqlx::{MySqlPool, Row};
use tracing::debug;
use waybill_core::error::{Result, StorageError};
use waybill_core::{IssuanceRecord, ReadRegistry, Registry, TrackingCode};

const SCHEMA: &str = include_str!("../ddl/mysql/issued_tracking_codes.sql");

/// MySQL implementation of the registry contract.
///
/// Uniqueness is enforced by the primary key on `tracking_code`. A plain
/// `INSERT` either commits the row or fails with a unique violation, which is
/// reported as a collision rather than an error. Rows are never updated or
/// deleted.
#[derive(Debug, Clone)]
pub struct MySqlRegistry {
    pool: MySqlPool,
}

impl MySqlRegistry {
    /// Creates a registry from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a registry by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `issued_tracking_codes` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn parse_created_at(millis: i64) -> Result<Timestamp> {
    Timestamp::from_millisecond(millis).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{}': {e}", millis))
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRegistry for MySqlRegistry {
    async fn get(&self, code: &TrackingCode) -> Result<Option<IssuanceRecord>> {
        let row = sqlx::query(
            r#"
            SELECT tracking_code, created_at
            FROM issued_tracking_codes
            WHERE tracking_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let stored: String = row.try_get("tracking_code").map_err(map_sqlx_error)?;
        let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

        let code = TrackingCode::parse(stored)
            .map_err(|e| StorageError::InvalidData(e.to_string()))?;

        Ok(Some(IssuanceRecord {
            code,
            created_at: parse_created_at(created_at)?,
        }))
    }

    async fn exists(&self, code: &TrackingCode) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM issued_tracking_codes
            WHERE tracking_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM issued_tracking_codes")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        u64::try_from(count)
            .map_err(|e| StorageError::InvalidData(format!("negative row count {count}: {e}")))
    }
}

#[async_trait]
impl Registry for MySqlRegistry {
    async fn register_if_absent(&self, record: &IssuanceRecord) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO issued_tracking_codes (tracking_code, created_at)
            VALUES (?, ?)
            "#,
        )
        .bind(record.code.as_str())
        .bind(record.created_at.as_millisecond())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err) => {
                debug!(code = %record.code, "tracking code already registered");
                Ok(false)
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}
