use hawaii_climate_core::is_file;
use log::{debug, info};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};
use std::time::Duration;

use super::{Error, Measurement, Station, TableShape};

/// Read-only handle on the climate observation database.
///
/// Connections are handed out one per query and go back to the pool when the
/// guard is dropped, whether the query succeeded or not.
#[derive(Clone)]
pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    pub async fn new(db_path: &str) -> Result<Self, Error> {
        if !is_file(db_path) {
            return Err(Error::MissingDatabase(db_path.to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        let access = Self { pool };
        access.verify_schema().await?;
        info!("climate database opened read-only at: {}", db_path);

        Ok(access)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Acquire a connection scoped to a single query
    pub async fn session(&self) -> Result<PoolConnection<Sqlite>, Error> {
        Ok(self.pool.acquire().await?)
    }

    /// Confirm both tables exist with every column the record shapes read.
    pub async fn verify_schema(&self) -> Result<(), Error> {
        self.verify_table::<Station>().await?;
        self.verify_table::<Measurement>().await?;
        Ok(())
    }

    async fn verify_table<T: TableShape>(&self) -> Result<(), Error> {
        let mut conn = self.session().await?;
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(T::TABLE)
            .fetch_all(&mut *conn)
            .await?;

        if columns.is_empty() {
            return Err(Error::Schema(format!("table `{}` not found", T::TABLE)));
        }

        let missing: Vec<&str> = T::COLUMNS
            .iter()
            .copied()
            .filter(|expected| !columns.iter().any(|c| c.eq_ignore_ascii_case(expected)))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Schema(format!(
                "table `{}` is missing columns: {}",
                T::TABLE,
                missing.join(", ")
            )));
        }

        debug!("table `{}` matches expected shape", T::TABLE);
        Ok(())
    }
}
