use async_trait::async_trait;
use log::trace;

use super::{ClimateAccess, DateWindow, Precipitation, TemperatureObservation, TemperatureStats};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Database file not found: {0}")]
    MissingDatabase(String),
    #[error("Unexpected database schema: {0}")]
    Schema(String),
}

#[async_trait]
pub trait ClimateData: Sync + Send {
    /// Daily precipitation within the window, null where none was recorded
    async fn precipitation(&self, window: &DateWindow) -> Result<Vec<Precipitation>, Error>;
    /// Every station code, in table order
    async fn stations(&self) -> Result<Vec<String>, Error>;
    async fn temperature_observations(
        &self,
        station_id: String,
        window: &DateWindow,
    ) -> Result<Vec<TemperatureObservation>, Error>;
    /// Min/max/mean of all temperature observations within the window
    async fn temperature_stats(&self, window: &DateWindow) -> Result<TemperatureStats, Error>;
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn precipitation(&self, window: &DateWindow) -> Result<Vec<Precipitation>, Error> {
        let sql = format!(
            "SELECT date, prcp AS precipitation FROM measurement WHERE {}",
            window.date_clause()
        );
        trace!("precipitation query: {}", sql);

        let mut query = sqlx::query_as::<_, Precipitation>(&sql).bind(window.start.as_str());
        if let Some(end) = &window.end {
            query = query.bind(end.as_str());
        }

        let mut conn = self.session().await?;
        Ok(query.fetch_all(&mut *conn).await?)
    }

    async fn stations(&self) -> Result<Vec<String>, Error> {
        let mut conn = self.session().await?;
        let stations = sqlx::query_scalar::<_, String>("SELECT station FROM station")
            .fetch_all(&mut *conn)
            .await?;
        Ok(stations)
    }

    async fn temperature_observations(
        &self,
        station_id: String,
        window: &DateWindow,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        // tobs may be stored as INTEGER or REAL depending on the row
        let sql = format!(
            "SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement WHERE station = ? AND {}",
            window.date_clause()
        );
        trace!("temperature observation query: {}", sql);

        let mut query = sqlx::query_as::<_, TemperatureObservation>(&sql)
            .bind(station_id)
            .bind(window.start.as_str());
        if let Some(end) = &window.end {
            query = query.bind(end.as_str());
        }

        let mut conn = self.session().await?;
        Ok(query.fetch_all(&mut *conn).await?)
    }

    async fn temperature_stats(&self, window: &DateWindow) -> Result<TemperatureStats, Error> {
        // An aggregate without GROUP BY always yields exactly one row, all NULL when nothing matched
        let sql = format!(
            r#"
            SELECT
                CAST(MIN(tobs) AS REAL) AS minimum,
                CAST(MAX(tobs) AS REAL) AS maximum,
                AVG(tobs) AS average
            FROM measurement
            WHERE {}
            "#,
            window.date_clause()
        );
        trace!("temperature stats query: {}", sql);

        let mut query = sqlx::query_as::<_, TemperatureStats>(&sql).bind(window.start.as_str());
        if let Some(end) = &window.end {
            query = query.bind(end.as_str());
        }

        let mut conn = self.session().await?;
        Ok(query.fetch_one(&mut *conn).await?)
    }
}
