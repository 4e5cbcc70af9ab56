use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Static description of a table this service reads from.
pub trait TableShape {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
}

/// Row of the `station` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl TableShape for Station {
    const TABLE: &'static str = "station";
    const COLUMNS: &'static [&'static str] =
        &["id", "station", "name", "latitude", "longitude", "elevation"];
}

/// Row of the `measurement` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    /// Stored as `YYYY-MM-DD` text
    pub date: String,
    /// Missing when no rainfall was recorded, never coerced to zero
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl TableShape for Measurement {
    const TABLE: &'static str = "measurement";
    const COLUMNS: &'static [&'static str] = &["id", "station", "date", "prcp", "tobs"];
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow, ToSchema)]
pub struct Precipitation {
    pub date: String,
    pub precipitation: Option<f64>,
}

/// Temperature observation for a single day
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow, ToSchema)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Aggregate temperature statistics over a date window.
/// All three values are null when no observation falls in the window.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, FromRow, ToSchema)]
pub struct TemperatureStats {
    #[serde(rename = "Minimum Temperature")]
    pub minimum: Option<f64>,
    #[serde(rename = "Maximum Temperature")]
    pub maximum: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub average: Option<f64>,
}
