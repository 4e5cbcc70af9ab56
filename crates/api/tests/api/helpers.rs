use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use climate_api::{
    app, db::Error, AppState, ClimateData, DateWindow, Precipitation, TemperatureObservation,
    TemperatureStats,
};
use hyper::{header, Method};
use mockall::mock;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    ConnectOptions,
};
use std::{path::Path, sync::Arc};
use tower::ServiceExt;

mock! {
    pub ClimateAccess {}
    #[async_trait]
    impl ClimateData for ClimateAccess {
        async fn precipitation(&self, window: &DateWindow) -> Result<Vec<Precipitation>, Error>;
        async fn stations(&self) -> Result<Vec<String>, Error>;
        async fn temperature_observations(
            &self,
            station_id: String,
            window: &DateWindow,
        ) -> Result<Vec<TemperatureObservation>, Error>;
        async fn temperature_stats(&self, window: &DateWindow) -> Result<TemperatureStats, Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(climate_db: Arc<dyn ClimateData>) -> TestApp {
    let app_state = AppState { climate_db };
    TestApp {
        app: app(app_state),
    }
}

impl TestApp {
    /// Issue a GET and return the status and raw body
    pub async fn get(&self, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> serde_json::Value {
        let (status, content_type, body) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK, "unexpected status for {}", uri);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        serde_json::from_slice(&body).expect("response was not valid json")
    }
}

pub const STATIONS: &[(&str, &str)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
    ("USC00519281", "WAIHEE 837.5, HI US"),
];

/// (station, date, prcp, tobs), in insertion order
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519281", "2016-08-01", Some(0.1), 70.0),
    ("USC00519397", "2016-08-22", Some(0.5), 60.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00519281", "2016-08-23", None, 77.0),
    ("USC00519281", "2017-01-01", Some(0.2), 62.0),
    ("USC00513117", "2017-05-10", Some(1.1), 74.0),
    ("USC00519281", "2017-08-23", Some(0.0), 79.0),
];

const STATION_TABLE: &str = "CREATE TABLE station (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
)";

const MEASUREMENT_TABLE: &str = "CREATE TABLE measurement (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)";

/// Write a small copy of the Hawaii dataset to `dir` and return its path
pub async fn seed_database(dir: &Path) -> String {
    seed_with_tables(dir, true).await
}

/// Same as [`seed_database`] but the measurement table is left out
pub async fn seed_station_only_database(dir: &Path) -> String {
    seed_with_tables(dir, false).await
}

async fn seed_with_tables(dir: &Path, with_measurements: bool) -> String {
    let db_path = dir.join("hawaii.sqlite");
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete)
        .disable_statement_logging();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to create test database");

    sqlx::query(STATION_TABLE).execute(&pool).await.unwrap();
    for (i, (code, name)) in STATIONS.iter().enumerate() {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) VALUES (?, ?, ?, 21.3, -157.8, 3.0)",
        )
        .bind(i as i64 + 1)
        .bind(*code)
        .bind(*name)
        .execute(&pool)
        .await
        .unwrap();
    }

    if with_measurements {
        sqlx::query(MEASUREMENT_TABLE).execute(&pool).await.unwrap();
        for (i, (station, date, prcp, tobs)) in MEASUREMENTS.iter().enumerate() {
            sqlx::query(
                "INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(i as i64 + 1)
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await
            .unwrap();
        }
    }

    pool.close().await;
    db_path.to_str().unwrap().to_string()
}
