pub mod weekly_booking;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use service::clock::ClockService;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use time::{
    macros::{date, time},
    Date, PrimitiveDateTime, Time,
};
use tower::ServiceExt;

use crate::RestStateImpl;

/// Sunday 2024-06-09, noon.
pub fn today() -> Date {
    date!(2024 - 06 - 09)
}

pub struct FixedClock;
impl ClockService for FixedClock {
    fn time_now(&self) -> Time {
        time!(12:00)
    }
    fn date_now(&self) -> Date {
        today()
    }
    fn date_time_now(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date_now(), self.time_now())
    }
}

pub struct TestSetup {
    pub pool: Arc<SqlitePool>,
    pub rest_state: RestStateImpl<FixedClock>,
}
impl TestSetup {
    pub async fn new() -> Self {
        let pool = Arc::new(
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect("sqlite::memory:")
                .await
                .expect("Could not connect to database"),
        );
        sqlx::migrate!("../migrations/sqlite")
            .run(pool.as_ref())
            .await
            .expect("Failed to run migrations");
        let rest_state = RestStateImpl::new(pool.clone(), Arc::new(FixedClock));
        Self { pool, rest_state }
    }

    /// A second manager on the same database, as after a restart.
    pub fn restart(&self) -> RestStateImpl<FixedClock> {
        RestStateImpl::new(self.pool.clone(), Arc::new(FixedClock))
    }

    pub fn router(&self) -> Router {
        rest::build_router(self.rest_state.clone())
    }
}

pub async fn send(router: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn send_json<T: serde::de::DeserializeOwned>(
    router: &Router,
    method: &str,
    uri: &str,
) -> T {
    let (status, body) = send(router, method, uri).await;
    assert_eq!(
        status,
        StatusCode::OK,
        "{} {} answered {}",
        method,
        uri,
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).unwrap()
}
