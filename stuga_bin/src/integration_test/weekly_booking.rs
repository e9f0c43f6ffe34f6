use axum::http::StatusCode;
use rest::RestStateDef;
use rest_types::{BookingStateTO, WeeklyBookingTO};
use service::weekly_booking::WeeklyBookingService;
use time::macros::date;

use crate::integration_test::{send, send_json, TestSetup};

#[tokio::test]
async fn test_load_unknown_week_starts_fresh() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let booking: WeeklyBookingTO = send_json(&router, "POST", "/booking/load/2024-06-05").await;
    assert_eq!(booking.id, None);
    assert_eq!(booking.week_start, date!(2024 - 06 - 03));
    assert!(!booking.monday && !booking.friday && !booking.sunday);

    let state: BookingStateTO = send_json(&router, "GET", "/booking").await;
    assert_eq!(state.current_week, booking);
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert!(state.selected_days.is_empty());
}

#[tokio::test]
async fn test_toggle_save_and_update() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/load/2024-06-03").await;
    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/toggle/monday").await;
    let toggled: WeeklyBookingTO = send_json(&router, "POST", "/booking/toggle/friday").await;
    assert!(toggled.monday);
    assert!(toggled.friday);
    assert_eq!(toggled.id, None);

    let selected_days: Vec<String> = send_json(&router, "GET", "/booking/selected-days").await;
    assert_eq!(selected_days, vec!["Måndag", "Fredag"]);

    let inserted: WeeklyBookingTO = send_json(&router, "POST", "/booking/save").await;
    let id = inserted.id.expect("saved booking carries an id");
    assert!(inserted.created_at.is_some());
    assert!(inserted.monday && inserted.friday);

    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/toggle/monday").await;
    let updated: WeeklyBookingTO = send_json(&router, "POST", "/booking/save").await;
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.created_at, inserted.created_at);
    assert!(!updated.monday);
    assert!(updated.friday);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM weekly_booking")
        .fetch_one(test_setup.pool.as_ref())
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn test_saved_week_survives_restart() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/load/2024-06-03").await;
    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/toggle/saturday").await;
    let saved: WeeklyBookingTO = send_json(&router, "POST", "/booking/save").await;

    let restarted = test_setup.restart();
    let loaded = restarted
        .weekly_booking_service()
        .load_week(Some(date!(2024 - 06 - 09)))
        .await
        .unwrap();
    assert_eq!(loaded.id, saved.id);
    assert!(loaded.saturday);
    assert!(!loaded.sunday);
}

#[tokio::test]
async fn test_reset_clears_days_but_keeps_identity() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/load/2024-06-03").await;
    let _: WeeklyBookingTO = send_json(&router, "POST", "/booking/toggle/tuesday").await;
    let saved: WeeklyBookingTO = send_json(&router, "POST", "/booking/save").await;

    let reset: WeeklyBookingTO = send_json(&router, "POST", "/booking/reset").await;
    assert_eq!(reset.id, saved.id);
    assert_eq!(reset.week_start, saved.week_start);
    assert!(!reset.tuesday);

    let selected_days: Vec<String> = send_json(&router, "GET", "/booking/selected-days").await;
    assert!(selected_days.is_empty());

    let stored = test_setup
        .restart()
        .weekly_booking_service()
        .load_week(Some(date!(2024 - 06 - 03)))
        .await
        .unwrap();
    assert!(stored.tuesday);
}

#[tokio::test]
async fn test_default_week_start_on_sunday_is_previous_monday() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let week_start: String = send_json(&router, "GET", "/booking/default-week-start").await;
    assert_eq!(week_start, "2024-06-03");

    let booking: WeeklyBookingTO = send_json(&router, "POST", "/booking/load").await;
    assert_eq!(booking.week_start, date!(2024 - 06 - 03));
    assert_eq!(booking.id, None);
}

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let (status, _) = send(&router, "POST", "/booking/toggle/fredag").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&router, "POST", "/booking/load/2024-13-40").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let state: BookingStateTO = send_json(&router, "GET", "/booking").await;
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_version_and_openapi_are_served() {
    let test_setup = TestSetup::new().await;
    let router = test_setup.router();

    let (status, body) = send(&router, "GET", "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), env!("CARGO_PKG_VERSION"));

    let openapi: serde_json::Value = send_json(&router, "GET", "/api-docs/openapi.json").await;
    assert!(openapi["paths"]["/booking/save"]["post"].is_object());
}
