use axum::{
    body::Body,
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Router,
};
use rest_types::{BookingStateTO, WeeklyBookingTO};
use service::weekly_booking::WeeklyBookingService;
use stuga_utils::DayOfWeek;
use tracing::instrument;
use utoipa::OpenApi;

use crate::{error_handler, RestError, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new()
        .route("/", get(get_state::<RestState>))
        .route(
            "/default-week-start",
            get(get_default_week_start::<RestState>),
        )
        .route("/selected-days", get(get_selected_days::<RestState>))
        .route("/load", post(load_default_week::<RestState>))
        .route("/load/{week_start}", post(load_week::<RestState>))
        .route("/save", post(save_week::<RestState>))
        .route("/toggle/{day}", post(toggle_day::<RestState>))
        .route("/reset", post(reset_week::<RestState>))
}

fn json_response(status: u16, body: String) -> Response {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::new(body))
        .unwrap()
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    get,
    path = "",
    tags = ["Weekly Booking"],
    responses(
        (status = 200, description = "Week currently shown, loading flag, last error and booked day names", body = BookingStateTO),
    ),
)]
pub async fn get_state<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    let state = BookingStateTO::from(&rest_state.weekly_booking_service().state());
    json_response(200, serde_json::to_string(&state).unwrap())
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    get,
    path = "/default-week-start",
    tags = ["Weekly Booking"],
    responses(
        (status = 200, description = "Monday of the current week", body = String),
    ),
)]
pub async fn get_default_week_start<RestState: RestStateDef>(
    rest_state: State<RestState>,
) -> Response {
    error_handler(
        (async {
            let week_start = stuga_utils::format_iso_date(
                rest_state.weekly_booking_service().default_week_start(),
            )?;
            Ok(json_response(200, serde_json::to_string(&week_start).unwrap()))
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    get,
    path = "/selected-days",
    tags = ["Weekly Booking"],
    responses(
        (status = 200, description = "Swedish names of the booked days, Monday first", body = [String]),
    ),
)]
pub async fn get_selected_days<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    let selected_days = rest_state.weekly_booking_service().selected_days();
    json_response(200, serde_json::to_string(&selected_days.to_vec()).unwrap())
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    post,
    path = "/load",
    tags = ["Weekly Booking"],
    responses(
        (status = 200, description = "Booking of the current week, fresh if none is stored", body = WeeklyBookingTO),
        (status = 409, description = "Another load or save is still running"),
        (status = 500, description = "Store failure, recorded as the state error"),
    ),
)]
pub async fn load_default_week<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    error_handler(
        (async {
            let booking = rest_state.weekly_booking_service().load_week(None).await?;
            Ok(json_response(
                200,
                serde_json::to_string(&WeeklyBookingTO::from(booking)).unwrap(),
            ))
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    post,
    path = "/load/{week_start}",
    tags = ["Weekly Booking"],
    params(
        ("week_start", description = "Any date of the week, YYYY-MM-DD", example = "2024-06-03"),
    ),
    responses(
        (status = 200, description = "Booking of the requested week, fresh if none is stored", body = WeeklyBookingTO),
        (status = 400, description = "Malformed date"),
        (status = 409, description = "Another load or save is still running"),
        (status = 500, description = "Store failure, recorded as the state error"),
    ),
)]
pub async fn load_week<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(week_start): Path<String>,
) -> Response {
    error_handler(
        (async {
            let week_start = stuga_utils::parse_iso_date(&week_start)?;
            let booking = rest_state
                .weekly_booking_service()
                .load_week(Some(week_start))
                .await?;
            Ok(json_response(
                200,
                serde_json::to_string(&WeeklyBookingTO::from(booking)).unwrap(),
            ))
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    post,
    path = "/save",
    tags = ["Weekly Booking"],
    responses(
        (status = 200, description = "Booking as the store holds it after insert or update", body = WeeklyBookingTO),
        (status = 409, description = "Another load or save is still running"),
        (status = 500, description = "Store failure, recorded as the state error"),
    ),
)]
pub async fn save_week<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    error_handler(
        (async {
            let booking = rest_state.weekly_booking_service().save_week().await?;
            Ok(json_response(
                200,
                serde_json::to_string(&WeeklyBookingTO::from(booking)).unwrap(),
            ))
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    post,
    path = "/toggle/{day}",
    tags = ["Weekly Booking"],
    params(
        ("day", description = "Day identifier, monday to sunday", example = "friday"),
    ),
    responses(
        (status = 200, description = "Booking with the day flipped, not yet saved", body = WeeklyBookingTO),
        (status = 400, description = "Unknown day"),
    ),
)]
pub async fn toggle_day<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(day): Path<String>,
) -> Response {
    error_handler(
        (async {
            let day = DayOfWeek::from_identifier(&day)
                .ok_or_else(|| RestError::UnknownDay(day.as_str().into()))?;
            let booking = rest_state.weekly_booking_service().toggle_day(day);
            Ok(json_response(
                200,
                serde_json::to_string(&WeeklyBookingTO::from(booking)).unwrap(),
            ))
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
#[utoipa::path(
    post,
    path = "/reset",
    tags = ["Weekly Booking"],
    responses(
        (status = 200, description = "Booking with every day cleared, not yet saved", body = WeeklyBookingTO),
    ),
)]
pub async fn reset_week<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    let booking = rest_state.weekly_booking_service().reset_week();
    json_response(
        200,
        serde_json::to_string(&WeeklyBookingTO::from(booking)).unwrap(),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get_state,
        get_default_week_start,
        get_selected_days,
        load_default_week,
        load_week,
        save_week,
        toggle_day,
        reset_week,
    ),
    components(schemas(WeeklyBookingTO, BookingStateTO))
)]
pub struct WeeklyBookingApiDoc;
