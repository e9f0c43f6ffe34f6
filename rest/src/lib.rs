use std::sync::Arc;

mod weekly_booking;

use axum::{
    body::Body,
    extract::State,
    response::Response,
    routing::get,
    Router,
};
use thiserror::Error;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Service error")]
    ServiceError(#[from] service::ServiceError),

    #[error("Unknown day {0}, expected one of monday to sunday")]
    UnknownDay(Arc<str>),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] stuga_utils::StugaDateUtilsError),
}

fn error_handler(result: Result<Response, RestError>) -> Response {
    match result {
        Ok(response) => response,
        Err(err @ RestError::UnknownDay(_)) => Response::builder()
            .status(400)
            .body(Body::new(err.to_string()))
            .unwrap(),
        Err(err @ RestError::InvalidDate(_)) => Response::builder()
            .status(400)
            .body(Body::new(err.to_string()))
            .unwrap(),
        Err(RestError::ServiceError(err @ service::ServiceError::OperationInProgress)) => {
            Response::builder()
                .status(409)
                .body(Body::new(err.to_string()))
                .unwrap()
        }
        Err(RestError::ServiceError(service::ServiceError::DatabaseQueryError(e))) => {
            Response::builder()
                .status(500)
                .body(Body::new(e.to_string()))
                .unwrap()
        }
    }
}

pub trait RestStateDef: Clone + Send + Sync + 'static {
    type WeeklyBookingService: service::weekly_booking::WeeklyBookingService + Send + Sync + 'static;

    fn backend_version(&self) -> Arc<str>;
    fn weekly_booking_service(&self) -> Arc<Self::WeeklyBookingService>;
}

#[instrument(skip(rest_state))]
async fn version<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    Response::builder()
        .status(200)
        .body(Body::new(rest_state.backend_version().to_string()))
        .unwrap()
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Stuga booking"),
    nest(
        (path = "/booking", api = weekly_booking::WeeklyBookingApiDoc),
    ),
)]
pub struct ApiDoc;

pub fn build_router<RestState: RestStateDef>(rest_state: RestState) -> Router {
    Router::new()
        .route("/version", get(version::<RestState>))
        .nest("/booking", weekly_booking::generate_route())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(rest_state)
}

pub async fn start_server<RestState: RestStateDef>(
    rest_state: RestState,
    address: &str,
) -> Result<(), std::io::Error> {
    let app = build_router(rest_state);
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", address);
    axum::serve(listener, app).await
}
