#[cfg(test)]
mod integration_test;

use std::sync::Arc;

use dao_impl_sqlite::weekly_booking::WeeklyBookingDaoImpl;
use service::{config::ConfigService as _, weekly_booking::WeeklyBookingService as _};
use service_impl::{
    clock::ClockServiceImpl, config::ConfigServiceImpl,
    weekly_booking::WeeklyBookingServiceImpl,
};
use sqlx::SqlitePool;
#[cfg(feature = "json_logging")]
use tracing_subscriber::fmt::format::FmtSpan;

type WeeklyBookingDao = WeeklyBookingDaoImpl;
type WeeklyBookingService<ClockService> =
    WeeklyBookingServiceImpl<WeeklyBookingDao, ClockService>;

pub struct RestStateImpl<ClockService = ClockServiceImpl>
where
    ClockService: service::clock::ClockService + Send + Sync + 'static,
{
    weekly_booking_service: Arc<WeeklyBookingService<ClockService>>,
}
impl<ClockService> Clone for RestStateImpl<ClockService>
where
    ClockService: service::clock::ClockService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            weekly_booking_service: self.weekly_booking_service.clone(),
        }
    }
}
impl<ClockService> rest::RestStateDef for RestStateImpl<ClockService>
where
    ClockService: service::clock::ClockService + Send + Sync + 'static,
{
    type WeeklyBookingService = WeeklyBookingService<ClockService>;

    fn backend_version(&self) -> Arc<str> {
        Arc::from(env!("CARGO_PKG_VERSION"))
    }

    fn weekly_booking_service(&self) -> Arc<Self::WeeklyBookingService> {
        self.weekly_booking_service.clone()
    }
}
impl<ClockService> RestStateImpl<ClockService>
where
    ClockService: service::clock::ClockService + Send + Sync + 'static,
{
    pub fn new(pool: Arc<sqlx::Pool<sqlx::Sqlite>>, clock_service: Arc<ClockService>) -> Self {
        let weekly_booking_dao = Arc::new(WeeklyBookingDao::new(pool));
        let weekly_booking_service = Arc::new(WeeklyBookingServiceImpl::new(
            weekly_booking_dao,
            clock_service,
        ));
        Self {
            weekly_booking_service,
        }
    }
}

#[tokio::main]
async fn main() {
    let version = env!("CARGO_PKG_VERSION");

    #[cfg(feature = "local_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .pretty()
        .with_file(true)
        .finish();

    #[cfg(feature = "json_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_span_list(true)
        .with_file(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::info!("Stuga backend version: {}", version);
    dotenvy::dotenv().ok();
    let config = ConfigServiceImpl
        .get_config()
        .await
        .expect("Could not read configuration");

    let pool = Arc::new(
        SqlitePool::connect(&config.database_url)
            .await
            .expect("Could not connect to database"),
    );

    sqlx::migrate!("../migrations/sqlite")
        .run(pool.as_ref())
        .await
        .expect("Failed to run migrations");

    let clock_service = Arc::new(ClockServiceImpl::new(&config.timezone));
    let rest_state = RestStateImpl::new(pool, clock_service);

    if let Err(err) = rest_state.weekly_booking_service.load_week(None).await {
        tracing::warn!("Initial load of the current week failed: {}", err);
    }

    rest::start_server(rest_state, &config.server_address)
        .await
        .expect("Server stopped with an error");
}
