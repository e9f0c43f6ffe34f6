use thiserror::Error;

pub mod clock;
pub mod config;
pub mod weekly_booking;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] dao::DaoError),

    #[error("Another load or save of the booking is still running")]
    OperationInProgress,
}
