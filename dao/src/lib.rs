use thiserror::Error;

pub mod weekly_booking;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("Entity not found: {0}")]
    EntityNotFound(i64),

    #[error("Could not parse stored date time: {0}")]
    DateTimeParseError(#[from] time::error::Parse),

    #[error("Could not format date time: {0}")]
    DateTimeFormatError(#[from] time::error::Format),

    #[error("Invalid stored date: {0}")]
    InvalidDate(#[from] stuga_utils::StugaDateUtilsError),
}
