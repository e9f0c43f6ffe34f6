use async_trait::async_trait;
use mockall::automock;
use time::{Date, PrimitiveDateTime};

use crate::DaoError;

/// A booking row as the store holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklyBookingEntity {
    pub id: i64,
    pub week_start: Date,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub created_at: PrimitiveDateTime,
    pub updated_at: PrimitiveDateTime,
}

/// Fields written on insert and update. `created_at` is only sent on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklyBookingPayload {
    pub week_start: Date,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub created_at: Option<PrimitiveDateTime>,
    pub updated_at: PrimitiveDateTime,
}

#[automock]
#[async_trait]
pub trait WeeklyBookingDao {
    /// `Ok(None)` means no row exists for this week yet.
    async fn find_by_week_start(
        &self,
        week_start: Date,
    ) -> Result<Option<WeeklyBookingEntity>, DaoError>;
    async fn create(
        &self,
        payload: &WeeklyBookingPayload,
        process: &str,
    ) -> Result<WeeklyBookingEntity, DaoError>;
    async fn update(
        &self,
        id: i64,
        payload: &WeeklyBookingPayload,
        process: &str,
    ) -> Result<WeeklyBookingEntity, DaoError>;
}
