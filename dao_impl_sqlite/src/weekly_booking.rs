use std::sync::Arc;

use crate::ResultDbErrorExt;
use async_trait::async_trait;
use dao::{
    weekly_booking::{WeeklyBookingDao, WeeklyBookingEntity, WeeklyBookingPayload},
    DaoError,
};
use sqlx::{query_as, FromRow};
use stuga_utils::{format_iso_date, parse_iso_date};
use time::{format_description::well_known::Iso8601, Date, PrimitiveDateTime};

#[derive(Debug, FromRow)]
struct WeeklyBookingDb {
    id: i64,
    week_start: String,
    monday: bool,
    tuesday: bool,
    wednesday: bool,
    thursday: bool,
    friday: bool,
    saturday: bool,
    sunday: bool,
    created_at: String,
    updated_at: String,
}
impl TryFrom<&WeeklyBookingDb> for WeeklyBookingEntity {
    type Error = DaoError;
    fn try_from(booking: &WeeklyBookingDb) -> Result<Self, Self::Error> {
        Ok(Self {
            id: booking.id,
            week_start: parse_iso_date(&booking.week_start)?,
            monday: booking.monday,
            tuesday: booking.tuesday,
            wednesday: booking.wednesday,
            thursday: booking.thursday,
            friday: booking.friday,
            saturday: booking.saturday,
            sunday: booking.sunday,
            created_at: PrimitiveDateTime::parse(&booking.created_at, &Iso8601::DATE_TIME)?,
            updated_at: PrimitiveDateTime::parse(&booking.updated_at, &Iso8601::DATE_TIME)?,
        })
    }
}

const SELECT_COLUMNS: &str = "id, week_start, monday, tuesday, wednesday, thursday, friday, saturday, sunday, created_at, updated_at";

pub struct WeeklyBookingDaoImpl {
    pub pool: Arc<sqlx::SqlitePool>,
}
impl WeeklyBookingDaoImpl {
    pub fn new(pool: Arc<sqlx::SqlitePool>) -> Self {
        Self { pool }
    }
}

fn format_week_start(week_start: Date) -> Result<String, DaoError> {
    Ok(format_iso_date(week_start)?)
}

#[async_trait]
impl WeeklyBookingDao for WeeklyBookingDaoImpl {
    async fn find_by_week_start(
        &self,
        week_start: Date,
    ) -> Result<Option<WeeklyBookingEntity>, DaoError> {
        let week_start = format_week_start(week_start)?;
        let sql = format!("SELECT {SELECT_COLUMNS} FROM weekly_booking WHERE week_start = ?");
        query_as::<_, WeeklyBookingDb>(&sql)
            .bind(week_start)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_db_error()?
            .as_ref()
            .map(WeeklyBookingEntity::try_from)
            .transpose()
    }

    async fn create(
        &self,
        payload: &WeeklyBookingPayload,
        process: &str,
    ) -> Result<WeeklyBookingEntity, DaoError> {
        let week_start = format_week_start(payload.week_start)?;
        let updated_at = payload.updated_at.format(&Iso8601::DATE_TIME)?;
        let created_at = match payload.created_at {
            Some(created_at) => created_at.format(&Iso8601::DATE_TIME)?,
            None => updated_at.clone(),
        };
        let sql = format!(
            "INSERT INTO weekly_booking (week_start, monday, tuesday, wednesday, thursday, friday, saturday, sunday, created_at, updated_at, update_process) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        );
        let row = query_as::<_, WeeklyBookingDb>(&sql)
            .bind(week_start)
            .bind(payload.monday)
            .bind(payload.tuesday)
            .bind(payload.wednesday)
            .bind(payload.thursday)
            .bind(payload.friday)
            .bind(payload.saturday)
            .bind(payload.sunday)
            .bind(created_at)
            .bind(updated_at)
            .bind(process)
            .fetch_one(self.pool.as_ref())
            .await
            .map_db_error()?;
        WeeklyBookingEntity::try_from(&row)
    }

    async fn update(
        &self,
        id: i64,
        payload: &WeeklyBookingPayload,
        process: &str,
    ) -> Result<WeeklyBookingEntity, DaoError> {
        let week_start = format_week_start(payload.week_start)?;
        let updated_at = payload.updated_at.format(&Iso8601::DATE_TIME)?;
        let sql = format!(
            "UPDATE weekly_booking SET week_start = ?, monday = ?, tuesday = ?, wednesday = ?, thursday = ?, friday = ?, saturday = ?, sunday = ?, updated_at = ?, update_process = ? \
             WHERE id = ? RETURNING {SELECT_COLUMNS}"
        );
        query_as::<_, WeeklyBookingDb>(&sql)
            .bind(week_start)
            .bind(payload.monday)
            .bind(payload.tuesday)
            .bind(payload.wednesday)
            .bind(payload.thursday)
            .bind(payload.friday)
            .bind(payload.saturday)
            .bind(payload.sunday)
            .bind(updated_at)
            .bind(process)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_db_error()?
            .as_ref()
            .map(WeeklyBookingEntity::try_from)
            .transpose()?
            .ok_or(DaoError::EntityNotFound(id))
    }
}
