use std::sync::Arc;

use async_trait::async_trait;
use dao::weekly_booking::{WeeklyBookingEntity, WeeklyBookingPayload};
use mockall::automock;
use stuga_utils::DayOfWeek;
use time::{Date, PrimitiveDateTime};

use crate::ServiceError;

/// The booking of one week. `id` is only set once the store has the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBooking {
    pub id: Option<i64>,
    pub week_start: Date,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub created_at: Option<PrimitiveDateTime>,
    pub updated_at: Option<PrimitiveDateTime>,
}

impl WeeklyBooking {
    /// Unsaved booking with no day reserved.
    pub fn new_for_week(week_start: Date) -> Self {
        Self {
            id: None,
            week_start,
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
            saturday: false,
            sunday: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn day_mut(&mut self, day: DayOfWeek) -> &mut bool {
        match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        }
    }

    pub fn is_booked(&self, day: DayOfWeek) -> bool {
        match day {
            DayOfWeek::Monday => self.monday,
            DayOfWeek::Tuesday => self.tuesday,
            DayOfWeek::Wednesday => self.wednesday,
            DayOfWeek::Thursday => self.thursday,
            DayOfWeek::Friday => self.friday,
            DayOfWeek::Saturday => self.saturday,
            DayOfWeek::Sunday => self.sunday,
        }
    }

    pub fn set_booked(&mut self, day: DayOfWeek, booked: bool) {
        *self.day_mut(day) = booked;
    }

    pub fn toggle(&mut self, day: DayOfWeek) {
        let flag = self.day_mut(day);
        *flag = !*flag;
    }

    /// Unbooks every day. Id, week and timestamps stay as they are.
    pub fn clear_days(&mut self) {
        for day in DayOfWeek::ALL {
            self.set_booked(day, false);
        }
    }

    pub fn selected_days(&self) -> Arc<[DayOfWeek]> {
        DayOfWeek::ALL
            .into_iter()
            .filter(|day| self.is_booked(*day))
            .collect()
    }

    pub fn to_payload(&self, now: PrimitiveDateTime, is_insert: bool) -> WeeklyBookingPayload {
        WeeklyBookingPayload {
            week_start: self.week_start,
            monday: self.monday,
            tuesday: self.tuesday,
            wednesday: self.wednesday,
            thursday: self.thursday,
            friday: self.friday,
            saturday: self.saturday,
            sunday: self.sunday,
            created_at: is_insert.then_some(now),
            updated_at: now,
        }
    }
}

impl From<&WeeklyBookingEntity> for WeeklyBooking {
    fn from(entity: &WeeklyBookingEntity) -> Self {
        Self {
            id: Some(entity.id),
            week_start: entity.week_start,
            monday: entity.monday,
            tuesday: entity.tuesday,
            wednesday: entity.wednesday,
            thursday: entity.thursday,
            friday: entity.friday,
            saturday: entity.saturday,
            sunday: entity.sunday,
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingState {
    pub current_week: WeeklyBooking,
    pub is_loading: bool,
    pub error: Option<Arc<str>>,
}

/// Holds the week currently shown and mediates all reads and writes of it.
///
/// `load_week` and `save_week` record failures in [`BookingState::error`] and
/// also return them. Only one of them may be pending at a time; a second call
/// fails with [`ServiceError::OperationInProgress`].
#[automock]
#[async_trait]
pub trait WeeklyBookingService {
    /// Monday of the week containing today.
    fn default_week_start(&self) -> Date;

    async fn load_week(&self, week_start: Option<Date>) -> Result<WeeklyBooking, ServiceError>;
    async fn save_week(&self) -> Result<WeeklyBooking, ServiceError>;

    fn toggle_day(&self, day: DayOfWeek) -> WeeklyBooking;
    fn reset_week(&self) -> WeeklyBooking;

    /// Swedish names of the booked days, Monday to Sunday.
    fn selected_days(&self) -> Arc<[&'static str]>;

    fn current_week(&self) -> WeeklyBooking;
    fn is_loading(&self) -> bool;
    fn error(&self) -> Option<Arc<str>>;
    fn state(&self) -> BookingState;
}
