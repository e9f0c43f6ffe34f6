use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use service::{
    weekly_booking::{BookingState, WeeklyBooking, WeeklyBookingService},
    ServiceError,
};
use stuga_utils::DayOfWeek;
use time::Date;
use tracing::instrument;

const WEEKLY_BOOKING_SERVICE_PROCESS: &str = "weekly-booking-service";
const LOAD_FAILED_MESSAGE: &str = "Failed to load booking data";
const SAVE_FAILED_MESSAGE: &str = "Failed to save booking data";

pub struct WeeklyBookingServiceImpl<WeeklyBookingDao, ClockService>
where
    WeeklyBookingDao: dao::weekly_booking::WeeklyBookingDao + Send + Sync,
    ClockService: service::clock::ClockService + Send + Sync,
{
    pub weekly_booking_dao: Arc<WeeklyBookingDao>,
    pub clock_service: Arc<ClockService>,
    state: Mutex<BookingState>,
}
impl<WeeklyBookingDao, ClockService> WeeklyBookingServiceImpl<WeeklyBookingDao, ClockService>
where
    WeeklyBookingDao: dao::weekly_booking::WeeklyBookingDao + Send + Sync,
    ClockService: service::clock::ClockService + Send + Sync,
{
    pub fn new(weekly_booking_dao: Arc<WeeklyBookingDao>, clock_service: Arc<ClockService>) -> Self {
        let current_week =
            WeeklyBooking::new_for_week(stuga_utils::week_start(clock_service.date_now()));
        Self {
            weekly_booking_dao,
            clock_service,
            state: Mutex::new(BookingState {
                current_week,
                is_loading: false,
                error: None,
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, BookingState> {
        // The state is plain data, a panic elsewhere cannot leave it half written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_operation(&self) -> Result<PendingOperation<'_>, ServiceError> {
        let mut state = self.lock_state();
        if state.is_loading {
            return Err(ServiceError::OperationInProgress);
        }
        state.is_loading = true;
        state.error = None;
        Ok(PendingOperation { state: &self.state })
    }

    fn replace_current_week(&self, booking: &WeeklyBooking) {
        self.lock_state().current_week = booking.clone();
    }

    fn record_failure(&self, err: dao::DaoError, fallback: &str) -> ServiceError {
        let message = match &err {
            dao::DaoError::DatabaseQueryError(inner) => inner.to_string(),
            other => other.to_string(),
        };
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        tracing::error!("{}: {}", fallback, message);
        self.lock_state().error = Some(message.into());
        err.into()
    }
}

/// Marks a load or save as pending. Clears `is_loading` when dropped, also
/// when the owning future is cancelled.
struct PendingOperation<'a> {
    state: &'a Mutex<BookingState>,
}
impl Drop for PendingOperation<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_loading = false;
    }
}

#[async_trait]
impl<WeeklyBookingDao, ClockService> WeeklyBookingService
    for WeeklyBookingServiceImpl<WeeklyBookingDao, ClockService>
where
    WeeklyBookingDao: dao::weekly_booking::WeeklyBookingDao + Send + Sync,
    ClockService: service::clock::ClockService + Send + Sync,
{
    fn default_week_start(&self) -> Date {
        stuga_utils::week_start(self.clock_service.date_now())
    }

    #[instrument(skip(self))]
    async fn load_week(&self, week_start: Option<Date>) -> Result<WeeklyBooking, ServiceError> {
        let _pending = self.begin_operation()?;
        let target_week = match week_start {
            Some(week_start) => stuga_utils::week_start(week_start),
            None => self.default_week_start(),
        };

        match self
            .weekly_booking_dao
            .find_by_week_start(target_week)
            .await
        {
            Ok(Some(entity)) => {
                let booking = WeeklyBooking::from(&entity);
                self.replace_current_week(&booking);
                Ok(booking)
            }
            Ok(None) => {
                tracing::debug!("No booking stored for {}, starting a fresh week", target_week);
                let booking = WeeklyBooking::new_for_week(target_week);
                self.replace_current_week(&booking);
                Ok(booking)
            }
            Err(err) => Err(self.record_failure(err, LOAD_FAILED_MESSAGE)),
        }
    }

    #[instrument(skip(self))]
    async fn save_week(&self) -> Result<WeeklyBooking, ServiceError> {
        let _pending = self.begin_operation()?;
        let current_week = self.current_week();
        let now = self.clock_service.date_time_now();

        let result = match current_week.id {
            Some(id) => {
                self.weekly_booking_dao
                    .update(
                        id,
                        &current_week.to_payload(now, false),
                        WEEKLY_BOOKING_SERVICE_PROCESS,
                    )
                    .await
            }
            None => {
                self.weekly_booking_dao
                    .create(
                        &current_week.to_payload(now, true),
                        WEEKLY_BOOKING_SERVICE_PROCESS,
                    )
                    .await
            }
        };

        match result {
            Ok(entity) => {
                let booking = WeeklyBooking::from(&entity);
                self.replace_current_week(&booking);
                Ok(booking)
            }
            Err(err) => Err(self.record_failure(err, SAVE_FAILED_MESSAGE)),
        }
    }

    fn toggle_day(&self, day: DayOfWeek) -> WeeklyBooking {
        let mut state = self.lock_state();
        state.current_week.toggle(day);
        state.current_week.clone()
    }

    fn reset_week(&self) -> WeeklyBooking {
        let mut state = self.lock_state();
        state.current_week.clear_days();
        state.current_week.clone()
    }

    fn selected_days(&self) -> Arc<[&'static str]> {
        self.lock_state()
            .current_week
            .selected_days()
            .iter()
            .map(DayOfWeek::swedish_name)
            .collect()
    }

    fn current_week(&self) -> WeeklyBooking {
        self.lock_state().current_week.clone()
    }

    fn is_loading(&self) -> bool {
        self.lock_state().is_loading
    }

    fn error(&self) -> Option<Arc<str>> {
        self.lock_state().error.clone()
    }

    fn state(&self) -> BookingState {
        self.lock_state().clone()
    }
}
