use std::sync::Arc;

use serde::{Deserialize, Serialize};
#[cfg(feature = "service-impl")]
use service::weekly_booking::{BookingState, WeeklyBooking};
use time::{Date, PrimitiveDateTime};
use utoipa::ToSchema;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyBookingTO {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, example = "2024-06-03")]
    pub week_start: Date,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    #[serde(default)]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<PrimitiveDateTime>,
}
#[cfg(feature = "service-impl")]
impl From<&WeeklyBooking> for WeeklyBookingTO {
    fn from(booking: &WeeklyBooking) -> Self {
        Self {
            id: booking.id,
            week_start: booking.week_start,
            monday: booking.monday,
            tuesday: booking.tuesday,
            wednesday: booking.wednesday,
            thursday: booking.thursday,
            friday: booking.friday,
            saturday: booking.saturday,
            sunday: booking.sunday,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
#[cfg(feature = "service-impl")]
stuga_utils::derive_from_reference!(WeeklyBooking, WeeklyBookingTO);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingStateTO {
    pub current_week: WeeklyBookingTO,
    pub is_loading: bool,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub error: Option<Arc<str>>,
    /// Swedish names of the booked days, Monday first.
    #[schema(value_type = Vec<String>)]
    pub selected_days: Vec<Arc<str>>,
}
#[cfg(feature = "service-impl")]
impl From<&BookingState> for BookingStateTO {
    fn from(state: &BookingState) -> Self {
        Self {
            current_week: WeeklyBookingTO::from(&state.current_week),
            is_loading: state.is_loading,
            error: state.error.clone(),
            selected_days: state
                .current_week
                .selected_days()
                .iter()
                .map(|day| Arc::from(day.swedish_name()))
                .collect(),
        }
    }
}
