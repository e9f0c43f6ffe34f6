pub mod clock;
pub mod config;
pub mod weekly_booking;
