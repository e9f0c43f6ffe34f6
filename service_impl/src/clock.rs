use service::clock::ClockService;
use time::OffsetDateTime;
use time_tz::{timezones, OffsetDateTimeExt, Tz};

/// Wall clock of the cabin calendar.
///
/// Reports times in the configured timezone, or in UTC if the name is unknown.
pub struct ClockServiceImpl {
    timezone: Option<&'static Tz>,
}

impl ClockServiceImpl {
    pub fn new(timezone: &str) -> Self {
        let timezone = timezones::get_by_name(timezone);
        if timezone.is_none() {
            tracing::warn!("Unknown timezone, falling back to UTC");
        }
        Self { timezone }
    }

    pub fn utc() -> Self {
        Self { timezone: None }
    }

    fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        match self.timezone {
            Some(timezone) => now.to_timezone(timezone),
            None => now,
        }
    }
}

impl ClockService for ClockServiceImpl {
    fn time_now(&self) -> time::Time {
        self.now().time()
    }
    fn date_now(&self) -> time::Date {
        self.now().date()
    }
    fn date_time_now(&self) -> time::PrimitiveDateTime {
        let now = self.now();
        time::PrimitiveDateTime::new(now.date(), now.time())
    }
}
