use std::fmt::{Display, Formatter};
use thiserror::*;

use time::{Date, Duration, Weekday, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum StugaDateUtilsError {
    #[error("Invalid date: {0}")]
    DateError(#[from] time::error::ComponentRange),

    #[error("Could not parse date: {0}")]
    ParseError(#[from] time::error::Parse),

    #[error("Could not format date: {0}")]
    FormatError(#[from] time::error::Format),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
            Weekday::Sunday => Self::Sunday,
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl DayOfWeek {
    /// All days of a booking week, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Stable identifier used in payloads and URLs.
    pub fn identifier(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier.to_ascii_lowercase().as_str() {
            "monday" => Some(DayOfWeek::Monday),
            "tuesday" => Some(DayOfWeek::Tuesday),
            "wednesday" => Some(DayOfWeek::Wednesday),
            "thursday" => Some(DayOfWeek::Thursday),
            "friday" => Some(DayOfWeek::Friday),
            "saturday" => Some(DayOfWeek::Saturday),
            "sunday" => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }

    /// Label shown to the people booking the cabin.
    pub fn swedish_name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Måndag",
            DayOfWeek::Tuesday => "Tisdag",
            DayOfWeek::Wednesday => "Onsdag",
            DayOfWeek::Thursday => "Torsdag",
            DayOfWeek::Friday => "Fredag",
            DayOfWeek::Saturday => "Lördag",
            DayOfWeek::Sunday => "Söndag",
        }
    }

    pub fn to_number(&self) -> u8 {
        match self {
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
            DayOfWeek::Sunday => 7,
        }
    }
}

/// Monday of the ISO week which contains `date`.
///
/// Weeks run Monday to Sunday, so a Sunday maps to the Monday six days
/// before it.
pub fn week_start(date: Date) -> Date {
    let days_since_monday = DayOfWeek::from(date.weekday()).to_number() - 1;
    date.saturating_sub(Duration::days(days_since_monday.into()))
}

pub fn parse_iso_date(value: &str) -> Result<Date, StugaDateUtilsError> {
    Ok(Date::parse(value, ISO_DATE_FORMAT)?)
}

pub fn format_iso_date(date: Date) -> Result<String, StugaDateUtilsError> {
    Ok(date.format(ISO_DATE_FORMAT)?)
}
