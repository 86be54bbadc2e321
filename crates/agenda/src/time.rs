use chrono::{DateTime, Local, TimeZone, Utc};

/// The two date layouts used on the event screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `DD/MM - HH:mm`
    DayMonthTime,
    /// `DD/MM/YYYY - HH:mm`
    Full,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayMonthTime => "%d/%m - %H:%M",
            DateFormat::Full => "%d/%m/%Y - %H:%M",
        }
    }
}

pub fn format_date_in<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz, format: DateFormat) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz).format(format.pattern()).to_string()
}

/// Format a timestamp in the local time zone.
pub fn format_date(date: &DateTime<Utc>, format: DateFormat) -> String {
    format_date_in(date, &Local, format)
}
