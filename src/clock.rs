use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The day of the week at `now` as seen from the cafeteria's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today(Weekday);

impl Today {
    pub fn at(now: DateTime<Utc>, tz: Tz) -> Self {
        Self(now.with_timezone(&tz).weekday())
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self.0, Weekday::Sat | Weekday::Sun)
    }

    /// English weekday name, the way the menu page titles its day columns.
    pub const fn label(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}
