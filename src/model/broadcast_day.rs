//! Calendar day of a broadcast in the broadcast service's time zone

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolve an IANA time zone name; `None` means UTC
pub fn parse_time_zone(name: Option<&str>) -> Result<Tz> {
    match name {
        None => Ok(Tz::UTC),
        Some(name) => name
            .trim()
            .parse::<Tz>()
            .map_err(|_| Error::UnknownTimeZone(name.to_string())),
    }
}

/// Year, 1-based month and 1-based day of a broadcast, in a fixed time zone.
///
/// Days are only comparable within the same zone. Every value names a real
/// calendar date; deserialization rejects the ones that do not.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
#[serde(into = "DayFields", try_from = "DayFields")]
pub struct BroadcastDay {
    date: NaiveDate,
    time_zone: Tz,
}

/// JSON shape of a [`BroadcastDay`]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayFields {
    year: i32,
    month: u32,
    day: u32,
    #[serde(with = "time_zone_name")]
    time_zone: Tz,
}

impl From<BroadcastDay> for DayFields {
    fn from(day: BroadcastDay) -> Self {
        Self { year: day.year(), month: day.month(), day: day.day(), time_zone: day.time_zone }
    }
}

impl TryFrom<DayFields> for BroadcastDay {
    type Error = Error;

    fn try_from(fields: DayFields) -> Result<Self> {
        Self::from_ymd(fields.year, fields.month, fields.day, fields.time_zone)
    }
}

impl BroadcastDay {
    pub fn new(year: i32, month: u32, day: u32, time_zone: Option<&str>) -> Result<Self> {
        Self::from_ymd(year, month, day, parse_time_zone(time_zone)?)
    }

    /// The local calendar day of `instant` in `time_zone` (UTC when absent)
    pub fn from_instant(instant: DateTime<Utc>, time_zone: Option<&str>) -> Result<Self> {
        let time_zone = parse_time_zone(time_zone)?;
        Ok(Self::from_local_date(instant.with_timezone(&time_zone).date_naive(), time_zone))
    }

    /// Parse `YYYY-MM-DD`
    pub fn parse(value: &str, time_zone: Option<&str>) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|e| Error::InvalidDate(format!("{}: {}", value, e)))?;
        Ok(Self::from_local_date(date, parse_time_zone(time_zone)?))
    }

    /// First and last second of the day (`00:00:00` and `23:59:59` local) as instants
    pub fn to_instant_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let date = self.date();
        let midnight = date.and_time(NaiveTime::default());
        let start = self.resolve(midnight);
        let next_midnight = midnight.checked_add_signed(Duration::days(1)).unwrap_or(NaiveDateTime::MAX);
        let end = self.resolve(next_midnight) - Duration::seconds(1);
        (start, end)
    }

    pub fn to_canonical_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// The day before, or `None` at the start of the supported calendar
    pub fn previous(&self) -> Option<Self> {
        Some(Self::from_local_date(self.date.pred_opt()?, self.time_zone))
    }

    /// The day after, or `None` at the end of the supported calendar
    pub fn next(&self) -> Option<Self> {
        Some(Self::from_local_date(self.date.succ_opt()?, self.time_zone))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    fn from_ymd(year: i32, month: u32, day: u32, time_zone: Tz) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))?;
        Ok(Self::from_local_date(date, time_zone))
    }

    fn from_local_date(date: NaiveDate, time_zone: Tz) -> Self {
        Self { date, time_zone }
    }

    /// Map a local wall-clock time to an instant, skipping forward over DST gaps
    fn resolve(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let mut candidate = local;
        for _ in 0..=24 * 4 {
            match self.time_zone.from_local_datetime(&candidate) {
                LocalResult::Single(instant) => return instant.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
                LocalResult::None => candidate += Duration::minutes(15),
            }
        }
        local.and_utc()
    }
}

impl PartialEq for BroadcastDay {
    fn eq(&self, other: &Self) -> bool {
        debug_assert_eq!(self.time_zone, other.time_zone, "comparing broadcast days across time zones");
        self.time_zone == other.time_zone && self.date == other.date
    }
}

impl PartialOrd for BroadcastDay {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.time_zone != other.time_zone {
            return None;
        }
        Some(self.date.cmp(&other.date))
    }
}

impl fmt::Display for BroadcastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

mod time_zone_name {
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time_zone: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(time_zone.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tz, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse::<Tz>().map_err(serde::de::Error::custom)
    }
}
