//! Enhanced `DateTime` wrapper with commonly used helpers.
//!
//! Such as: [`TimeX::day_start`], [`TimeX::day_after`], [`TimeX::day_ago`],
//! [`TimeX::date_format`] and more. Every helper returns a new value; the
//! receiver is never modified.

mod error;
mod format;

pub use error::Error;
pub use format::{how_long_ago, to_layout};

use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Timelike,
};
use std::fmt;
use std::ops::Deref;

pub type Result<T> = std::result::Result<T, Error>;

pub const ONE_MIN_SEC: i64 = 60;
pub const ONE_HOUR_SEC: i64 = 3600;
pub const ONE_DAY_SEC: i64 = 86400;
pub const ONE_WEEK_SEC: i64 = 7 * 86400;

/// Default strftime layout, e.g. "2024-03-01 15:04:05".
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Layouts tried by [`TimeX::from_string`] when none are given.
const GUESS_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y%m%d%H%M%S",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
];

/// A point in time plus its default display layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeX<Tz: TimeZone = Local> {
    time: DateTime<Tz>,
    layout: String,
}

impl TimeX<Local> {
    pub fn now() -> Self {
        TimeX::new(Local::now())
    }

    /// Now, in the local timezone.
    pub fn local() -> Self {
        Self::now()
    }

    /// From unix seconds, in the local timezone.
    pub fn from_unix(sec: i64) -> Result<Self> {
        let utc = DateTime::from_timestamp(sec, 0).ok_or(Error::OutOfRange(sec))?;
        Ok(TimeX::new(utc.with_timezone(&Local)))
    }

    /// Parse a datetime string. RFC 3339 input keeps its instant; other
    /// input is read as local wall-clock time using `layouts`, or a list of
    /// common layouts when `layouts` is empty.
    pub fn from_string(s: &str, layouts: &[&str]) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(TimeX::new(dt.with_timezone(&Local)));
        }

        let layouts = if layouts.is_empty() { GUESS_LAYOUTS } else { layouts };
        let naive = layouts
            .iter()
            .find_map(|layout| parse_naive(s, layout))
            .ok_or_else(|| Error::Parse(s.to_string()))?;

        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(TimeX::new)
            .ok_or_else(|| Error::Parse(s.to_string()))
    }
}

impl TimeX<chrono_tz::Tz> {
    /// Now, in the named IANA timezone. eg: UTC, PRC, Asia/Shanghai
    pub fn local_by_name(tz_name: &str) -> Result<Self> {
        let tz: chrono_tz::Tz = tz_name
            .parse()
            .map_err(|_| Error::UnknownTimezone(tz_name.to_string()))?;
        Ok(TimeX::new(chrono::Utc::now().with_timezone(&tz)))
    }
}

fn parse_naive(s: &str, layout: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, layout).ok().or_else(|| {
        NaiveDate::parse_from_str(s, layout)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    })
}

impl<Tz: TimeZone> TimeX<Tz> {
    /// Wrap a datetime with the default layout.
    pub fn new(time: DateTime<Tz>) -> Self {
        TimeX {
            time,
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }

    pub fn with_layout(mut self, layout: &str) -> Self {
        self.layout = layout.to_string();
        self
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn time(&self) -> &DateTime<Tz> {
        &self.time
    }

    pub fn into_inner(self) -> DateTime<Tz> {
        self.time
    }

    /// Get the day-ago time for the time
    pub fn yesterday(&self) -> Self {
        self.add_seconds(-ONE_DAY_SEC)
    }

    pub fn tomorrow(&self) -> Self {
        self.add_seconds(ONE_DAY_SEC)
    }

    pub fn day_ago(&self, days: i64) -> Self {
        self.add_seconds(-days * ONE_DAY_SEC)
    }

    pub fn add_day(&self, days: i64) -> Self {
        self.add_seconds(days * ONE_DAY_SEC)
    }

    /// Alias of [`TimeX::add_day`].
    pub fn day_after(&self, days: i64) -> Self {
        self.add_day(days)
    }

    pub fn add_hour(&self, hours: i64) -> Self {
        self.add_seconds(hours * ONE_HOUR_SEC)
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add_seconds(minutes * ONE_MIN_SEC)
    }

    /// Shift by a number of seconds. The result uses the default layout.
    /// A shift past the representable range keeps the original instant.
    pub fn add_seconds(&self, seconds: i64) -> Self {
        let time = TimeDelta::try_seconds(seconds)
            .and_then(|d| self.time.clone().checked_add_signed(d))
            .unwrap_or_else(|| self.time.clone());
        TimeX::new(time)
    }

    pub fn hour_start(&self) -> Self {
        let naive = self.midnight() + TimeDelta::hours(i64::from(self.time.hour()));
        self.at_wall_clock(naive)
    }

    /// Last nanosecond of the hour.
    pub fn hour_end(&self) -> Self {
        let naive = self.midnight() + TimeDelta::hours(i64::from(self.time.hour()) + 1)
            - TimeDelta::nanoseconds(1);
        self.at_wall_clock(naive)
    }

    pub fn day_start(&self) -> Self {
        self.at_wall_clock(self.midnight())
    }

    /// Last nanosecond of the day.
    pub fn day_end(&self) -> Self {
        let naive = self.midnight() + TimeDelta::days(1) - TimeDelta::nanoseconds(1);
        self.at_wall_clock(naive)
    }

    /// Same date with the given hour, minute and second. Out-of-range values
    /// carry over, e.g. hour 25 is 01:00 on the next day.
    pub fn change_hms(&self, hour: i64, min: i64, sec: i64) -> Self {
        let offset = hour * ONE_HOUR_SEC + min * ONE_MIN_SEC + sec;
        let naive = TimeDelta::try_seconds(offset)
            .and_then(|d| self.midnight().checked_add_signed(d))
            .unwrap_or_else(|| self.midnight());
        self.at_wall_clock(naive)
    }

    pub fn is_before<Tz2: TimeZone>(&self, u: &DateTime<Tz2>) -> bool {
        self.diff(u) < TimeDelta::zero()
    }

    pub fn is_after<Tz2: TimeZone>(&self, u: &DateTime<Tz2>) -> bool {
        self.diff(u) > TimeDelta::zero()
    }

    /// Duration of `self - u`.
    pub fn diff<Tz2: TimeZone>(&self, u: &DateTime<Tz2>) -> TimeDelta {
        self.time.clone().signed_duration_since(u)
    }

    /// Whole seconds of `self - u`.
    pub fn diff_sec<Tz2: TimeZone>(&self, u: &DateTime<Tz2>) -> i64 {
        self.diff(u).num_seconds()
    }

    /// Alias of [`TimeX::diff_sec`].
    pub fn sub_unix<Tz2: TimeZone>(&self, u: &DateTime<Tz2>) -> i64 {
        self.diff_sec(u)
    }

    /// Human readable distance from `before`, e.g. "3 mins".
    pub fn how_long_ago<Tz2: TimeZone>(&self, before: &DateTime<Tz2>) -> String {
        how_long_ago(self.time.timestamp() - before.timestamp())
    }

    fn midnight(&self) -> NaiveDateTime {
        self.time.date_naive().and_time(NaiveTime::MIN)
    }

    /// Resolve a wall-clock time in this value's timezone. Ambiguous times
    /// take the earlier instant; times inside a DST gap keep the current
    /// UTC offset.
    fn at_wall_clock(&self, naive: NaiveDateTime) -> Self {
        let tz = self.time.timezone();
        let time = tz.from_local_datetime(&naive).earliest().unwrap_or_else(|| {
            let offset = i64::from(self.time.offset().fix().local_minus_utc());
            tz.from_utc_datetime(&(naive - TimeDelta::seconds(offset)))
        });
        TimeX::new(time)
    }
}

impl<Tz: TimeZone> TimeX<Tz>
where
    Tz::Offset: fmt::Display,
{
    /// Format with a strftime layout. An empty or invalid layout falls back
    /// to [`DEFAULT_LAYOUT`].
    pub fn format(&self, layout: &str) -> String {
        format::strftime(&self.time, layout)
    }

    /// Format with the value's own layout.
    pub fn datetime(&self) -> String {
        self.format(&self.layout)
    }

    /// Format with a date template like "Y-m-d H:i:s". See [`to_layout`].
    pub fn date_format(&self, template: &str) -> String {
        self.format(&to_layout(template))
    }

    /// Alias of [`TimeX::date_format`].
    pub fn tpl_format(&self, template: &str) -> String {
        self.date_format(template)
    }
}

impl<Tz: TimeZone> Deref for TimeX<Tz> {
    type Target = DateTime<Tz>;

    fn deref(&self) -> &Self::Target {
        &self.time
    }
}

impl<Tz: TimeZone> fmt::Display for TimeX<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.datetime())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeX<Tz> {
    fn from(time: DateTime<Tz>) -> Self {
        TimeX::new(time)
    }
}
