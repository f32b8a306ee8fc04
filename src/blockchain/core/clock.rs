//! Time sources and timestamp rendering used by block construction.

use crate::error::ChainError;
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Source of the creation time stamped into new blocks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the process wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Makes block digests reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }

    /// Returns `None` when `secs` is outside chrono's calendar range.
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Zone a block timestamp is rendered in before hashing.
///
/// The rendered text, not the integer, enters the digest, so two ledgers only
/// agree on hashes if they agree on the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TimestampZone {
    #[default]
    Local,
    Utc,
    /// Offset east of UTC, in seconds.
    Fixed(i32),
}

impl TimestampZone {
    /// RFC 3339 at second precision; a zero offset is written as `Z`.
    pub fn render(&self, secs: i64) -> Option<String> {
        let instant = DateTime::<Utc>::from_timestamp(secs, 0)?;
        let text = match self {
            TimestampZone::Local => format_rfc3339(&instant.with_timezone(&chrono::Local)),
            TimestampZone::Utc => format_rfc3339(&instant),
            TimestampZone::Fixed(offset) => {
                let tz = FixedOffset::east_opt(*offset)?;
                format_rfc3339(&instant.with_timezone(&tz))
            }
        };
        Some(text)
    }
}

/// Wall-clock time in the offset's zone followed by the offset in whole
/// minutes. Seconds of the offset are truncated toward zero, not rounded.
fn format_rfc3339<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let clock = instant.format("%Y-%m-%dT%H:%M:%S");
    let offset = instant.offset().fix().local_minus_utc();
    if offset == 0 {
        return format!("{}Z", clock);
    }

    let minutes = offset / 60;
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.abs();
    format!("{}{}{:02}:{:02}", clock, sign, minutes / 60, minutes % 60)
}

impl fmt::Display for TimestampZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimestampZone::Local => write!(f, "local"),
            TimestampZone::Utc => write!(f, "utc"),
            TimestampZone::Fixed(offset) => {
                let sign = if *offset < 0 { '-' } else { '+' };
                let abs = offset.unsigned_abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
            }
        }
    }
}

impl FromStr for TimestampZone {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(TimestampZone::Local),
            "utc" | "z" => return Ok(TimestampZone::Utc),
            _ => {}
        }

        let invalid = || {
            ChainError::ConfigError(format!(
                "Invalid timestamp zone '{}': expected 'local', 'utc' or '+hh:mm'",
                s
            ))
        };

        let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            (-1, rest)
        } else {
            return Err(invalid());
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Ok(TimestampZone::Fixed(sign * (hours * 3600 + minutes * 60)))
    }
}

impl TryFrom<String> for TimestampZone {
    type Error = ChainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
