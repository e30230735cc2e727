//! ISO-8601 date and date-time parsing.
//!
//! Accepts a date with an optional time:
//!
//! ```text
//! date ['T' [time] [offset]]
//! date   = yyyy | yyyy-MM | yyyy-MM-dd | yyyy-DDD | yyyy-Www[-e]
//! time   = HH[:mm[:ss]] with an optional fraction ('.' or ',') on the last field
//! offset = Z | ±HH | ±HHmm | ±HH:mm
//! ```
//!
//! Missing fields default to their minimum, so a bare date is midnight.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc, Weekday};
use log::trace;

use common_config::DateTimeConfig;
use common_error::{AttrError, AttrResult};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

type ParsedDateTime = (NaiveDate, NaiveTime, Option<FixedOffset>);

/// Stateless ISO-8601 parser.
///
/// Holds only the offset applied to input without one. Build it once and
/// share it; parsing never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeParser {
    default_offset: FixedOffset,
}

impl DateTimeParser {
    /// Create a parser from configuration.
    pub fn new(config: &DateTimeConfig) -> AttrResult<Self> {
        config.validate()?;
        let default_offset = FixedOffset::east_opt(config.default_offset_seconds).ok_or_else(|| {
            AttrError::invalid_config(format!(
                "invalid default offset {}s",
                config.default_offset_seconds
            ))
        })?;
        Ok(Self { default_offset })
    }

    /// A parser that reads offset-less input as UTC.
    pub fn utc() -> Self {
        Self {
            default_offset: Utc.fix(),
        }
    }

    pub fn default_offset(&self) -> FixedOffset {
        self.default_offset
    }

    /// Parse ISO-8601 text into an offset-aware date-time.
    pub fn parse(&self, text: &str) -> AttrResult<DateTime<FixedOffset>> {
        let (date, time, offset) = Scanner::new(text).date_opt_time().map_err(|reason| {
            trace!("Rejected date-time {text:?}: {reason}");
            AttrError::datetime_format(text, reason)
        })?;

        let offset = offset.unwrap_or(self.default_offset);
        offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .ok_or_else(|| AttrError::datetime_format(text, "local time does not exist"))
    }

    /// Parse ISO-8601 text into milliseconds since the Unix epoch.
    ///
    /// Sub-millisecond precision is truncated.
    pub fn parse_millis(&self, text: &str) -> AttrResult<f64> {
        Ok(self.parse(text)?.timestamp_millis() as f64)
    }
}

impl Default for DateTimeParser {
    fn default() -> Self {
        Self::utc()
    }
}

fn to_number(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, d| acc * 10 + u32::from(d - b'0'))
}

fn weekday_from_iso(day: u32) -> Option<Weekday> {
    Some(match day {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    })
}

/// Byte cursor over the input. Errors are static reasons.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_digit(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9'))
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn digit_run(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self.peek_digit() {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    /// Exactly `width` digits; any digit after them is left for the caller.
    fn fixed(&mut self, width: usize, reason: &'static str) -> Result<u32, &'static str> {
        let start = self.pos;
        while self.pos - start < width && self.peek_digit() {
            self.pos += 1;
        }
        if self.pos - start != width {
            return Err(reason);
        }
        Ok(to_number(&self.bytes[start..self.pos]))
    }

    fn date_opt_time(&mut self) -> Result<ParsedDateTime, &'static str> {
        let date = self.date()?;
        let (time, offset) = if self.eat(b'T') {
            (self.time()?, self.offset()?)
        } else {
            (NaiveTime::default(), None)
        };
        if self.pos != self.bytes.len() {
            return Err("unexpected trailing characters");
        }
        Ok((date, time, offset))
    }

    fn date(&mut self) -> Result<NaiveDate, &'static str> {
        let negative = self.eat(b'-');
        if !negative {
            self.eat(b'+');
        }
        let digits = self.digit_run();
        if !(4..=9).contains(&digits.len()) {
            return Err("expected a year of four to nine digits");
        }
        let magnitude = to_number(digits) as i32;
        let year = if negative { -magnitude } else { magnitude };
        let new_year = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("year out of range")?;

        if !self.eat(b'-') {
            return Ok(new_year);
        }

        if self.eat(b'W') {
            let week = self.fixed(2, "expected a two-digit week")?;
            let day = if self.eat(b'-') {
                self.fixed(1, "expected a single-digit weekday")?
            } else {
                1
            };
            let weekday = weekday_from_iso(day).ok_or("weekday out of range")?;
            return NaiveDate::from_isoywd_opt(year, week, weekday).ok_or("week out of range");
        }

        let run = self.digit_run();
        match run.len() {
            2 => {
                let month = to_number(run);
                let day = if self.eat(b'-') {
                    self.fixed(2, "expected a two-digit day")?
                } else {
                    1
                };
                NaiveDate::from_ymd_opt(year, month, day).ok_or("month or day out of range")
            }
            3 => NaiveDate::from_yo_opt(year, to_number(run)).ok_or("day of year out of range"),
            _ => Err("expected a month, a day of year or a week"),
        }
    }

    fn time(&mut self) -> Result<NaiveTime, &'static str> {
        if !self.peek_digit() {
            return Ok(NaiveTime::default());
        }

        let hour = self.fixed(2, "expected a two-digit hour")?;
        let (mut minute, mut second) = (0, 0);
        let mut unit_seconds = 3600;
        if self.eat(b':') {
            minute = self.fixed(2, "expected two-digit minutes")?;
            unit_seconds = 60;
            if self.eat(b':') {
                second = self.fixed(2, "expected two-digit seconds")?;
                unit_seconds = 1;
            }
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err("time field out of range");
        }

        // The fraction scales the last field present.
        let fraction = if self.eat(b'.') || self.eat(b',') {
            self.fraction()? * unit_seconds
        } else {
            0
        };

        let whole = u64::from(hour * 3600 + minute * 60 + second) * NANOS_PER_SECOND;
        let total = whole + fraction;
        NaiveTime::from_num_seconds_from_midnight_opt(
            (total / NANOS_PER_SECOND) as u32,
            (total % NANOS_PER_SECOND) as u32,
        )
        .ok_or("time out of range")
    }

    /// Fractional digits as nanoseconds of one unit; digits past the ninth are dropped.
    fn fraction(&mut self) -> Result<u64, &'static str> {
        let digits = self.digit_run();
        if digits.is_empty() {
            return Err("expected fraction digits");
        }
        Ok((0..9).fold(0, |acc, i| {
            acc * 10 + digits.get(i).map_or(0, |d| u64::from(d - b'0'))
        }))
    }

    fn offset(&mut self) -> Result<Option<FixedOffset>, &'static str> {
        if self.eat(b'Z') {
            return Ok(Some(Utc.fix()));
        }
        let sign = if self.eat(b'+') {
            1
        } else if self.eat(b'-') {
            -1
        } else {
            return Ok(None);
        };

        let hours = self.fixed(2, "expected two-digit offset hours")?;
        let minutes = if self.eat(b':') || self.peek_digit() {
            self.fixed(2, "expected two-digit offset minutes")?
        } else {
            0
        };
        if hours > 23 || minutes > 59 {
            return Err("offset out of range");
        }

        let seconds = sign * (hours * 3600 + minutes * 60) as i32;
        FixedOffset::east_opt(seconds)
            .map(Some)
            .ok_or("offset out of range")
    }
}
