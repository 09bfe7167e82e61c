// crates/domain/src/time.rs
use std::fmt;

use chrono::{Datelike, Local, TimeZone, Timelike};
use filecmdr_shared_kernel::{DomainError, DomainResult};

/// `DD/MM/YYYY HH:MM`, always 16 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeString(String);

impl TimeString {
    pub const LEN: usize = 16;

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TimeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Renders seconds since the epoch in the host's local time zone.
pub fn render_time(seconds: i64) -> DomainResult<TimeString> {
    render_time_in(seconds, &Local)
}

/// Renders seconds since the epoch in `zone`.
///
/// Fails when the instant is outside chrono's calendar or its year needs more
/// than four digits.
pub fn render_time_in<Tz: TimeZone>(seconds: i64, zone: &Tz) -> DomainResult<TimeString> {
    let out_of_range = DomainError::TimeOutOfRange { seconds };
    let at = zone.timestamp_opt(seconds, 0).single().ok_or_else(|| out_of_range.clone())?;
    if !(0..=9999).contains(&at.year()) {
        return Err(out_of_range);
    }

    Ok(TimeString(format!(
        "{:02}/{:02}/{:04} {:02}:{:02}",
        at.day(),
        at.month(),
        at.year(),
        at.hour(),
        at.minute()
    )))
}
