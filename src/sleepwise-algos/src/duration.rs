use chrono::{NaiveTime, TimeDelta};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("expected H:MM or HH:MM")]
    Format,
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}

/// Parses `H:MM` or `HH:MM` on a 24-hour clock. Surrounding whitespace is ignored;
/// seconds and single-digit minutes are not accepted.
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime, TimeOfDayError> {
    let text = text.trim();
    let (hours, minutes) = text.split_once(':').ok_or(TimeOfDayError::Format)?;
    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 {
        return Err(TimeOfDayError::Format);
    }
    Ok(NaiveTime::parse_from_str(text, "%H:%M")?)
}

/// Time between falling asleep and waking up, wrapping over midnight.
///
/// Always in `[0, 24h)`. Equal times count as zero sleep.
pub fn sleep_duration(sleep_time: NaiveTime, wake_time: NaiveTime) -> TimeDelta {
    let elapsed = wake_time.signed_duration_since(sleep_time);
    let elapsed = TimeDelta::minutes(elapsed.num_minutes());
    if elapsed < TimeDelta::zero() {
        elapsed + TimeDelta::days(1)
    } else {
        elapsed
    }
}

pub fn hours_slept(sleep_time: NaiveTime, wake_time: NaiveTime) -> f64 {
    sleep_duration(sleep_time, wake_time).num_minutes() as f64 / 60.0
}
