use chrono::{NaiveTime, TimeDelta, Timelike as _};

const MINUTES_PER_DAY: i64 = 24 * 60;

const HALF_DAY: i64 = MINUTES_PER_DAY / 2;

pub fn minutes_of_day(time: &NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Shortest signed distance from `from` to `to` around the clock, in `[-12h, 12h)`.
pub fn wrapped_offset(from: i64, to: i64) -> i64 {
    (to - from + HALF_DAY).rem_euclid(MINUTES_PER_DAY) - HALF_DAY
}

fn from_minutes(minutes: i64) -> NaiveTime {
    let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0).unwrap_or_default()
}

/// Mean time of day. Offsets are taken from the first sample and wrapped into
/// half a day either side, so 23:30/00:30 and 11:30/12:30 both average to the
/// time between them.
pub fn mean_time(times: &[NaiveTime]) -> NaiveTime {
    let Some(first) = times.first() else {
        return NaiveTime::default();
    };
    let pivot = minutes_of_day(first);
    let total = times
        .iter()
        .map(|t| wrapped_offset(pivot, minutes_of_day(t)))
        .sum::<i64>();
    from_minutes(pivot + total.div_euclid(times.len() as i64))
}

/// Population standard deviation of times of day around `mean`.
pub fn std_time(times: &[NaiveTime], mean: &NaiveTime) -> TimeDelta {
    if times.is_empty() {
        return TimeDelta::zero();
    }
    let mean = minutes_of_day(mean);
    let variance = times
        .iter()
        .map(|t| wrapped_offset(mean, minutes_of_day(t)).pow(2))
        .sum::<i64>()
        / times.len() as i64;

    TimeDelta::minutes(variance.isqrt())
}

pub fn mean_delta(durations: &[TimeDelta]) -> TimeDelta {
    if durations.is_empty() {
        return TimeDelta::zero();
    }
    durations.iter().sum::<TimeDelta>() / durations.len() as i32
}

pub fn std_delta(durations: &[TimeDelta], mean: TimeDelta) -> TimeDelta {
    if durations.is_empty() {
        return TimeDelta::zero();
    }
    let variance = durations
        .iter()
        .map(|d| (*d - mean).num_minutes().pow(2))
        .sum::<i64>()
        / durations.len() as i64;

    TimeDelta::minutes(variance.isqrt())
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
