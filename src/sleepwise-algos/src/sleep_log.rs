use std::fmt::Display;

use chrono::NaiveTime;
use sleepwise_types::{Feeling, SleepSession};

use crate::{
    evaluator::Evaluation,
    helpers::time_math::mean,
    sleep_consistency::{SleepConsistency, SleepConsistencyAnalyzer},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogEntry {
    pub sleep_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub hours_slept: f64,
    pub feeling: Feeling,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Slept for: {:.2} hours, Felt: {}",
            self.hours_slept, self.feeling
        ))
    }
}

/// Nights recorded during a session, oldest first.
///
/// Owned by the caller and only appended after a submission passes validation.
/// Scoring a night never reads it.
#[derive(Debug, Clone, Default)]
pub struct SleepLog {
    entries: Vec<LogEntry>,
}

impl SleepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, session: &SleepSession, evaluation: &Evaluation) -> &LogEntry {
        self.entries.push(LogEntry {
            sleep_time: session.sleep_time,
            wake_time: session.wake_time,
            hours_slept: evaluation.hours_slept,
            feeling: session.feeling,
        });
        debug!("Recorded night #{}", self.entries.len());
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn average_hours(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let hours = self.entries.iter().map(|e| e.hours_slept).collect::<Vec<_>>();
        Some(mean(&hours))
    }

    pub fn last_feeling(&self) -> Option<Feeling> {
        self.entries.last().map(|e| e.feeling)
    }

    pub fn history_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// One to five stars: average hours over 1.5, nudged by the latest feeling
    /// and by a completed wind-down checklist.
    pub fn star_rating(&self, checklist_completed: bool) -> Option<StarRating> {
        let average = self.average_hours()?;
        let mut stars = (average / 1.5).round().min(5.0) as i32;

        match self.last_feeling() {
            Some(Feeling::Refreshed) => stars += 1,
            Some(Feeling::VeryTired) => stars -= 1,
            _ => {}
        }
        if checklist_completed {
            stars += 1;
        }

        Some(StarRating(stars.clamp(1, StarRating::MAX as i32) as u8))
    }

    pub fn consistency(&self) -> SleepConsistency {
        SleepConsistencyAnalyzer::new(&self.entries).calculate_consistency()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating(pub u8);

impl StarRating {
    pub const MAX: u8 = 5;
}

impl Display for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = self.0.min(Self::MAX) as usize;
        f.write_str(&"★".repeat(filled))?;
        f.write_str(&"☆".repeat(Self::MAX as usize - filled))
    }
}

#[cfg(test)]
mod tests {
    use sleepwise_types::{BedtimeConsistency, CaffeineUse, Exercise, ScreenUse};

    use super::*;
    use crate::evaluator::evaluate;

    fn night(sleep: (u32, u32), wake: (u32, u32), feeling: Feeling) -> SleepSession {
        SleepSession {
            sleep_time: NaiveTime::from_hms_opt(sleep.0, sleep.1, 0).unwrap(),
            wake_time: NaiveTime::from_hms_opt(wake.0, wake.1, 0).unwrap(),
            feeling,
            screen_use: ScreenUse::No,
            caffeine_use: CaffeineUse::No,
            exercise: Exercise::No,
            bedtime_consistency: BedtimeConsistency::Yes,
        }
    }

    fn log_of(nights: &[SleepSession]) -> SleepLog {
        let mut log = SleepLog::new();
        for session in nights {
            log.record(session, &evaluate(session));
        }
        log
    }

    #[test]
    fn empty_log() {
        let log = SleepLog::new();
        assert!(log.is_empty());
        assert_eq!(log.average_hours(), None);
        assert_eq!(log.star_rating(true), None);
        assert!(log.history_lines().is_empty());
    }

    #[test]
    fn record_appends_in_order() {
        let log = log_of(&[
            night((23, 0), (7, 0), Feeling::Okay),
            night((0, 30), (6, 0), Feeling::Tired),
        ]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].hours_slept, 5.5);
        assert_eq!(log.last_feeling(), Some(Feeling::Tired));
        assert_eq!(log.average_hours(), Some(6.75));
        assert_eq!(
            log.history_lines(),
            vec![
                "Slept for: 8.00 hours, Felt: Okay",
                "Slept for: 5.50 hours, Felt: Tired",
            ]
        );
    }

    #[test]
    fn stars_from_average_hours() {
        // 7.5 / 1.5 = 5
        let log = log_of(&[night((23, 30), (7, 0), Feeling::Okay)]);
        assert_eq!(log.star_rating(false), Some(StarRating(5)));

        // 6 / 1.5 = 4
        let log = log_of(&[night((0, 0), (6, 0), Feeling::Tired)]);
        assert_eq!(log.star_rating(false), Some(StarRating(4)));
    }

    #[test]
    fn stars_adjusted_by_feeling_and_checklist() {
        let log = log_of(&[night((0, 0), (6, 0), Feeling::Refreshed)]);
        assert_eq!(log.star_rating(false), Some(StarRating(5)));

        let log = log_of(&[night((0, 0), (6, 0), Feeling::VeryTired)]);
        assert_eq!(log.star_rating(false), Some(StarRating(3)));
        assert_eq!(log.star_rating(true), Some(StarRating(4)));
    }

    #[test]
    fn stars_are_clamped() {
        let log = log_of(&[night((12, 0), (12, 0), Feeling::VeryTired)]);
        assert_eq!(log.star_rating(false), Some(StarRating(1)));

        let log = log_of(&[night((21, 0), (9, 0), Feeling::Refreshed)]);
        assert_eq!(log.star_rating(true), Some(StarRating(5)));
    }

    #[test]
    fn stars_render() {
        assert_eq!(StarRating(3).to_string(), "★★★☆☆");
        assert_eq!(StarRating(5).to_string(), "★★★★★");
    }
}
