use std::fmt::{Debug, Display};

use chrono::{NaiveTime, TimeDelta};

use crate::{
    duration::sleep_duration,
    helpers::{
        format_hm::FormatHM,
        time_math::{mean, mean_delta, mean_time, round2, std_delta, std_time},
    },
    sleep_log::LogEntry,
};

/// Collects bedtimes, wake times and durations from a sleep log.
#[derive(Default)]
pub struct SleepConsistencyAnalyzer {
    durations: Vec<TimeDelta>,
    bedtimes: Vec<NaiveTime>,
    wake_times: Vec<NaiveTime>,
    midpoints: Vec<NaiveTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SleepConsistency {
    pub nights: usize,
    pub duration: Spread<TimeDelta>,
    pub bedtime: Spread<NaiveTime>,
    pub wake_time: Spread<NaiveTime>,
    pub midpoint: Spread<NaiveTime>,
    pub score: ConsistencyScore,
}

/// Scores from 0 to 100, higher meaning more regular nights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConsistencyScore {
    pub total_score: f64,
    pub duration_score: f64,
    pub timing_score: f64,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct Spread<Value> {
    pub mean: Value,
    pub std: TimeDelta,
    /// Standard deviation as a percentage of the mean sleep duration.
    pub cv: f64,
}

impl SleepConsistencyAnalyzer {
    pub fn new(entries: &[LogEntry]) -> Self {
        let mut analyzer = Self::default();
        for entry in entries {
            let duration = sleep_duration(entry.sleep_time, entry.wake_time);
            analyzer.durations.push(duration);
            analyzer.bedtimes.push(entry.sleep_time);
            analyzer.wake_times.push(entry.wake_time);
            analyzer.midpoints.push(entry.sleep_time + duration / 2);
        }
        analyzer
    }

    pub fn calculate_consistency(&self) -> SleepConsistency {
        if self.durations.is_empty() {
            return SleepConsistency::default();
        }

        let mean_duration = mean_delta(&self.durations);
        let duration_std = std_delta(&self.durations, mean_duration);
        let duration = Spread {
            mean: mean_duration,
            std: duration_std,
            cv: Self::cv(duration_std, mean_duration),
        };

        let bedtime = self.time_spread(&self.bedtimes, mean_duration);
        let wake_time = self.time_spread(&self.wake_times, mean_duration);
        let midpoint = self.time_spread(&self.midpoints, mean_duration);

        let to_score = |cv: f64| f64::max(0.0, 100.0 - cv);
        let duration_score = round2(to_score(duration.cv));
        let timing_scores = [
            to_score(bedtime.cv),
            to_score(wake_time.cv),
            to_score(midpoint.cv),
        ];
        let timing_score = round2(mean(&timing_scores));

        let mut all_scores = timing_scores.to_vec();
        all_scores.push(duration_score);

        SleepConsistency {
            nights: self.durations.len(),
            duration,
            bedtime,
            wake_time,
            midpoint,
            score: ConsistencyScore {
                total_score: round2(mean(&all_scores)),
                duration_score,
                timing_score,
            },
        }
    }

    fn time_spread(&self, times: &[NaiveTime], mean_duration: TimeDelta) -> Spread<NaiveTime> {
        let mean = mean_time(times);
        let std = std_time(times, &mean);
        Spread {
            mean,
            std,
            cv: Self::cv(std, mean_duration),
        }
    }

    fn cv(std: TimeDelta, mean_duration: TimeDelta) -> f64 {
        if mean_duration.num_minutes() == 0 {
            return 0.0;
        }
        round2(std.num_minutes() as f64 / mean_duration.num_minutes() as f64 * 100.0)
    }
}

impl<Value> Debug for Spread<Value>
where
    Value: FormatHM,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spread")
            .field("mean", &self.mean.format_hm())
            .field("std", &self.std.format_hm())
            .field("cv", &self.cv)
            .finish()
    }
}

impl<Value> Display for Spread<Value>
where
    Value: FormatHM,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Mean: {}, STD: {}, CV: {}",
            self.mean.format_hm(),
            self.std.format_hm(),
            self.cv
        ))
    }
}

impl Display for SleepConsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Nights: {}\nDuration: {}\nBedtime: {}\nWake time: {}\nMidpoint: {}\nScores:\n",
            self.nights, self.duration, self.bedtime, self.wake_time, self.midpoint,
        ))?;
        f.write_fmt(format_args!(
            "\tDuration score: {}\n\tTiming score: {}\n\tOverall score: {}",
            self.score.duration_score, self.score.timing_score, self.score.total_score,
        ))
    }
}

#[cfg(test)]
mod tests {
    use sleepwise_types::Feeling;

    use super::*;

    fn entry(sleep: (u32, u32), wake: (u32, u32)) -> LogEntry {
        let sleep_time = NaiveTime::from_hms_opt(sleep.0, sleep.1, 0).unwrap();
        let wake_time = NaiveTime::from_hms_opt(wake.0, wake.1, 0).unwrap();
        LogEntry {
            sleep_time,
            wake_time,
            hours_slept: sleep_duration(sleep_time, wake_time).num_minutes() as f64 / 60.0,
            feeling: Feeling::Okay,
        }
    }

    #[test]
    fn empty_log() {
        let consistency = SleepConsistencyAnalyzer::new(&[]).calculate_consistency();
        assert_eq!(consistency, SleepConsistency::default());
        assert_eq!(consistency.nights, 0);
    }

    #[test]
    fn identical_nights_score_100() {
        let entries = vec![entry((23, 0), (7, 0)); 3];
        let consistency = SleepConsistencyAnalyzer::new(&entries).calculate_consistency();

        assert_eq!(consistency.nights, 3);
        assert_eq!(consistency.duration.mean, TimeDelta::hours(8));
        assert_eq!(consistency.bedtime.mean, NaiveTime::from_hms_opt(23, 0, 0).unwrap());
        assert_eq!(consistency.midpoint.mean, NaiveTime::from_hms_opt(3, 0, 0).unwrap());
        assert_eq!(
            consistency.score,
            ConsistencyScore {
                total_score: 100.0,
                duration_score: 100.0,
                timing_score: 100.0,
            }
        );
    }

    #[test]
    fn shifting_bedtime_lowers_timing_score() {
        // Same 8h every night, bedtime one hour either side of midnight.
        let entries = [entry((23, 0), (7, 0)), entry((1, 0), (9, 0))];
        let consistency = SleepConsistencyAnalyzer::new(&entries).calculate_consistency();

        assert_eq!(consistency.score.duration_score, 100.0);
        assert_eq!(consistency.bedtime.mean, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(consistency.bedtime.std, TimeDelta::hours(1));
        // 60 min spread on a 480 min night
        assert_eq!(consistency.bedtime.cv, 12.5);
        assert_eq!(consistency.score.timing_score, 87.5);
        assert!(consistency.score.total_score < 100.0);
    }

    #[test]
    fn wake_times_around_noon() {
        let entries = [entry((3, 30), (11, 30)), entry((4, 30), (12, 30))];
        let consistency = SleepConsistencyAnalyzer::new(&entries).calculate_consistency();

        assert_eq!(consistency.wake_time.mean, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(consistency.wake_time.std, TimeDelta::minutes(30));
        // 30 min spread on a 480 min night
        assert_eq!(consistency.wake_time.cv, 6.25);
        assert_eq!(consistency.score.timing_score, 93.75);
    }

    #[test]
    fn display_lists_each_metric() {
        let entries = [entry((23, 0), (7, 0))];
        let text = SleepConsistencyAnalyzer::new(&entries)
            .calculate_consistency()
            .to_string();
        assert!(text.starts_with("Nights: 1\nDuration: Mean: 08:00, STD: 00:00, CV: 0\n"));
        assert!(text.contains("Bedtime: Mean: 23:00"));
        assert!(text.ends_with("Overall score: 100"));
    }
}
