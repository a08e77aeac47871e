use std::fmt::Display;

use sleepwise_types::{BedtimeConsistency, CaffeineUse, Exercise, Feeling, ScreenUse, SleepSession};

/// Points earned by each answer. The score is their plain sum, no normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub duration: i32,
    pub feeling: i32,
    pub caffeine: i32,
    pub exercise: i32,
    pub consistency: i32,
    pub screens: i32,
}

impl ScoreBreakdown {
    /// Lowest possible total: short sleep, poor feeling, every habit answered badly.
    pub const MIN_SCORE: i32 = -1;
    /// Highest possible total.
    pub const MAX_SCORE: i32 = 8;

    pub fn new(session: &SleepSession, hours_slept: f64) -> Self {
        Self {
            duration: Self::duration_points(hours_slept),
            feeling: match session.feeling {
                Feeling::Refreshed => 2,
                Feeling::Okay => 1,
                Feeling::Tired | Feeling::VeryTired => 0,
            },
            caffeine: match session.caffeine_use {
                CaffeineUse::No => 1,
                CaffeineUse::Yes => 0,
            },
            exercise: match session.exercise {
                Exercise::No => 1,
                Exercise::Yes => 0,
            },
            consistency: match session.bedtime_consistency {
                BedtimeConsistency::Yes => 1,
                BedtimeConsistency::No => 0,
            },
            screens: match session.screen_use {
                ScreenUse::No => 1,
                ScreenUse::UnderThirty => 0,
                ScreenUse::OverThirty => -1,
            },
        }
    }

    fn duration_points(hours_slept: f64) -> i32 {
        if hours_slept >= 8.0 {
            2
        } else if hours_slept >= 7.0 {
            1
        } else {
            0
        }
    }

    pub fn total(&self) -> i32 {
        self.duration + self.feeling + self.caffeine + self.exercise + self.consistency + self.screens
    }
}

pub fn sleep_score(session: &SleepSession, hours_slept: f64) -> i32 {
    ScoreBreakdown::new(session, hours_slept).total()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    StrongHabits,
    RoomForImprovement,
    NeedsWork,
}

impl FeedbackTier {
    pub fn from_score(score: i32) -> Self {
        if score >= 7 {
            FeedbackTier::StrongHabits
        } else if score >= 5 {
            FeedbackTier::RoomForImprovement
        } else {
            FeedbackTier::NeedsWork
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::StrongHabits => "Great job! You have strong sleep habits.",
            FeedbackTier::RoomForImprovement => {
                "Your sleep is okay, but there is room for improvement."
            }
            FeedbackTier::NeedsWork => {
                "Your sleep habits need work. Try the suggestions below tonight."
            }
        }
    }
}

impl Display for FeedbackTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn session(
        feeling: Feeling,
        screen_use: ScreenUse,
        caffeine_use: CaffeineUse,
        exercise: Exercise,
        bedtime_consistency: BedtimeConsistency,
    ) -> SleepSession {
        SleepSession {
            sleep_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            feeling,
            screen_use,
            caffeine_use,
            exercise,
            bedtime_consistency,
        }
    }

    #[test]
    fn duration_thresholds() {
        assert_eq!(ScoreBreakdown::duration_points(8.0), 2);
        assert_eq!(ScoreBreakdown::duration_points(11.5), 2);
        assert_eq!(ScoreBreakdown::duration_points(7.99), 1);
        assert_eq!(ScoreBreakdown::duration_points(7.0), 1);
        assert_eq!(ScoreBreakdown::duration_points(6.99), 0);
        assert_eq!(ScoreBreakdown::duration_points(0.0), 0);
    }

    #[test]
    fn best_answers_reach_max() {
        let s = session(
            Feeling::Refreshed,
            ScreenUse::No,
            CaffeineUse::No,
            Exercise::No,
            BedtimeConsistency::Yes,
        );
        assert_eq!(sleep_score(&s, 8.0), ScoreBreakdown::MAX_SCORE);
    }

    #[test]
    fn worst_answers_reach_min() {
        let s = session(
            Feeling::VeryTired,
            ScreenUse::OverThirty,
            CaffeineUse::Yes,
            Exercise::Yes,
            BedtimeConsistency::No,
        );
        assert_eq!(sleep_score(&s, 3.0), ScoreBreakdown::MIN_SCORE);
    }

    #[test]
    fn breakdown_per_answer() {
        let s = session(
            Feeling::Okay,
            ScreenUse::UnderThirty,
            CaffeineUse::Yes,
            Exercise::No,
            BedtimeConsistency::Yes,
        );
        let breakdown = ScoreBreakdown::new(&s, 7.5);
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                duration: 1,
                feeling: 1,
                caffeine: 0,
                exercise: 1,
                consistency: 1,
                screens: 0,
            }
        );
        assert_eq!(breakdown.total(), 4);
    }

    #[test]
    fn tiers() {
        assert_eq!(FeedbackTier::from_score(8), FeedbackTier::StrongHabits);
        assert_eq!(FeedbackTier::from_score(7), FeedbackTier::StrongHabits);
        assert_eq!(FeedbackTier::from_score(6), FeedbackTier::RoomForImprovement);
        assert_eq!(FeedbackTier::from_score(5), FeedbackTier::RoomForImprovement);
        assert_eq!(FeedbackTier::from_score(4), FeedbackTier::NeedsWork);
        assert_eq!(FeedbackTier::from_score(-1), FeedbackTier::NeedsWork);
    }
}
