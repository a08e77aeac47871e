use chrono::NaiveTime;

use crate::answers::{BedtimeConsistency, CaffeineUse, Exercise, Feeling, ScreenUse};

/// One night's answers, validated and ready to be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSession {
    pub sleep_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub feeling: Feeling,
    pub screen_use: ScreenUse,
    pub caffeine_use: CaffeineUse,
    pub exercise: Exercise,
    pub bedtime_consistency: BedtimeConsistency,
}

/// Raw form contents as typed by the user. `None` answers are still on the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SleepForm {
    pub sleep_time: String,
    pub wake_time: String,
    pub feeling: Option<Feeling>,
    pub screen_use: Option<ScreenUse>,
    pub caffeine_use: Option<CaffeineUse>,
    pub exercise: Option<Exercise>,
    pub bedtime_consistency: Option<BedtimeConsistency>,
}

impl SleepForm {
    pub fn new(sleep_time: impl Into<String>, wake_time: impl Into<String>) -> Self {
        Self {
            sleep_time: sleep_time.into(),
            wake_time: wake_time.into(),
            ..Default::default()
        }
    }

    pub fn with_feeling(mut self, feeling: Feeling) -> Self {
        self.feeling = Some(feeling);
        self
    }

    pub fn with_screen_use(mut self, screen_use: ScreenUse) -> Self {
        self.screen_use = Some(screen_use);
        self
    }

    pub fn with_caffeine_use(mut self, caffeine_use: CaffeineUse) -> Self {
        self.caffeine_use = Some(caffeine_use);
        self
    }

    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercise = Some(exercise);
        self
    }

    pub fn with_bedtime_consistency(mut self, bedtime_consistency: BedtimeConsistency) -> Self {
        self.bedtime_consistency = Some(bedtime_consistency);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_unanswered() {
        let form = SleepForm::new("23:00", "07:00");
        assert_eq!(form.sleep_time, "23:00");
        assert_eq!(form.wake_time, "07:00");
        assert!(form.feeling.is_none());
        assert!(form.bedtime_consistency.is_none());
    }

    #[test]
    fn session_serializes_times_as_text() {
        let session = SleepSession {
            sleep_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            feeling: Feeling::Okay,
            screen_use: ScreenUse::No,
            caffeine_use: CaffeineUse::No,
            exercise: Exercise::Yes,
            bedtime_consistency: BedtimeConsistency::Yes,
        };
        let json = serde_json::to_value(session).unwrap();
        assert_eq!(json["sleep_time"], "23:00:00");
        assert_eq!(json["feeling"], "okay");
        assert_eq!(json["exercise"], "yes");
    }
}
