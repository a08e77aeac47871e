use std::fmt::Display;

use chrono::NaiveTime;
use sleepwise_types::{EvaluationError, Question, SleepForm, SleepSession, TimeField};

use crate::{
    duration::{hours_slept, parse_time_of_day},
    score::{FeedbackTier, ScoreBreakdown},
    suggestions::suggestions,
};

/// Everything the report shows for one night. Recomputed on every submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub hours_slept: f64,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
    pub tier: FeedbackTier,
    pub suggestions: Vec<String>,
}

pub fn evaluate(session: &SleepSession) -> Evaluation {
    let hours_slept = hours_slept(session.sleep_time, session.wake_time);
    let breakdown = ScoreBreakdown::new(session, hours_slept);
    let score = breakdown.total();

    debug!(
        "Evaluated {:.2}h of sleep: score {} ({:?})",
        hours_slept, score, breakdown
    );

    Evaluation {
        hours_slept,
        score,
        breakdown,
        tier: FeedbackTier::from_score(score),
        suggestions: suggestions(session, hours_slept),
    }
}

/// Checks the raw form, times first and then each answer in form order.
pub fn validate_form(form: &SleepForm) -> Result<SleepSession, EvaluationError> {
    let sleep_time = parse_field(&form.sleep_time, TimeField::SleepTime)?;
    let wake_time = parse_field(&form.wake_time, TimeField::WakeTime)?;

    Ok(SleepSession {
        sleep_time,
        wake_time,
        feeling: form
            .feeling
            .ok_or(EvaluationError::IncompleteInput(Question::Feeling))?,
        screen_use: form
            .screen_use
            .ok_or(EvaluationError::IncompleteInput(Question::Screens))?,
        caffeine_use: form
            .caffeine_use
            .ok_or(EvaluationError::IncompleteInput(Question::Caffeine))?,
        exercise: form
            .exercise
            .ok_or(EvaluationError::IncompleteInput(Question::Exercise))?,
        bedtime_consistency: form
            .bedtime_consistency
            .ok_or(EvaluationError::IncompleteInput(Question::Consistency))?,
    })
}

fn parse_field(text: &str, field: TimeField) -> Result<NaiveTime, EvaluationError> {
    parse_time_of_day(text).map_err(|_| EvaluationError::TimeParse {
        field,
        text: text.trim().to_string(),
    })
}

pub fn evaluate_form(form: &SleepForm) -> Result<(SleepSession, Evaluation), EvaluationError> {
    let session = validate_form(form)?;
    let evaluation = evaluate(&session);
    Ok((session, evaluation))
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Slept for: {:.2} hours\nSleep score: {}\n{}\n\nTonight's Suggestions:\n",
            self.hours_slept, self.score, self.tier
        ))?;
        for suggestion in &self.suggestions {
            f.write_fmt(format_args!("• {}\n", suggestion))?;
        }
        Ok(())
    }
}
