use thiserror::Error;

use crate::answers::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TimeField {
    #[strum(to_string = "sleep time")]
    SleepTime,
    #[strum(to_string = "wake time")]
    WakeTime,
}

/// Validation failures reported back to the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("invalid {field} `{text}`, please enter times in HH:MM format")]
    TimeParse { field: TimeField, text: String },
    #[error("please answer the {0} question before submitting")]
    IncompleteInput(Question),
}
