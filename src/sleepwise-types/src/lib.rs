#[macro_use]
extern crate serde;

pub mod answers;
pub use answers::{
    Answer, BedtimeConsistency, CaffeineUse, Exercise, Feeling, Question, ScreenUse, PLACEHOLDER,
    parse_answer,
};

mod session;
pub use session::{SleepForm, SleepSession};

mod error;
pub use error::{EvaluationError, TimeField};
