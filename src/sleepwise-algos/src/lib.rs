#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod duration;
pub use duration::{TimeOfDayError, hours_slept, parse_time_of_day, sleep_duration};

pub(crate) mod score;
pub use score::{FeedbackTier, ScoreBreakdown, sleep_score};

pub mod suggestions;
pub use suggestions::{GENERIC_TIPS, suggestions};

pub(crate) mod evaluator;
pub use evaluator::{Evaluation, evaluate, evaluate_form, validate_form};

pub(crate) mod sleep_log;
pub use sleep_log::{LogEntry, SleepLog, StarRating};

pub(crate) mod sleep_consistency;
pub use sleep_consistency::{ConsistencyScore, SleepConsistency, SleepConsistencyAnalyzer, Spread};

pub(crate) mod checklist;
pub use checklist::{CHECKLIST_REMINDER, Checklist, ChecklistError, WIND_DOWN_ITEMS};

pub mod helpers;
