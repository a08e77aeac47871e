use std::{fmt, str::FromStr};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Label shown by a selection field that has not been answered yet.
pub const PLACEHOLDER: &str = "Select...";

/// The five questions asked next to the bedtime and wake time fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    #[strum(to_string = "feeling")]
    Feeling,
    #[strum(to_string = "screens")]
    Screens,
    #[strum(to_string = "caffeine")]
    Caffeine,
    #[strum(to_string = "exercise")]
    Exercise,
    #[strum(to_string = "consistency")]
    Consistency,
}

impl Question {
    pub fn prompt(self) -> &'static str {
        match self {
            Question::Feeling => "How did you feel after waking up?",
            Question::Screens => "Did you use screens before bed?",
            Question::Caffeine => "Did you have caffeine after 4:00 PM?",
            Question::Exercise => "Did you exercise in the evening?",
            Question::Consistency => "Did you go to bed at your usual time?",
        }
    }
}

/// A closed set of choices for one [`Question`].
pub trait Answer: Copy + fmt::Display + FromStr + IntoEnumIterator {
    const QUESTION: Question;

    fn choices() -> Vec<Self> {
        Self::iter().collect()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Feeling {
    Refreshed,
    #[strum(to_string = "Okay", serialize = "ok")]
    Okay,
    Tired,
    #[strum(
        to_string = "Very Tired",
        serialize = "very-tired",
        serialize = "very_tired",
        serialize = "verytired"
    )]
    VeryTired,
}

impl Answer for Feeling {
    const QUESTION: Question = Question::Feeling;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ScreenUse {
    No,
    #[strum(
        to_string = "Yes, under 30 min",
        serialize = "under-30",
        serialize = "yes-under-30",
        serialize = "under30"
    )]
    UnderThirty,
    #[strum(
        to_string = "Yes, over 30 min",
        serialize = "over-30",
        serialize = "yes-over-30",
        serialize = "over30"
    )]
    OverThirty,
}

impl Answer for ScreenUse {
    const QUESTION: Question = Question::Screens;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineUse {
    #[strum(to_string = "No", serialize = "n")]
    No,
    #[strum(to_string = "Yes", serialize = "y")]
    Yes,
}

impl Answer for CaffeineUse {
    const QUESTION: Question = Question::Caffeine;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    #[strum(to_string = "No", serialize = "n")]
    No,
    #[strum(to_string = "Yes", serialize = "y")]
    Yes,
}

impl Answer for Exercise {
    const QUESTION: Question = Question::Exercise;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum BedtimeConsistency {
    #[strum(to_string = "Yes", serialize = "y")]
    Yes,
    #[strum(to_string = "No", serialize = "n")]
    No,
}

impl Answer for BedtimeConsistency {
    const QUESTION: Question = Question::Consistency;
}

/// Parses the text of a selection field.
///
/// Blank text and the [`PLACEHOLDER`] label mean "not answered" and yield `Ok(None)`.
pub fn parse_answer<T: FromStr>(text: &str) -> Result<Option<T>, T::Err> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case(PLACEHOLDER) {
        return Ok(None);
    }
    text.parse().map(Some)
}
