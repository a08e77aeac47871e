use thiserror::Error;

pub const WIND_DOWN_ITEMS: [&str; 5] = [
    "Dim your lights 1 hour before bed",
    "Avoid screens 30 minutes before sleeping",
    "Avoid caffeine after 4:00 PM",
    "Do 5 minutes of deep breathing",
    "Avoid intense exercise in the evening",
];

/// Shown after the history until the checklist has been completed for the day.
pub const CHECKLIST_REMINDER: &str = "Complete your wind-down checklist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("there is no checklist item {0}")]
    UnknownItem(usize),
    #[error("please complete all checklist items before submitting ({remaining} left)")]
    Incomplete { remaining: usize },
}

/// The pre-sleep wind-down routine. Completing it only counts once every item is ticked.
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    ticked: [bool; WIND_DOWN_ITEMS.len()],
    completed_today: bool,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        WIND_DOWN_ITEMS.into_iter().zip(self.ticked.iter().copied())
    }

    /// Ticks the item at a zero-based index.
    pub fn tick(&mut self, index: usize) -> Result<(), ChecklistError> {
        let item = self
            .ticked
            .get_mut(index)
            .ok_or(ChecklistError::UnknownItem(index))?;
        *item = true;
        Ok(())
    }

    pub fn untick(&mut self, index: usize) -> Result<(), ChecklistError> {
        let item = self
            .ticked
            .get_mut(index)
            .ok_or(ChecklistError::UnknownItem(index))?;
        *item = false;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.ticked.iter().filter(|t| !**t).count()
    }

    pub fn complete(&mut self) -> Result<(), ChecklistError> {
        match self.remaining() {
            0 => {
                self.completed_today = true;
                Ok(())
            }
            remaining => Err(ChecklistError::Incomplete { remaining }),
        }
    }

    pub fn completed_today(&self) -> bool {
        self.completed_today
    }

    /// A freshly logged night starts a new day; ticked items are kept.
    pub fn start_new_day(&mut self) {
        self.completed_today = false;
    }
}
