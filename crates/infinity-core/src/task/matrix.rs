//! Priority matrix view over open tasks.
//!
//! Leverage (importance) is one axis and consequence (urgency) the other.

use serde::Serialize;

use super::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Important, not urgent. Long-term growth work.
    HighLeverageLowConsequence,
    /// Important and urgent.
    HighLeverageHighConsequence,
    /// Urgent, not important. Get it out of the way.
    LowLeverageHighConsequence,
    /// Neither. Candidates for elimination.
    LowLeverageLowConsequence,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighLeverageHighConsequence,
        Quadrant::HighLeverageLowConsequence,
        Quadrant::LowLeverageHighConsequence,
        Quadrant::LowLeverageLowConsequence,
    ];

    pub fn of(is_important: bool, is_urgent: bool) -> Self {
        match (is_important, is_urgent) {
            (true, false) => Quadrant::HighLeverageLowConsequence,
            (true, true) => Quadrant::HighLeverageHighConsequence,
            (false, true) => Quadrant::LowLeverageHighConsequence,
            (false, false) => Quadrant::LowLeverageLowConsequence,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::HighLeverageLowConsequence => "High Leverage, Low Consequence",
            Quadrant::HighLeverageHighConsequence => "High Leverage, High Consequence",
            Quadrant::LowLeverageHighConsequence => "Low Leverage, High Consequence",
            Quadrant::LowLeverageLowConsequence => "Low Leverage, Low Consequence",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Quadrant::HighLeverageLowConsequence => {
                "Important but not urgent. Your main focus for long-term growth."
            }
            Quadrant::HighLeverageHighConsequence => {
                "Urgent and important. Handle these to avoid problems and achieve goals."
            }
            Quadrant::LowLeverageHighConsequence => {
                "Urgent but not important. Do these quickly to get them out of the way."
            }
            Quadrant::LowLeverageLowConsequence => {
                "Neither urgent nor important. Eliminate these to free up focus."
            }
        }
    }
}

/// Open tasks grouped by quadrant, each group in board order.
#[derive(Debug, Default, Serialize)]
pub struct PriorityMatrix<'a> {
    pub high_leverage_high_consequence: Vec<&'a Task>,
    pub high_leverage_low_consequence: Vec<&'a Task>,
    pub low_leverage_high_consequence: Vec<&'a Task>,
    pub low_leverage_low_consequence: Vec<&'a Task>,
}

impl<'a> PriorityMatrix<'a> {
    pub fn from_tasks(tasks: &'a [Task]) -> Self {
        let mut matrix = Self::default();
        for task in tasks.iter().filter(|t| !t.completed) {
            matrix.cell_mut(task.quadrant()).push(task);
        }
        matrix
    }

    pub fn cell(&self, quadrant: Quadrant) -> &[&'a Task] {
        match quadrant {
            Quadrant::HighLeverageHighConsequence => &self.high_leverage_high_consequence,
            Quadrant::HighLeverageLowConsequence => &self.high_leverage_low_consequence,
            Quadrant::LowLeverageHighConsequence => &self.low_leverage_high_consequence,
            Quadrant::LowLeverageLowConsequence => &self.low_leverage_low_consequence,
        }
    }

    fn cell_mut(&mut self, quadrant: Quadrant) -> &mut Vec<&'a Task> {
        match quadrant {
            Quadrant::HighLeverageHighConsequence => &mut self.high_leverage_high_consequence,
            Quadrant::HighLeverageLowConsequence => &mut self.high_leverage_low_consequence,
            Quadrant::LowLeverageHighConsequence => &mut self.low_leverage_high_consequence,
            Quadrant::LowLeverageLowConsequence => &mut self.low_leverage_low_consequence,
        }
    }
}
