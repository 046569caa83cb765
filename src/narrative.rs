use crate::classify::Mode;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The period a rare/popular step highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Season2024,
    AllTime,
}

/// Named narrative steps in their fixed presentation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Step {
    AllScores,
    StraightSets,
    ThreeSets,
    #[strum(serialize = "atp-2024")]
    Atp2024,
    #[strum(serialize = "wta-2024")]
    Wta2024,
    #[strum(serialize = "combined-2024")]
    Combined2024,
    #[strum(serialize = "since-1968")]
    Since1968,
    NeverSeen,
    #[strum(serialize = "rarest-2024")]
    Rarest2024,
    RarestAllTime,
    #[strum(serialize = "popular-2024")]
    Popular2024,
    PopularAllTime,
    ExplorerIntro,
}

impl Step {
    pub fn all() -> Vec<Step> {
        Step::iter().collect()
    }

    /// The display mode this step renders with, plus the highlight period
    /// for rare/popular steps. The explorer intro renders no grid.
    pub fn mode(self) -> Option<(Mode, Option<Period>)> {
        match self {
            Step::AllScores => Some((Mode::AllScores, None)),
            Step::StraightSets => Some((Mode::StraightSets, None)),
            Step::ThreeSets => Some((Mode::ThreeSets, None)),
            Step::Atp2024 => Some((Mode::Atp2024, None)),
            Step::Wta2024 => Some((Mode::Wta2024, None)),
            Step::Combined2024 => Some((Mode::Combined2024, None)),
            Step::Since1968 => Some((Mode::AllTime, None)),
            Step::NeverSeen => Some((Mode::NeverSeen, None)),
            Step::Rarest2024 => Some((Mode::Rare, Some(Period::Season2024))),
            Step::RarestAllTime => Some((Mode::Rare, Some(Period::AllTime))),
            Step::Popular2024 => Some((Mode::Popular, Some(Period::Season2024))),
            Step::PopularAllTime => Some((Mode::Popular, Some(Period::AllTime))),
            Step::ExplorerIntro => None,
        }
    }
}

/// Result of advancing the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Step(Step),
    /// "Next" from the final step leaves the narrative for the free-form
    /// explorer; a terminal transition out of the sequencer.
    EnterExplorer,
}

/// Finite, ordered walk over the narrative steps. The index is clamped at
/// both ends; no step mutates layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    index: usize,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn step_count() -> usize {
        Step::iter().count()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Step {
        Step::iter()
            .nth(self.index)
            .unwrap_or(Step::ExplorerIntro)
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 == Self::step_count()
    }

    pub fn next(&mut self) -> Transition {
        if self.at_end() {
            Transition::EnterExplorer
        } else {
            self.index += 1;
            Transition::Step(self.current())
        }
    }

    pub fn prev(&mut self) -> Step {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Returning from the explorer re-enters at the final step.
    pub fn back_to_narrative(&mut self) -> Step {
        self.index = Self::step_count() - 1;
        self.current()
    }
}
