use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Fixed priority order, also used to break ties between equal scores.
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    pub const fn elements(self) -> &'static str {
        match self {
            Self::Vata => "Air & Ether",
            Self::Pitta => "Fire & Water",
            Self::Kapha => "Earth & Water",
        }
    }

    pub(crate) const fn priority(self) -> usize {
        match self {
            Self::Vata => 0,
            Self::Pitta => 1,
            Self::Kapha => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseLevel {
    Yes,
    Somewhat,
    No,
}

impl ResponseLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::Somewhat, Self::No]
    }

    pub const fn weight(self) -> u32 {
        match self {
            Self::Yes => 2,
            Self::Somewhat => 1,
            Self::No => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Somewhat => "Somewhat",
            Self::No => "No",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Yes => "Strongly Agree",
            Self::Somewhat => "Partially Agree",
            Self::No => "Disagree",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "2" => Some(Self::Yes),
            "somewhat" | "partial" | "1" => Some(Self::Somewhat),
            "no" | "n" | "0" => Some(Self::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Characteristic {
    pub text: &'static str,
    pub dosha: Dosha,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub category: &'static str,
    pub prompt: &'static str,
    pub characteristics: Vec<Characteristic>,
}

impl Question {
    pub fn characteristic(&self, index: usize) -> Option<&Characteristic> {
        self.characteristics.get(index)
    }
}

/// Direction of a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Next,
    Previous,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("question {0} is not part of the question bank")]
    UnknownQuestion(u32),
    #[error("question {question_id} has no characteristic at position {index}")]
    UnknownCharacteristic { question_id: u32, index: usize },
    #[error("question {0} must be fully answered before moving on")]
    QuestionIncomplete(u32),
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("already at the last question; submit to view results")]
    AtLastQuestion,
    #[error("{remaining} question(s) still need answers before results can be calculated")]
    Unfinished { remaining: usize },
    #[error("results have not been calculated for this session")]
    ResultsPending,
    #[error("a user profile is required to export the report")]
    ProfileRequired,
}
