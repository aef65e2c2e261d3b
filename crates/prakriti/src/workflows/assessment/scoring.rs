use serde::{Deserialize, Serialize};

use super::answers::Answer;
use super::domain::Dosha;

/// Summed response weights per dosha before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RawScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl RawScores {
    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    fn add(&mut self, dosha: Dosha, weight: u32) {
        match dosha {
            Dosha::Vata => self.vata += weight,
            Dosha::Pitta => self.pitta += weight,
            Dosha::Kapha => self.kapha += weight,
        }
    }
}

/// Percentage split across the three doshas. Each value is rounded on its
/// own, so the sum can land one or two points away from 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl ScoreDistribution {
    /// Used when no weight was recorded and when a serialized distribution
    /// cannot be trusted.
    pub const BALANCED: Self = Self {
        vata: 33,
        pitta: 33,
        kapha: 34,
    };

    pub const fn balanced() -> Self {
        Self::BALANCED
    }

    pub fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.vata) + u32::from(self.pitta) + u32::from(self.kapha)
    }

    pub fn is_valid(&self) -> bool {
        Dosha::ordered()
            .into_iter()
            .all(|dosha| self.get(dosha) <= 100)
    }

    pub fn entries(&self) -> [(Dosha, u8); 3] {
        Dosha::ordered().map(|dosha| (dosha, self.get(dosha)))
    }

    /// Doshas ordered by descending percentage; equal scores keep the fixed
    /// Vata, Pitta, Kapha priority.
    pub fn ranked(&self) -> [Dosha; 3] {
        let mut ranked = Dosha::ordered();
        ranked.sort_by(|a, b| {
            self.get(*b)
                .cmp(&self.get(*a))
                .then_with(|| a.priority().cmp(&b.priority()))
        });
        ranked
    }

    pub fn constitution(&self) -> Constitution {
        let [primary, secondary, _] = self.ranked();
        Constitution { primary, secondary }
    }
}

impl Default for ScoreDistribution {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// The two dominant doshas of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constitution {
    pub primary: Dosha,
    pub secondary: Dosha,
}

impl Constitution {
    pub fn label(&self) -> String {
        format!("{}-{}", self.primary.label(), self.secondary.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreAggregate {
    pub raw: RawScores,
    pub distribution: ScoreDistribution,
    /// Set when the recorded weight summed to zero and the balanced
    /// distribution was substituted.
    pub fallback: bool,
}

pub fn aggregate<'a, I>(answers: I) -> ScoreAggregate
where
    I: IntoIterator<Item = &'a Answer>,
{
    let mut raw = RawScores::default();
    for answer in answers {
        raw.add(answer.dosha, answer.level.weight());
    }

    let total = raw.total();
    if total == 0 {
        return ScoreAggregate {
            raw,
            distribution: ScoreDistribution::BALANCED,
            fallback: true,
        };
    }

    ScoreAggregate {
        raw,
        distribution: ScoreDistribution {
            vata: percentage(raw.vata, total),
            pitta: percentage(raw.pitta, total),
            kapha: percentage(raw.kapha, total),
        },
        fallback: false,
    }
}

// round(part / total * 100) with halves rounded up, in integer arithmetic.
fn percentage(part: u32, total: u32) -> u8 {
    let part = u64::from(part);
    let total = u64::from(total);
    let rounded = (part * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
