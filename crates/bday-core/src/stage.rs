//! The stage enumeration and the itineraries built from it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One step of the birthday surprise.
///
/// Declaration order is the progression order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// "You've been digitally kidnapped!" landing card.
    Intro,
    /// Mission 1: answer a riddle.
    Riddle,
    /// Mission 2: pick three emojis.
    DescribeMe,
    /// Optional: match photo halves.
    MemoryMatch,
    /// Mission 3: the rigged "favorite child" question.
    Quiz,
    /// Optional: fill the hydration meter, slowly.
    Hydration,
    /// The final door: enter the password.
    Unlock,
    /// Curtain overlay, opened by a tap.
    Curtain,
    /// Party lights behind the opened curtain.
    Party,
    /// Countdown, candle, cut.
    Cake,
    /// Tap-to-open gift box.
    Gift,
    /// The closing wish, gallery and coupon.
    Reveal,
}

impl Stage {
    /// All stages in progression order.
    pub const ALL: [Stage; 12] = [
        Stage::Intro,
        Stage::Riddle,
        Stage::DescribeMe,
        Stage::MemoryMatch,
        Stage::Quiz,
        Stage::Hydration,
        Stage::Unlock,
        Stage::Curtain,
        Stage::Party,
        Stage::Cake,
        Stage::Gift,
        Stage::Reveal,
    ];

    /// Mission number shown in the progress bar, for the three missions.
    pub fn mission(self) -> Option<u8> {
        match self {
            Stage::Riddle => Some(1),
            Stage::DescribeMe => Some(2),
            Stage::Quiz => Some(3),
            _ => None,
        }
    }

    /// Whether this stage belongs to the party sequence after the unlock.
    pub fn is_party(self) -> bool {
        self >= Stage::Curtain
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intro => write!(f, "Intro"),
            Self::Riddle => write!(f, "Riddle"),
            Self::DescribeMe => write!(f, "Describe Me"),
            Self::MemoryMatch => write!(f, "Memory Match"),
            Self::Quiz => write!(f, "Quiz"),
            Self::Hydration => write!(f, "Hydration"),
            Self::Unlock => write!(f, "Unlock"),
            Self::Curtain => write!(f, "Curtain"),
            Self::Party => write!(f, "Party"),
            Self::Cake => write!(f, "Cake"),
            Self::Gift => write!(f, "Gift"),
            Self::Reveal => write!(f, "Reveal"),
        }
    }
}

/// The stages played in one session, in order.
///
/// Always a strictly increasing subsequence of [`Stage::ALL`] that starts
/// at [`Stage::Intro`] and ends at [`Stage::Reveal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    stages: Vec<Stage>,
}

impl Itinerary {
    /// Build a validated itinerary.
    pub fn new(stages: Vec<Stage>) -> Result<Self, ConfigError> {
        let (Some(&first), Some(&last)) = (stages.first(), stages.last()) else {
            return Err(ConfigError::EmptyItinerary);
        };
        if first != Stage::Intro {
            return Err(ConfigError::BadFirstStage {
                expected: Stage::Intro,
                found: first,
            });
        }
        if last != Stage::Reveal {
            return Err(ConfigError::BadLastStage {
                expected: Stage::Reveal,
                found: last,
            });
        }
        for pair in stages.windows(2) {
            if pair[0] >= pair[1] {
                return Err(ConfigError::Unordered {
                    earlier: pair[0],
                    later: pair[1],
                });
            }
        }
        Ok(Self { stages })
    }

    /// Every stage, including memory match and hydration.
    pub fn full() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
        }
    }

    /// The three missions, the unlock, and the whole party sequence.
    pub fn classic() -> Self {
        Self {
            stages: vec![
                Stage::Intro,
                Stage::Riddle,
                Stage::DescribeMe,
                Stage::Quiz,
                Stage::Unlock,
                Stage::Curtain,
                Stage::Party,
                Stage::Cake,
                Stage::Gift,
                Stage::Reveal,
            ],
        }
    }

    /// The three missions and the unlock, straight to the reveal.
    pub fn minimal() -> Self {
        Self {
            stages: vec![
                Stage::Intro,
                Stage::Riddle,
                Stage::DescribeMe,
                Stage::Quiz,
                Stage::Unlock,
                Stage::Reveal,
            ],
        }
    }

    /// Look up a preset by name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_lowercase().as_str() {
            "full" => Ok(Self::full()),
            "classic" => Ok(Self::classic()),
            "minimal" => Ok(Self::minimal()),
            other => Err(ConfigError::UnknownItinerary(other.to_string())),
        }
    }

    /// The first stage (always the intro).
    pub fn first(&self) -> Stage {
        self.stages[0]
    }

    /// The terminal stage (always the reveal).
    pub fn last(&self) -> Stage {
        self.stages[self.stages.len() - 1]
    }

    /// The stage that follows `stage`, or `None` at the end or when
    /// `stage` is not part of this itinerary.
    pub fn successor(&self, stage: Stage) -> Option<Stage> {
        let idx = self.position(stage)?;
        self.stages.get(idx + 1).copied()
    }

    /// Index of `stage` within the itinerary.
    pub fn position(&self, stage: Stage) -> Option<usize> {
        self.stages.iter().position(|s| *s == stage)
    }

    /// Whether `stage` is played in this itinerary.
    pub fn contains(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }

    /// The stages in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::classic()
    }
}
