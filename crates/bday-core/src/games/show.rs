//! State for the time-driven party sequence: curtain, cake and gift.

/// State of the curtain overlay.
#[derive(Debug, Clone, Default)]
pub struct Curtain {
    opening: bool,
}

impl Curtain {
    /// Whether the curtain has been tapped and is sliding open.
    pub fn is_opening(&self) -> bool {
        self.opening
    }

    /// Start opening. Returns `false` if it was already opening.
    pub(crate) fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.opening, true)
    }
}

/// Phases of the cake scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CakePhase {
    /// "Make a Wish!" countdown, seconds left.
    Countdown(u8),
    /// Candle blown out.
    Blown,
    /// Cake cut open.
    Cut,
}

impl CakePhase {
    /// The phase after one countdown tick.
    pub fn tick(self) -> Self {
        match self {
            Self::Countdown(n) if n > 1 => Self::Countdown(n - 1),
            Self::Countdown(_) => Self::Blown,
            other => other,
        }
    }
}

/// Phases of the gift scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftPhase {
    /// "Tap the Gift!"
    Closed,
    /// Lid lifting: "Here it comes..."
    Opening,
    /// Light and sparkles.
    Sparkling,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curtain_opens_once() {
        let mut curtain = Curtain::default();
        assert!(!curtain.is_opening());
        assert!(curtain.open());
        assert!(!curtain.open());
        assert!(curtain.is_opening());
    }

    #[test]
    fn cake_counts_down_to_blown() {
        let phase = CakePhase::Countdown(3);
        assert_eq!(phase.tick(), CakePhase::Countdown(2));
        assert_eq!(phase.tick().tick().tick(), CakePhase::Blown);
        assert_eq!(CakePhase::Blown.tick(), CakePhase::Blown);
        assert_eq!(CakePhase::Cut.tick(), CakePhase::Cut);
    }
}
