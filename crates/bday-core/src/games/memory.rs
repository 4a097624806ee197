//! Memory match: every photo is cut into a left and a right half, and the
//! player pairs the halves back up.

use rand::Rng;
use rand::seq::SliceRandom;

/// Which half of a photo a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// The left half.
    Left,
    /// The right half.
    Right,
}

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Index of the source photo.
    pub photo: usize,
    /// Which half of the photo this card shows.
    pub half: Half,
    /// Whether the card is currently shown.
    pub face_up: bool,
    /// Whether the card has been paired. Matched cards stay face up.
    pub matched: bool,
}

/// What a click on a card did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// The click was not accepted.
    Ignored,
    /// The card turned face up; one more is needed for a comparison.
    Revealed,
    /// The second card turned face up and a comparison is now pending.
    Compare {
        /// Whether the two face-up cards come from the same photo.
        matched: bool,
    },
}

/// The memory-match board.
#[derive(Debug, Clone)]
pub struct MemoryBoard {
    cards: Vec<Card>,
    revealed: Vec<usize>,
    resolving: bool,
}

impl MemoryBoard {
    /// Deal `photos` pairs in the given order (left half, then right half).
    pub fn ordered(photos: usize) -> Self {
        let cards = (0..photos)
            .flat_map(|photo| {
                [Half::Left, Half::Right].map(|half| Card {
                    photo,
                    half,
                    face_up: false,
                    matched: false,
                })
            })
            .collect();
        Self {
            cards,
            revealed: Vec::with_capacity(2),
            resolving: false,
        }
    }

    /// Deal `photos` pairs and shuffle them.
    pub fn shuffled<R: Rng>(photos: usize, rng: &mut R) -> Self {
        let mut board = Self::ordered(photos);
        board.cards.shuffle(rng);
        board
    }

    /// Click the card at `index`.
    ///
    /// Accepted only while fewer than two cards are face up, no comparison
    /// is pending, and the card is neither matched nor already face up.
    pub fn flip(&mut self, index: usize) -> Flip {
        if self.resolving || self.revealed.len() >= 2 {
            return Flip::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return Flip::Ignored;
        };
        if card.matched || card.face_up {
            return Flip::Ignored;
        }
        card.face_up = true;
        self.revealed.push(index);

        if let [a, b] = self.revealed[..] {
            self.resolving = true;
            Flip::Compare {
                matched: self.cards[a].photo == self.cards[b].photo,
            }
        } else {
            Flip::Revealed
        }
    }

    /// Settle a pending comparison: pairs become matched, mismatches flip
    /// back face down. Returns whether the pair matched.
    pub fn resolve(&mut self) -> bool {
        let [a, b] = self.revealed[..] else {
            return false;
        };
        let matched = self.cards[a].photo == self.cards[b].photo;
        for idx in [a, b] {
            let card = &mut self.cards[idx];
            if matched {
                card.matched = true;
            } else {
                card.face_up = false;
            }
        }
        self.revealed.clear();
        self.resolving = false;
        matched
    }

    /// Whether every card has been matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    /// Whether a comparison is pending.
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// The cards in grid order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of matched cards.
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Grid index of the card showing `half` of `photo`.
    pub fn position_of(&self, photo: usize, half: Half) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.photo == photo && c.half == half)
    }
}
