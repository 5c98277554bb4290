//! [`Card`] -- the 56 cards of a Tichu deck.
//!
//! ## Ref
//! - <https://en.wikipedia.org/wiki/Tichu>
//!
//! Five disjoint kinds of card exist: 52 *standard* playing cards (suit x rank), and four
//! unique specials (Mah Jong, Dog, Phoenix, Dragon). Only the specials carry special-case rules;
//! everything else in the engine treats a `Card` as an opaque, immutable value.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::typedefs::UnspecifiedError;

/// Suit of a standard card. Carries no rank ordering of its own; only used for straight flushes
/// (C2) and display.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

impl Suit {
    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Rank of a standard card. The discriminant *is* the rank value (2..=14), so [`Rank::value`]
/// is a no-op cast; this mirrors how the straight/sequence logic in [`crate::card`]'s sibling
/// `tichu::model::combination` wants a plain `u8` value space shared with Mah Jong (1) and
/// Dragon (16).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight,
    Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
];

impl Rank {
    /// The rank value used throughout combination ordering (2..=14).
    pub const fn value(self) -> u8 { self as u8 }

    pub const fn from_value(v: u8) -> Option<Self> {
        match v {
            2 => Some(Rank::Two), 3 => Some(Rank::Three), 4 => Some(Rank::Four),
            5 => Some(Rank::Five), 6 => Some(Rank::Six), 7 => Some(Rank::Seven),
            8 => Some(Rank::Eight), 9 => Some(Rank::Nine), 10 => Some(Rank::Ten),
            11 => Some(Rank::Jack), 12 => Some(Rank::Queen), 13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2', Rank::Three => '3', Rank::Four => '4', Rank::Five => '5',
            Rank::Six => '6', Rank::Seven => '7', Rank::Eight => '8', Rank::Nine => '9',
            Rank::Ten => 'T', Rank::Jack => 'J', Rank::Queen => 'Q', Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Rank::Two), '3' => Some(Rank::Three), '4' => Some(Rank::Four),
            '5' => Some(Rank::Five), '6' => Some(Rank::Six), '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight), '9' => Some(Rank::Nine), 'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack), 'Q' => Some(Rank::Queen), 'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    /// The next rank up, or `None` above Ace (Phoenix/straight extension both stop here;
    /// see spec.md C2 "Phoenix may ... extend the top *only if topValue+1 <= 14*").
    pub const fn succ(self) -> Option<Self> { Self::from_value(self.value() + 1) }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Rank value of Mah Jong, used wherever straights/rank-values are compared across card kinds.
pub const MAH_JONG_VALUE: u8 = 1;
/// Rank value of Dragon: strictly above Ace, used only for single-card comparison.
pub const DRAGON_VALUE: u8 = 16;
/// Contextual value of a Phoenix played as the opening single of a trick (half a step above
/// Mah Jong). See spec.md C2 "Phoenix as a single lead".
pub const PHOENIX_LEAD_VALUE: f32 = 1.5;

/// One of the 56 cards in a Tichu deck.
///
/// Exactly one of a standard suited card or one of the four unique specials. See spec.md §3.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    Standard(Suit, Rank),
    MahJong,
    Dog,
    Phoenix,
    Dragon,
}

impl Card {
    /// Card-point value accrued by whoever's stack this card ends up in. See spec.md §3.
    pub const fn card_points(self) -> i32 {
        match self {
            Card::Standard(_, Rank::Five) => 5,
            Card::Standard(_, Rank::Ten) => 10,
            Card::Standard(_, Rank::King) => 10,
            Card::Standard(_, _) => 0,
            Card::MahJong => 0,
            Card::Dog => 0,
            Card::Phoenix => -25,
            Card::Dragon => 25,
        }
    }

    pub const fn is_standard(self) -> bool { matches!(self, Card::Standard(_, _)) }
    pub const fn is_special(self) -> bool { !self.is_standard() }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Standard(suit, _) => Some(suit),
            _ => None,
        }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Standard(_, rank) => Some(rank),
            _ => None,
        }
    }

    /// A UI-stable sort key. Per spec.md C1, "specified but not used by any rule" -- combination
    /// classification and ordering never call this.
    pub const fn sort_value(self) -> u8 {
        match self {
            Card::Dog => 0,
            Card::MahJong => 1,
            Card::Standard(_, rank) => rank.value(),
            Card::Phoenix => 15,
            Card::Dragon => 17,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Card::Standard(suit, rank) => write!(f, "{}{}", rank, suit),
            Card::MahJong => write!(f, "MJ"),
            Card::Dog => write!(f, "DOG"),
            Card::Phoenix => write!(f, "PHX"),
            Card::Dragon => write!(f, "DRA"),
        }
    }
}

impl FromStr for Card {
    type Err = UnspecifiedError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MJ" => return Ok(Card::MahJong),
            "DOG" => return Ok(Card::Dog),
            "PHX" => return Ok(Card::Phoenix),
            "DRA" => return Ok(Card::Dragon),
            _ => {}
        }
        let mut chars = s.chars();
        let (rank_char, suit_char) = match (chars.next(), chars.next()) {
            (Some(r), Some(s)) => (r, s),
            _ => return Err(UnspecifiedError),
        };
        if chars.next().is_some() { return Err(UnspecifiedError); }
        let rank = Rank::from_char(rank_char).ok_or(UnspecifiedError)?;
        let suit = Suit::from_char(suit_char).ok_or(UnspecifiedError)?;
        Ok(Card::Standard(suit, rank))
    }
}

impl TryFrom<&str> for Card {
    type Error = UnspecifiedError;
    fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
}

/// Shortcut for creating a card literal through its string shorthand, e.g. `c!("5H")`,
/// `c!("DOG")`. Panics on malformed input -- only meant for tests and fixtures.
#[macro_export]
macro_rules! c {
    ($s:expr) => {{
        use core::str::FromStr;
        $crate::card::Card::from_str($s).unwrap()
    }};
}
pub use c;

/// The ordering key used to keep a hand sorted for display only; Dragon does not natively sort
/// against a Phoenix single's contextual value -- that comparison lives in the combination logic,
/// not here. This impl exists purely so hands can be displayed in a stable order.
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_value().cmp(&other.sort_value())
            .then_with(|| self.suit().map(|s| s.to_char()).cmp(&other.suit().map(|s| s.to_char())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_points_match_spec_table() {
        assert_eq!(Card::Standard(Suit::Clubs, Rank::Five).card_points(), 5);
        assert_eq!(Card::Standard(Suit::Hearts, Rank::Ten).card_points(), 10);
        assert_eq!(Card::Standard(Suit::Spades, Rank::King).card_points(), 10);
        assert_eq!(Card::Standard(Suit::Diamonds, Rank::Ace).card_points(), 0);
        assert_eq!(Card::MahJong.card_points(), 0);
        assert_eq!(Card::Dog.card_points(), 0);
        assert_eq!(Card::Phoenix.card_points(), -25);
        assert_eq!(Card::Dragon.card_points(), 25);
    }

    #[test]
    fn shorthand_roundtrip() {
        for suit in ALL_SUITS {
            for rank in ALL_RANKS {
                let card = Card::Standard(suit, rank);
                let s = card.to_string();
                let parsed: Card = s.parse().unwrap();
                assert_eq!(card, parsed);
            }
        }
        for special in [Card::MahJong, Card::Dog, Card::Phoenix, Card::Dragon] {
            let s = special.to_string();
            let parsed: Card = s.parse().unwrap();
            assert_eq!(special, parsed);
        }
    }

    #[test]
    fn macro_matches_from_str() {
        assert_eq!(c!("TC"), Card::Standard(Suit::Clubs, Rank::Ten));
        assert_eq!(c!("DOG"), Card::Dog);
    }

    #[test]
    fn rank_value_is_contiguous() {
        for window in ALL_RANKS.windows(2) {
            assert_eq!(window[1].value(), window[0].value() + 1);
        }
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Ace.succ(), None);
    }
}
