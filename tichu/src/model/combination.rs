//! [`Combination`] -- classifying a multiset of cards into a tagged playable shape, and the
//! partial order over those shapes.

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use tichu_elements::card::{Card, Rank, Suit, DRAGON_VALUE, MAH_JONG_VALUE};

/// Why a card multiset failed to classify into any [`Combination`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidCombinationReason {
    #[error("no cards were played")]
    Empty,
    #[error("the same card was played twice")]
    DuplicateCard,
    #[error("Dragon may only be played as a single")]
    DragonMustBeSingle,
    #[error("Dog may only be played as a single")]
    DogMustBeSingle,
    #[error("Phoenix may not form a bomb")]
    PhoenixForbiddenInBomb,
    #[error("a pair requires two cards of the same rank, or one plus Phoenix")]
    InvalidPair,
    #[error("a triple requires three cards of the same rank, or two plus Phoenix")]
    InvalidTriple,
    #[error("a pair sequence requires an even number of cards forming consecutive pairs")]
    InvalidPairSequence,
    #[error("a rank may not appear three times in a pair sequence")]
    PairSequenceTripleRank,
    #[error("a full house requires a triple and a pair")]
    InvalidFullHouse,
    #[error("a straight requires consecutive rank values, excluding Dragon")]
    InvalidStraight,
    #[error("Phoenix cannot extend a straight above Ace")]
    PhoenixAboveAce,
    #[error("no legal combination matches the cards played")]
    NoMatchingCombination,
}

/// The kind of bomb: unconditionally beats any non-bomb.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BombKind {
    FourOfAKind(Rank),
    StraightFlush { length: u8, top_value: u8 },
}

/// Context needed to resolve the value of a Phoenix played as a single. Irrelevant to every
/// other shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PhoenixSingleContext {
    /// Phoenix opens a new trick: value 1.5, half a step above Mah Jong.
    Leading,
    /// Phoenix is played onto an existing single of the given value: value = that + 0.5,
    /// capped strictly below Dragon.
    OnTopOf(OrderedF32),
}

/// A thin, comparable wrapper over `f32` for the handful of half-step single values the game
/// actually produces (1.0, 1.5, 2.0..14.0, 14.5, 16.0). None of these are ever NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedF32(pub f32);

impl Eq for OrderedF32 {}
impl Ord for OrderedF32 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).expect("game-derived single values are never NaN")
    }
}

/// A classified, playable card shape. See spec.md §3 "Combination".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combination {
    Single { card: Card, value: OrderedF32 },
    Pair { rank: Rank },
    Triple { rank: Rank },
    PairSequence { count: u8, top_rank: Rank },
    FullHouse { triple_rank: Rank },
    Straight { length: u8, top_value: u8 },
    Bomb(BombKind),
}

impl Combination {
    pub const fn is_bomb(&self) -> bool { matches!(self, Combination::Bomb(_)) }
}

/// The result of comparing two combinations under the game's partial order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Comparison {
    Greater,
    LesserOrEqual,
    Incomparable,
}

/// Compares `challenger` against `incumbent` (the current highest play in a trick).
/// `Comparison::Greater` means `challenger` beats `incumbent`.
pub fn compare(challenger: &Combination, incumbent: &Combination) -> Comparison {
    use Combination::*;
    match (challenger, incumbent) {
        (Bomb(a), Bomb(b)) => compare_bombs(*a, *b),
        (Bomb(_), _) => Comparison::Greater,
        (_, Bomb(_)) => Comparison::Incomparable,

        (Single { value: a, .. }, Single { value: b, .. }) => from_ord(a.cmp(b)),
        (Pair { rank: a }, Pair { rank: b }) => from_ord(a.cmp(b)),
        (Triple { rank: a }, Triple { rank: b }) => from_ord(a.cmp(b)),
        (FullHouse { triple_rank: a }, FullHouse { triple_rank: b }) => from_ord(a.cmp(b)),
        (PairSequence { count: ca, top_rank: a }, PairSequence { count: cb, top_rank: b })
            if ca == cb => from_ord(a.cmp(b)),
        (Straight { length: la, top_value: a }, Straight { length: lb, top_value: b })
            if la == lb => from_ord(a.cmp(b)),
        _ => Comparison::Incomparable,
    }
}

fn from_ord(o: std::cmp::Ordering) -> Comparison {
    if o.is_gt() { Comparison::Greater } else { Comparison::LesserOrEqual }
}

fn compare_bombs(a: BombKind, b: BombKind) -> Comparison {
    use BombKind::*;
    match (a, b) {
        (StraightFlush { .. }, FourOfAKind(_)) => Comparison::Greater,
        (FourOfAKind(_), StraightFlush { .. }) => Comparison::LesserOrEqual,
        (FourOfAKind(ra), FourOfAKind(rb)) => from_ord(ra.cmp(&rb)),
        (StraightFlush { length: la, top_value: ta }, StraightFlush { length: lb, top_value: tb }) => {
            from_ord((la, ta).cmp(&(lb, tb)))
        }
    }
}

/// Splits a card slice into standard cards and the specials present, rejecting duplicates.
struct Parts {
    standard: Vec<(Suit, Rank)>,
    has_mah_jong: bool,
    has_dog: bool,
    has_phoenix: bool,
    has_dragon: bool,
}

fn split(cards: &[Card]) -> Result<Parts, InvalidCombinationReason> {
    if cards.is_empty() { return Err(InvalidCombinationReason::Empty); }
    let mut seen = FxHashSet::default();
    for c in cards {
        if !seen.insert(*c) { return Err(InvalidCombinationReason::DuplicateCard); }
    }
    let mut parts = Parts {
        standard: Vec::new(),
        has_mah_jong: false,
        has_dog: false,
        has_phoenix: false,
        has_dragon: false,
    };
    for c in cards {
        match c {
            Card::Standard(suit, rank) => parts.standard.push((*suit, *rank)),
            Card::MahJong => parts.has_mah_jong = true,
            Card::Dog => parts.has_dog = true,
            Card::Phoenix => parts.has_phoenix = true,
            Card::Dragon => parts.has_dragon = true,
        }
    }
    Ok(parts)
}

/// Classifies an arbitrary card multiset into the strongest [`Combination`] it satisfies.
pub fn classify(
    cards: &[Card],
    phoenix_ctx: PhoenixSingleContext,
) -> Result<Combination, InvalidCombinationReason> {
    let parts = split(cards)?;

    if cards.len() == 1 {
        return classify_single(cards[0], phoenix_ctx);
    }
    if parts.has_dragon {
        return Err(InvalidCombinationReason::DragonMustBeSingle);
    }
    if parts.has_dog {
        return Err(InvalidCombinationReason::DogMustBeSingle);
    }

    if let Some(combo) = try_bomb_four_of_a_kind(&parts) { return Ok(combo); }
    if let Some(combo) = try_bomb_straight_flush(&parts) { return Ok(combo); }

    match cards.len() {
        2 => try_pair(&parts),
        3 => try_triple(&parts),
        5 => try_full_house(&parts).or_else(|_| try_straight(&parts, parts.has_mah_jong)),
        n if n % 2 == 0 && n >= 4 => {
            try_pair_sequence(&parts).or_else(|_| try_straight(&parts, parts.has_mah_jong))
        }
        n if n >= 5 => try_straight(&parts, parts.has_mah_jong),
        _ => Err(InvalidCombinationReason::NoMatchingCombination),
    }
}

fn classify_single(
    card: Card,
    phoenix_ctx: PhoenixSingleContext,
) -> Result<Combination, InvalidCombinationReason> {
    let value = match card {
        Card::Standard(_, rank) => rank.value() as f32,
        Card::MahJong => MAH_JONG_VALUE as f32,
        Card::Dragon => DRAGON_VALUE as f32,
        Card::Dog => return Ok(Combination::Single { card, value: OrderedF32(0.0) }),
        Card::Phoenix => match phoenix_ctx {
            PhoenixSingleContext::Leading => 1.5,
            PhoenixSingleContext::OnTopOf(top) => (top.0 + 0.5).min((DRAGON_VALUE - 1) as f32),
        },
    };
    Ok(Combination::Single { card, value: OrderedF32(value) })
}

fn try_pair(parts: &Parts) -> Result<Combination, InvalidCombinationReason> {
    match (parts.standard.as_slice(), parts.has_phoenix) {
        ([(_, r1), (_, r2)], false) if r1 == r2 => Ok(Combination::Pair { rank: *r1 }),
        ([(_, r)], true) => Ok(Combination::Pair { rank: *r }),
        _ => Err(InvalidCombinationReason::InvalidPair),
    }
}

fn try_triple(parts: &Parts) -> Result<Combination, InvalidCombinationReason> {
    match (parts.standard.as_slice(), parts.has_phoenix) {
        ([(_, r1), (_, r2), (_, r3)], false) if r1 == r2 && r2 == r3 => {
            Ok(Combination::Triple { rank: *r1 })
        }
        ([(_, r1), (_, r2)], true) if r1 == r2 => Ok(Combination::Triple { rank: *r1 }),
        _ => Err(InvalidCombinationReason::InvalidTriple),
    }
}

fn rank_histogram(parts: &Parts) -> FxHashMap<Rank, u8> {
    let mut hist = FxHashMap::default();
    for (_, rank) in &parts.standard {
        *hist.entry(*rank).or_insert(0) += 1;
    }
    hist
}

fn try_pair_sequence(parts: &Parts) -> Result<Combination, InvalidCombinationReason> {
    let hist = rank_histogram(parts);
    if hist.values().any(|&n| n >= 3) {
        return Err(InvalidCombinationReason::PairSequenceTripleRank);
    }
    let mut ranks: Vec<Rank> = hist.keys().copied().collect();
    ranks.sort();

    let incomplete: Vec<Rank> = ranks.iter().copied().filter(|r| hist[r] == 1).collect();
    if incomplete.len() > 1 || (incomplete.len() == 1 && !parts.has_phoenix) {
        return Err(InvalidCombinationReason::InvalidPairSequence);
    }
    if incomplete.is_empty() && parts.has_phoenix {
        // Phoenix has nothing to complete.
        return Err(InvalidCombinationReason::InvalidPairSequence);
    }
    if ranks.is_empty() {
        return Err(InvalidCombinationReason::InvalidPairSequence);
    }
    let is_consecutive = ranks.iter().tuple_windows().all(|(a, b)| b.value() == a.value() + 1);
    if !is_consecutive {
        return Err(InvalidCombinationReason::InvalidPairSequence);
    }
    let count = ranks.len() as u8;
    let top_rank = *ranks.last().unwrap();
    Ok(Combination::PairSequence { count, top_rank })
}

fn try_full_house(parts: &Parts) -> Result<Combination, InvalidCombinationReason> {
    if parts.standard.len() + if parts.has_phoenix { 1 } else { 0 } != 5 {
        return Err(InvalidCombinationReason::InvalidFullHouse);
    }
    let hist = rank_histogram(parts);
    let mut by_count: Vec<(Rank, u8)> = hist.into_iter().collect();
    by_count.sort_by_key(|(r, _)| *r);

    match (by_count.as_slice(), parts.has_phoenix) {
        ([(r2, 2), (r3, 3)], false) | ([(r3, 3), (r2, 2)], false) => {
            let _ = r2;
            Ok(Combination::FullHouse { triple_rank: *r3 })
        }
        ([(ra, 2), (rb, 2)], true) => {
            // Phoenix completes the higher pair into the triple.
            let triple_rank = ra.max(rb);
            Ok(Combination::FullHouse { triple_rank: *triple_rank })
        }
        _ => Err(InvalidCombinationReason::InvalidFullHouse),
    }
}

fn try_straight(parts: &Parts, has_mah_jong: bool) -> Result<Combination, InvalidCombinationReason> {
    if parts.has_dragon || parts.has_dog {
        return Err(InvalidCombinationReason::InvalidStraight);
    }
    let mut values: Vec<u8> = parts.standard.iter().map(|(_, r)| r.value()).collect();
    if has_mah_jong {
        values.push(MAH_JONG_VALUE);
    }
    values.sort_unstable();
    if values.windows(2).any(|w| w[0] == w[1]) {
        return Err(InvalidCombinationReason::InvalidStraight);
    }

    let total_len = values.len() + if parts.has_phoenix { 1 } else { 0 };
    if total_len < 5 {
        return Err(InvalidCombinationReason::InvalidStraight);
    }

    if !parts.has_phoenix {
        let is_consecutive = values.iter().tuple_windows().all(|(a, b)| *b == a + 1);
        if !is_consecutive {
            return Err(InvalidCombinationReason::InvalidStraight);
        }
        return Ok(Combination::Straight { length: values.len() as u8, top_value: *values.last().unwrap() });
    }

    // Exactly one gap may be filled by Phoenix, or Phoenix may extend the top by one.
    let mut gaps = 0usize;
    for w in values.windows(2) {
        let diff = w[1] - w[0];
        if diff == 0 {
            return Err(InvalidCombinationReason::InvalidStraight);
        } else if diff == 2 {
            gaps += 1;
        } else if diff > 2 {
            return Err(InvalidCombinationReason::InvalidStraight);
        }
    }
    if gaps > 1 {
        return Err(InvalidCombinationReason::InvalidStraight);
    }
    if gaps == 1 {
        let top = *values.last().unwrap();
        return Ok(Combination::Straight { length: total_len as u8, top_value: top });
    }
    // No internal gap: Phoenix extends the top by one.
    let top = *values.last().unwrap();
    if top + 1 > 14 {
        return Err(InvalidCombinationReason::PhoenixAboveAce);
    }
    Ok(Combination::Straight { length: total_len as u8, top_value: top + 1 })
}

fn try_bomb_four_of_a_kind(parts: &Parts) -> Option<Combination> {
    if parts.has_phoenix || parts.has_dog || parts.has_dragon || parts.has_mah_jong {
        return None;
    }
    if parts.standard.len() != 4 { return None; }
    let rank = parts.standard[0].1;
    if parts.standard.iter().all(|(_, r)| *r == rank) {
        Some(Combination::Bomb(BombKind::FourOfAKind(rank)))
    } else {
        None
    }
}

fn try_bomb_straight_flush(parts: &Parts) -> Option<Combination> {
    if parts.has_phoenix || parts.has_dog || parts.has_dragon || parts.has_mah_jong {
        return None;
    }
    if parts.standard.len() < 5 { return None; }
    let suit = parts.standard[0].0;
    if !parts.standard.iter().all(|(s, _)| *s == suit) { return None; }
    let mut values: Vec<u8> = parts.standard.iter().map(|(_, r)| r.value()).collect();
    values.sort_unstable();
    if values.windows(2).any(|w| w[1] != w[0] + 1) { return None; }
    Some(Combination::Bomb(BombKind::StraightFlush {
        length: values.len() as u8,
        top_value: *values.last().unwrap(),
    }))
}
