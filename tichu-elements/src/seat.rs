//! [`Seat`] newtype (mod-4 arithmetic) and the fixed partnership it implies.

use core::fmt::{Debug, Display, Formatter};
use core::ops::{Add, Sub};
use derive_more::{From, Into};

/// Seat index -- 0, 1, 2, 3 around the table.
///
/// Forced to mod-4 arithmetic; can represent both an absolute seat or the difference between
/// two seats ("relative seat", e.g. a rotation amount).
///
/// Partnerships are fixed by opposite seats: `0` partners `2`, `1` partners `3`. Team *A* is
/// `{0, 2}`, team *B* is `{1, 3}` (see [`Team`]).
///
/// ## Optional `serde` support
///
/// Serializes as the seat index number (0/1/2/3). Deserialization checks the range.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, From, Into)]
pub struct Seat(u8);

pub const S0: Seat = Seat(0);
pub const S1: Seat = Seat(1);
pub const S2: Seat = Seat(2);
pub const S3: Seat = Seat(3);
pub const ALL_SEATS: [Seat; 4] = [S0, S1, S2, S3];

impl Seat {
    pub const fn new(x: u8) -> Self { Seat(x & 3) }

    pub const fn add(self, other: Seat) -> Seat {
        Seat(self.0.wrapping_add(other.0) & 3)
    }

    pub const fn add_u8(self, other: u8) -> Seat {
        Seat(self.0.wrapping_add(other) & 3)
    }

    pub const fn sub(self, other: Seat) -> Seat {
        Seat(self.0.wrapping_sub(other.0) & 3)
    }

    pub const fn sub_u8(self, other: u8) -> Seat {
        Seat(self.0.wrapping_sub(other) & 3)
    }

    pub const fn to_u8(self) -> u8 { self.0 }
    pub const fn to_usize(self) -> usize { self.0 as usize }

    /// The seat immediately after me in rotation order.
    pub const fn succ(self) -> Self { self.add(S1) }

    /// My fixed partner (the seat directly across the table).
    pub const fn partner(self) -> Self { self.add(S2) }

    /// The seat immediately before me in rotation order.
    pub const fn pred(self) -> Self { self.add(S3) }

    /// The fixed team this seat belongs to.
    pub const fn team(self) -> Team {
        if self.0 & 1 == 0 { Team::A } else { Team::B }
    }
}

/// One of the two fixed partnerships: *A* = `{0, 2}`, *B* = `{1, 3}`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const fn other(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Team::A => [S0, S2],
            Team::B => [S1, S3],
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match self { Team::A => "A", Team::B => "B" })
    }
}

impl From<usize> for Seat {
    fn from(x: usize) -> Self { Self::new(x as u8) }
}

impl Into<usize> for Seat {
    fn into(self) -> usize { self.0 as usize }
}

impl Add for Seat {
    type Output = Seat;
    fn add(self, rhs: Self) -> Self::Output { self.add(rhs) }
}

impl Add<u8> for Seat {
    type Output = Seat;
    fn add(self, rhs: u8) -> Self::Output { self.add_u8(rhs) }
}

impl Sub for Seat {
    type Output = Seat;
    fn sub(self, rhs: Self) -> Self::Output { self.sub(rhs) }
}

impl Sub<u8> for Seat {
    type Output = Seat;
    fn sub(self, rhs: u8) -> Self::Output { self.sub_u8(rhs) }
}

impl Debug for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Seat({})", self.0)
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shorthand for [`Seat::new`].
pub const fn seat(i: u8) -> Seat { Seat::new(i) }

/// Returns an array of all seats, starting from the given seat, in rotation order.
///
/// Example:
/// ```
/// use tichu_elements::seat::*;
/// assert_eq!(all_seats_from(S2), [S2, S3, S0, S1]);
/// ```
pub const fn all_seats_from(seat: Seat) -> [Seat; 4] {
    [seat.add(S0), seat.add(S1), seat.add(S2), seat.add(S3)]
}

/// Returns an array of the 3 seats after the given seat, in rotation order.
///
/// Example:
/// ```
/// use tichu_elements::seat::*;
/// assert_eq!(other_seats_after(S2), [S3, S0, S1]);
/// ```
pub const fn other_seats_after(seat: Seat) -> [Seat; 3] {
    [seat.add(S1), seat.add(S2), seat.add(S3)]
}

#[cfg(feature = "serde")]
mod seat_serde {
    use core::fmt::Formatter;
    use serde::{*};
    use serde::de::{Error, Visitor};
    use super::*;

    impl Serialize for Seat {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error> where S: Serializer {
            s.serialize_u8(self.0)
        }
    }

    impl<'de> Deserialize<'de> for Seat {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
            struct SeatVisitor;
            impl<'a> Visitor<'a> for SeatVisitor {
                type Value = Seat;

                fn expecting(&self, f: &mut Formatter) -> core::fmt::Result {
                    write!(f, "0..=3")
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> where E: Error {
                    if (0..=3).contains(&v) {
                        Ok(Seat(v as u8))
                    } else {
                        Err(E::custom("out of range"))
                    }
                }
            }
            deserializer.deserialize_u8(SeatVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_is_opposite_seat() {
        assert_eq!(S0.partner(), S2);
        assert_eq!(S1.partner(), S3);
        assert_eq!(S2.partner(), S0);
        assert_eq!(S3.partner(), S1);
    }

    #[test]
    fn teams_are_fixed() {
        assert_eq!(S0.team(), Team::A);
        assert_eq!(S2.team(), Team::A);
        assert_eq!(S1.team(), Team::B);
        assert_eq!(S3.team(), Team::B);
        assert_eq!(Team::A.other(), Team::B);
        assert_eq!(Team::A.seats(), [S0, S2]);
    }

    #[test]
    fn rotation_helpers() {
        assert_eq!(all_seats_from(S2), [S2, S3, S0, S1]);
        assert_eq!(other_seats_after(S2), [S3, S0, S1]);
        assert_eq!(S3.succ(), S0);
        assert_eq!(S0.pred(), S3);
    }
}
