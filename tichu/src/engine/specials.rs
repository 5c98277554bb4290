//! Helpers for the four special cards' side effects. See spec.md §4.4.

use tichu_elements::seat::Seat;

use crate::model::RoundState;

/// Finds who the lead transfers to after a Dog is discarded: the Dog player's partner if the
/// partner still has cards and hasn't gone out, otherwise the nearest seat after the Dog player
/// (in rotation order) that still has cards.
pub fn dog_lead_transfer(round: &RoundState, dog_player: Seat) -> Seat {
    let partner = dog_player.partner();
    if !round.is_out(partner) && !round.hand(partner).is_empty() {
        return partner;
    }
    for seat in round.seats_after(dog_player) {
        if seat != partner && !round.is_out(seat) && !round.hand(seat).is_empty() {
            return seat;
        }
    }
    // Only the Dog player themself remains with cards; they lead again.
    dog_player
}

#[cfg(test)]
mod tests {
    use super::*;
    use tichu_elements::card::c;
    use tichu_elements::seat::{S0, S1, S2};

    #[test]
    fn dog_transfers_to_partner_when_able() {
        let mut round = RoundState::default();
        round.hands[S2.to_usize()] = vec![c!("5H")];
        assert_eq!(dog_lead_transfer(&round, S0), S2);
    }

    #[test]
    fn dog_transfers_to_next_seat_when_partner_is_out() {
        let mut round = RoundState::default();
        round.out.push(S2);
        round.hands[S1.to_usize()] = vec![c!("5H")];
        assert_eq!(dog_lead_transfer(&round, S0), S1);
    }
}
