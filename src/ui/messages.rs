//! Advisory-code resolution. The core only ever emits opaque codes; this
//! table is the single place they become user-facing words.

pub fn text(code: &str) -> &'static str {
    match code {
        "info_first_turn" => "The first token cannot go in the middle four cells",
        "info_occupied" => "That cell is already taken",
        "info_no_color_share" => "The card does not share a color with the last discarded card",
        "info_out_of_bounds" => "That is not a board cell",
        "info_game_over" => "The round is over",
        "opponent_cannot_play" => "Your opponent has no move left: you win",
        "cannot_play" => "No move left for you this round",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MoveError;

    #[test]
    fn every_rejection_code_resolves() {
        let errors = [
            MoveError::OutOfBounds,
            MoveError::FirstTurnCenter,
            MoveError::Occupied,
            MoveError::NoSharedColor,
            MoveError::GameOver,
        ];
        for err in errors {
            assert!(!text(err.advisory().code).is_empty(), "{err:?} has no text");
        }
    }

    #[test]
    fn unknown_codes_resolve_to_nothing() {
        assert_eq!(text("not_a_code"), "");
    }
}
