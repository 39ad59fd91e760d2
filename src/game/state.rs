use rand::rngs::StdRng;
use rand::SeedableRng;

use super::board::{Board, Pos, Tile};
use super::card::CardKind;
use super::player::Player;

/// Tokens each player starts with. 16 cells split between two players.
pub const TOKENS_PER_PLAYER: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player 2 is the computer.
    OnePlayer,
    /// Hot-seat: both players share the same input path.
    TwoPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// An advisory message code with a display duration. The core never resolves
/// codes to text; that is the job of the frontend's message table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advisory {
    pub code: &'static str,
    pub secs: f32,
}

impl Advisory {
    /// Shown to the player who just moved when the other side has no legal
    /// placement left.
    pub fn opponent_cannot_play() -> Self {
        Advisory {
            code: "opponent_cannot_play",
            secs: 100.0,
        }
    }

    /// Shown to the player who was blocked out of a move.
    pub fn cannot_play() -> Self {
        Advisory {
            code: "cannot_play",
            secs: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Position outside the 4x4 grid.
    OutOfBounds,
    /// First turn placements must avoid the central 2x2 block.
    FirstTurnCenter,
    /// The target cell no longer holds a card.
    Occupied,
    /// The target card does not share a color with the stack top.
    NoSharedColor,
    /// The outcome is terminal; only restart or return-to-menu are accepted.
    GameOver,
}

impl MoveError {
    /// The advisory key and display duration for this rejection.
    pub fn advisory(self) -> Advisory {
        let (code, secs) = match self {
            MoveError::OutOfBounds => ("info_out_of_bounds", 2.0),
            MoveError::FirstTurnCenter => ("info_first_turn", 2.0),
            MoveError::Occupied => ("info_occupied", 2.0),
            MoveError::NoSharedColor => ("info_no_color_share", 2.0),
            MoveError::GameOver => ("info_game_over", 2.0),
        };
        Advisory { code, secs }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Restart is only accepted once the outcome is terminal.
    RoundInProgress,
}

/// What a successful placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The card removed from the board; it is now the stack top.
    pub removed: CardKind,
    /// The mover won because the other side was left without a legal
    /// placement, rather than by completing a shape.
    pub forced_win: bool,
}

/// One game of Chroma Four: the board, the turn machine, and the stack-top
/// card that gates the next placement. Owned by exactly one caller; every
/// operation is a plain method on this context.
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    board: Board,
    stack_top: Option<CardKind>,
    current_player: Player,
    first_turn: bool,
    remaining: [u8; 2],
    outcome: Option<GameOutcome>,
    /// Pacing gate for the computer's move: seconds until an already-computed
    /// move may be applied.
    cooldown: f32,
    ai_pause_secs: f32,
    rng: StdRng,
}

impl GameSession {
    /// Start a fresh game with a shuffled board. `ai_pause_secs` is the
    /// pacing cooldown armed whenever the turn passes to the computer in
    /// one-player mode.
    pub fn new(mode: GameMode, ai_pause_secs: f32) -> Self {
        let mut rng = StdRng::from_os_rng();
        let board = Board::shuffled(&mut rng);
        GameSession {
            mode,
            board,
            stack_top: None,
            current_player: Player::One,
            first_turn: true,
            remaining: [TOKENS_PER_PLAYER; 2],
            outcome: None,
            cooldown: 0.0,
            ai_pause_secs,
            rng,
        }
    }

    /// Resume from a set position. The first-turn rule applies only when no
    /// move has been made yet (no stack top and no tokens on the board);
    /// remaining token counts are derived from the board.
    pub fn from_position(
        mode: GameMode,
        board: Board,
        stack_top: Option<CardKind>,
        current_player: Player,
    ) -> Self {
        let first_turn = stack_top.is_none()
            && Board::positions().all(|pos| !board.get(pos).is_token());
        let remaining = [Player::One, Player::Two].map(|player| {
            TOKENS_PER_PLAYER.saturating_sub(board.token_count(player) as u8)
        });
        GameSession {
            mode,
            board,
            stack_top,
            current_player,
            first_turn,
            remaining,
            outcome: None,
            cooldown: 0.0,
            ai_pause_secs: 0.0,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stack_top(&self) -> Option<CardKind> {
        self.stack_top
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_turn(&self) -> bool {
        self.first_turn
    }

    pub fn remaining_tokens(&self, player: Player) -> u8 {
        match player {
            Player::One => self.remaining[0],
            Player::Two => self.remaining[1],
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// True while it is the computer's turn in one-player mode.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::OnePlayer
            && self.current_player == Player::Two
            && self.outcome.is_none()
    }

    /// True once the pacing cooldown has elapsed and the computer's move may
    /// be applied.
    pub fn ai_gate_open(&self) -> bool {
        self.is_ai_turn() && self.cooldown <= 0.0
    }

    /// Advance the pacing cooldown by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
    }

    /// Check whether a placement at `pos` would be legal for the side to
    /// move, without touching the game state.
    pub fn check_move(&self, pos: Pos) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds);
        }
        if self.first_turn && (1..=2).contains(&pos.row) && (1..=2).contains(&pos.col) {
            return Err(MoveError::FirstTurnCenter);
        }
        match self.board.get(pos) {
            Tile::Token(_) => Err(MoveError::Occupied),
            // A vacated cell has no card to capture.
            Tile::Empty => Err(MoveError::Occupied),
            Tile::Card(card) => match self.stack_top {
                Some(top) if !card.shares_color(top) => Err(MoveError::NoSharedColor),
                _ => Ok(()),
            },
        }
    }

    /// Every position the side to move may legally play. Empty once the
    /// outcome is terminal.
    pub fn legal_positions(&self) -> Vec<Pos> {
        Board::positions()
            .filter(|&pos| self.check_move(pos).is_ok())
            .collect()
    }

    /// Attempt a placement for the side to move. On success the captured
    /// card becomes the stack top, the mover's token takes the cell, and the
    /// outcome is re-evaluated: shape win first, then forced win (the other
    /// side has no legal placement on a non-full board), then draw. A shape
    /// win on a board-filling move is still a win, never a draw.
    pub fn attempt_move(&mut self, pos: Pos) -> Result<Placement, MoveError> {
        self.check_move(pos)?;

        let mover = self.current_player;
        let removed = match self.board.get(pos) {
            Tile::Card(card) => card,
            Tile::Token(_) | Tile::Empty => unreachable!("check_move only accepts card cells"),
        };

        self.board.set(pos, Tile::Token(mover));
        self.stack_top = Some(removed);
        self.first_turn = false;
        match mover {
            Player::One => self.remaining[0] = self.remaining[0].saturating_sub(1),
            Player::Two => self.remaining[1] = self.remaining[1].saturating_sub(1),
        }

        let mut forced_win = false;
        if self.board.check_win(mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if !self.board.is_full() && !self.board.any_card_shares_color(removed) {
            // The other side is blocked out: the mover wins by default.
            forced_win = true;
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = mover.other();
            if self.is_ai_turn() {
                self.cooldown = self.ai_pause_secs;
            }
        }

        Ok(Placement { removed, forced_win })
    }

    /// Re-enter play with a freshly shuffled board and full token stocks.
    /// Accepted only while the outcome is terminal.
    pub fn restart(&mut self) -> Result<(), CommandError> {
        if self.outcome.is_none() {
            return Err(CommandError::RoundInProgress);
        }
        self.board = Board::shuffled(&mut self.rng);
        self.stack_top = None;
        self.current_player = Player::One;
        self.first_turn = true;
        self.remaining = [TOKENS_PER_PLAYER; 2];
        self.outcome = None;
        self.cooldown = 0.0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{COLS, ROWS};

    fn fresh(mode: GameMode) -> GameSession {
        GameSession::new(mode, 0.0)
    }

    /// A full-board token layout with no winning shape for either player.
    ///
    ///   1 2 1 2
    ///   2 1 2 1
    ///   2 1 2 1
    ///   1 2 1 2
    fn no_win_tokens() -> [[Tile; COLS]; ROWS] {
        let one = Tile::Token(Player::One);
        let two = Tile::Token(Player::Two);
        [
            [one, two, one, two],
            [two, one, two, one],
            [two, one, two, one],
            [one, two, one, two],
        ]
    }

    #[test]
    fn initial_state() {
        let session = fresh(GameMode::TwoPlayer);
        assert_eq!(session.current_player(), Player::One);
        assert!(session.first_turn());
        assert_eq!(session.stack_top(), None);
        assert_eq!(session.remaining_tokens(Player::One), 8);
        assert_eq!(session.remaining_tokens(Player::Two), 8);
        assert!(!session.is_terminal());
        assert!(Board::positions().all(|pos| session.board().get(pos).card().is_some()));
    }

    #[test]
    fn first_turn_rejects_center_accepts_border() {
        let session = fresh(GameMode::TwoPlayer);
        let mut accepted = 0;
        for pos in Board::positions() {
            let center = (1..=2).contains(&pos.row) && (1..=2).contains(&pos.col);
            match session.check_move(pos) {
                Ok(()) => {
                    assert!(!center, "{pos:?} is a center cell");
                    accepted += 1;
                }
                Err(MoveError::FirstTurnCenter) => assert!(center, "{pos:?} is a border cell"),
                Err(other) => panic!("unexpected rejection {other:?} at {pos:?}"),
            }
        }
        assert_eq!(accepted, 12);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let session = fresh(GameMode::TwoPlayer);
        assert_eq!(session.check_move(Pos::new(4, 0)), Err(MoveError::OutOfBounds));
        assert_eq!(session.check_move(Pos::new(0, 17)), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn first_move_at_corner() {
        let mut session = fresh(GameMode::TwoPlayer);
        let corner = Pos::new(0, 0);
        let card = session.board().get(corner).card().unwrap();

        let placement = session.attempt_move(corner).unwrap();

        assert_eq!(placement.removed, card);
        assert_eq!(session.stack_top(), Some(card));
        assert_eq!(session.board().get(corner), Tile::Token(Player::One));
        assert_eq!(session.remaining_tokens(Player::One), 7);
        assert_eq!(session.remaining_tokens(Player::Two), 8);
        assert!(!session.first_turn());
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn first_turn_center_attempt_leaves_state_unchanged() {
        let mut session = fresh(GameMode::TwoPlayer);
        let before = *session.board();

        let err = session.attempt_move(Pos::new(1, 1)).unwrap_err();

        assert_eq!(err, MoveError::FirstTurnCenter);
        assert_eq!(err.advisory().code, "info_first_turn");
        assert_eq!(*session.board(), before);
        assert!(session.first_turn());
        assert_eq!(session.remaining_tokens(Player::One), 8);
        assert_eq!(session.current_player(), Player::One);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut tiles = no_win_tokens();
        tiles[3][3] = Tile::Card(CardKind::BlueRed);
        let session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );
        assert_eq!(session.check_move(Pos::new(0, 0)), Err(MoveError::Occupied));
        assert_eq!(
            session.check_move(Pos::new(0, 0)).unwrap_err().advisory().code,
            "info_occupied"
        );
    }

    #[test]
    fn color_gate_rejects_disjoint_card() {
        let mut tiles = no_win_tokens();
        tiles[0][0] = Tile::Card(CardKind::YellowGreen);
        let session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BlueRed),
            Player::One,
        );
        let err = session.check_move(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, MoveError::NoSharedColor);
        assert_eq!(err.advisory().code, "info_no_color_share");
    }

    #[test]
    fn completing_a_row_wins() {
        // Player 1 holds (0,1)..(0,3); the corner card completes row 0.
        let one = Tile::Token(Player::One);
        let deck: Vec<CardKind> = CardKind::ALL
            .iter()
            .copied()
            .filter(|card| *card != CardKind::BlueRed)
            .collect();
        let mut tiles = [[Tile::Empty; COLS]; ROWS];
        let mut next = deck.iter();
        for row in 1..ROWS {
            for col in 0..COLS {
                tiles[row][col] = Tile::Card(*next.next().unwrap());
            }
        }
        tiles[0] = [Tile::Card(CardKind::BlueRed), one, one, one];

        let mut session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );
        let placement = session.attempt_move(Pos::new(0, 0)).unwrap();

        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert!(!placement.forced_win);
    }

    #[test]
    fn blocking_the_opponent_wins_by_default() {
        // After capturing BlueRed, the only card left is YellowGreen, which
        // shares no color with it: Player 2 is blocked out.
        let mut tiles = no_win_tokens();
        tiles[0][0] = Tile::Card(CardKind::BlueRed);
        tiles[3][3] = Tile::Card(CardKind::YellowGreen);
        let mut session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );

        let placement = session.attempt_move(Pos::new(0, 0)).unwrap();

        assert!(placement.forced_win);
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::One)));
    }

    #[test]
    fn filling_the_board_without_a_shape_draws() {
        let mut tiles = no_win_tokens();
        tiles[0][0] = Tile::Card(CardKind::BlueRed);
        let mut session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );

        session.attempt_move(Pos::new(0, 0)).unwrap();

        assert_eq!(session.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn board_filling_win_is_a_win_not_a_draw() {
        // The final placement both fills the board and completes row 0.
        let one = Tile::Token(Player::One);
        let two = Tile::Token(Player::Two);
        let tiles = [
            [Tile::Card(CardKind::BlueRed), one, one, one],
            [two, one, two, one],
            [two, one, two, one],
            [one, two, one, two],
        ];
        let mut session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );

        session.attempt_move(Pos::new(0, 0)).unwrap();

        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::One)));
    }

    #[test]
    fn moves_are_rejected_while_terminal() {
        let mut tiles = no_win_tokens();
        tiles[0][0] = Tile::Card(CardKind::BlueRed);
        tiles[3][3] = Tile::Card(CardKind::YellowGreen);
        let mut session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );
        session.attempt_move(Pos::new(0, 0)).unwrap();
        assert!(session.is_terminal());

        assert_eq!(session.attempt_move(Pos::new(3, 3)), Err(MoveError::GameOver));
        assert!(session.legal_positions().is_empty());
    }

    #[test]
    fn restart_only_from_terminal() {
        let mut session = fresh(GameMode::TwoPlayer);
        assert_eq!(session.restart(), Err(CommandError::RoundInProgress));

        let mut tiles = no_win_tokens();
        tiles[0][0] = Tile::Card(CardKind::BlueRed);
        tiles[3][3] = Tile::Card(CardKind::YellowGreen);
        let mut session = GameSession::from_position(
            GameMode::TwoPlayer,
            Board::from_tiles(tiles),
            Some(CardKind::BluePurple),
            Player::One,
        );
        session.attempt_move(Pos::new(0, 0)).unwrap();

        session.restart().unwrap();

        assert_eq!(session.outcome(), None);
        assert!(session.first_turn());
        assert_eq!(session.stack_top(), None);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.remaining_tokens(Player::One), 8);
        assert_eq!(session.remaining_tokens(Player::Two), 8);
        for card in CardKind::ALL {
            let count = Board::positions()
                .filter(|&pos| session.board().get(pos) == Tile::Card(card))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn cooldown_arms_when_turn_passes_to_the_computer() {
        let mut session = GameSession::new(GameMode::OnePlayer, 4.0);
        session.attempt_move(Pos::new(0, 0)).unwrap();

        assert!(session.is_ai_turn());
        assert!(!session.ai_gate_open());
        session.tick(1.5);
        assert!(!session.ai_gate_open());
        session.tick(3.0);
        assert!(session.ai_gate_open());
    }

    #[test]
    fn no_cooldown_in_two_player_mode() {
        let mut session = GameSession::new(GameMode::TwoPlayer, 4.0);
        session.attempt_move(Pos::new(0, 0)).unwrap();
        assert!(!session.is_ai_turn());
    }

    #[test]
    fn legal_positions_on_first_turn() {
        let session = fresh(GameMode::TwoPlayer);
        assert_eq!(session.legal_positions().len(), 12);
    }
}
