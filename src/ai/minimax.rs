use crate::game::{Board, CardKind, GameSession, Player, Pos, Tile, COLS, ROWS};

use super::agent::Agent;

/// Search horizon in plies. The board never offers more than 16 placements,
/// so this is a full-game horizon.
pub const MAX_DEPTH: i32 = 16;

/// A shape score at or above this value is a completed win.
const WIN_SCORE: i32 = 100;

/// Score one 4-cell shape from its (own, opponent, open) token counts,
/// where open is any cell not holding a token.
fn score_counts(own: i32, opp: i32, open: i32) -> i32 {
    if own == 4 {
        100 // certain victory
    } else if opp == 4 {
        -100 // certain defeat
    } else if own == 3 && open == 1 {
        10
    } else if own == 2 && open == 2 {
        5
    } else if opp == 3 && open == 1 {
        -10
    } else if opp == 2 && open == 2 {
        -5
    } else {
        1 // baseline, keeps mixed shapes off a zero plateau
    }
}

fn score_run(board: &Board, start_row: i32, start_col: i32, drow: i32, dcol: i32, player: Player) -> i32 {
    let mut own = 0;
    let mut opp = 0;
    let mut open = 0;
    for i in 0..4 {
        let pos = Pos::new((start_row + i * drow) as usize, (start_col + i * dcol) as usize);
        match board.get(pos) {
            Tile::Token(token) if token == player => own += 1,
            Tile::Token(_) => opp += 1,
            Tile::Card(_) | Tile::Empty => open += 1,
        }
    }
    score_counts(own, opp, open)
}

fn score_square(board: &Board, row: usize, col: usize, player: Player) -> i32 {
    let mut own = 0;
    let mut opp = 0;
    let mut open = 0;
    for drow in 0..2 {
        for dcol in 0..2 {
            match board.get(Pos::new(row + drow, col + dcol)) {
                Tile::Token(token) if token == player => own += 1,
                Tile::Token(_) => opp += 1,
                Tile::Card(_) | Tile::Empty => open += 1,
            }
        }
    }
    score_counts(own, opp, open)
}

/// Score the whole board for `player`: the sum over every row, column, both
/// diagonals, and all nine 2x2 squares of the per-shape score.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mut score = 0;

    // Rows and columns
    for i in 0..4 {
        score += score_run(board, i, 0, 0, 1, player);
        score += score_run(board, 0, i, 1, 0, player);
    }

    // Diagonals
    score += score_run(board, 0, 0, 1, 1, player);
    score += score_run(board, 0, 3, 1, -1, player);

    // 2x2 squares
    for row in 0..ROWS - 1 {
        for col in 0..COLS - 1 {
            score += score_square(board, row, col, player);
        }
    }

    score
}

/// Full-depth minimax player with alpha-beta pruning.
pub struct MinimaxAgent {
    player: Player,
}

impl MinimaxAgent {
    pub fn new(player: Player) -> Self {
        MinimaxAgent { player }
    }

    /// Pick the best cell for this agent's side: every playable card is
    /// tried in row-major order, scored by minimax from the opponent's
    /// reply onward, and the strictly best value wins (ties keep the first).
    /// `None` only when no cell is playable.
    pub fn choose_move(&self, board: &Board, stack_top: CardKind) -> Option<Pos> {
        let mut best: Option<(Pos, i32)> = None;

        for pos in Board::positions() {
            let Tile::Card(card) = board.get(pos) else {
                continue;
            };
            if !card.shares_color(stack_top) {
                continue;
            }

            let mut child = *board;
            child.set(pos, Tile::Token(self.player));
            let value = self.minimax(&child, card, 0, false, i32::MIN, i32::MAX);

            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((pos, value)),
            }
        }

        best.map(|(pos, _)| pos)
    }

    /// Depth-bounded minimax over playable cells. Each trial move runs on a
    /// copy of the board, so no exploration state ever leaks to the caller.
    fn minimax(
        &self,
        board: &Board,
        stack_top: CardKind,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let own = evaluate(board, self.player);
        let opp = evaluate(board, self.player.other());

        if own >= WIN_SCORE {
            return WIN_SCORE - depth * 3; // prefer quick victories
        }
        if opp >= WIN_SCORE {
            return depth - 300; // prefer slow defeats
        }
        if depth >= MAX_DEPTH || board.is_full() {
            return own - opp;
        }

        let mover = if maximizing { self.player } else { self.player.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Board::positions() {
            let Tile::Card(card) = board.get(pos) else {
                continue;
            };
            if !card.shares_color(stack_top) {
                continue;
            }

            let mut child = *board;
            child.set(pos, Tile::Token(mover));
            let value = self.minimax(&child, card, depth + 1, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, session: &GameSession) -> Option<Pos> {
        // The stack top gates every placement after the first move; the
        // computer never has the first move.
        let top = session.stack_top()?;
        self.choose_move(session.board(), top)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
