use rand::seq::SliceRandom;
use rand::Rng;

use super::card::CardKind;
use super::player::Player;

pub const ROWS: usize = 4;
pub const COLS: usize = 4;

/// One board cell. A cell starts as a card, becomes a token when a player
/// captures it, and never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Card(CardKind),
    Token(Player),
    Empty,
}

impl Tile {
    pub fn is_token(self) -> bool {
        matches!(self, Tile::Token(_))
    }

    pub fn card(self) -> Option<CardKind> {
        match self {
            Tile::Card(kind) => Some(kind),
            Tile::Token(_) | Tile::Empty => None,
        }
    }
}

/// A board cell coordinate, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    tiles: [[Tile; COLS]; ROWS],
}

impl Board {
    /// Deal a fresh board: one of each of the 16 card faces, shuffled.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = CardKind::ALL;
        deck.shuffle(rng);

        let mut tiles = [[Tile::Empty; COLS]; ROWS];
        let mut next = deck.iter();
        for row in tiles.iter_mut() {
            for tile in row.iter_mut() {
                // 16 cells, 16 cards
                *tile = Tile::Card(*next.next().unwrap());
            }
        }
        Board { tiles }
    }

    /// Build a board from explicit tiles. Intended for set positions; the
    /// caller is responsible for supplying a reachable arrangement.
    pub fn from_tiles(tiles: [[Tile; COLS]; ROWS]) -> Self {
        Board { tiles }
    }

    pub fn get(&self, pos: Pos) -> Tile {
        self.tiles[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        self.tiles[pos.row][pos.col] = tile;
    }

    /// All cell coordinates in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Pos::new(row, col)))
    }

    /// True when every cell holds a token.
    pub fn is_full(&self) -> bool {
        Self::positions().all(|pos| self.get(pos).is_token())
    }

    /// Number of tokens the given player has on the board.
    pub fn token_count(&self, player: Player) -> usize {
        Self::positions()
            .filter(|&pos| self.get(pos) == Tile::Token(player))
            .count()
    }

    /// True when at least one uncaptured card shares a color with `top`,
    /// i.e. the side to move still has a placement available.
    pub fn any_card_shares_color(&self, top: CardKind) -> bool {
        Self::positions().any(|pos| match self.get(pos) {
            Tile::Card(card) => card.shares_color(top),
            Tile::Token(_) | Tile::Empty => false,
        })
    }

    /// Check whether `player` completed any winning shape: a full row, a full
    /// column, either main diagonal, or a contiguous 2x2 square.
    pub fn check_win(&self, player: Player) -> bool {
        let token = Tile::Token(player);

        // Rows and columns
        for i in 0..ROWS {
            if (0..COLS).all(|j| self.tiles[i][j] == token) {
                return true;
            }
            if (0..ROWS).all(|j| self.tiles[j][i] == token) {
                return true;
            }
        }

        // 2x2 squares
        for row in 0..ROWS - 1 {
            for col in 0..COLS - 1 {
                if self.tiles[row][col] == token
                    && self.tiles[row][col + 1] == token
                    && self.tiles[row + 1][col] == token
                    && self.tiles[row + 1][col + 1] == token
                {
                    return true;
                }
            }
        }

        // Diagonals
        if (0..ROWS).all(|i| self.tiles[i][i] == token) {
            return true;
        }
        if (0..ROWS).all(|i| self.tiles[i][ROWS - 1 - i] == token) {
            return true;
        }

        false
    }
}
