//! # Chroma Four
//!
//! A two-player 4x4 card-capture game with an optional computer opponent.
//! Each board cell starts as a two-color card; capturing a card places your
//! token and puts the card on the discard pile, where it gates the next
//! placement: only cards sharing one of its colors may be captured. Four
//! tokens in a row, column, diagonal, or 2x2 square win.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: cards, board, legality, win/draw, turn machine
//! - [`ai`] — Computer opponent: heuristic evaluation + alpha-beta minimax
//! - [`ui`] — Terminal UI: menu, game view, advisory messages
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
