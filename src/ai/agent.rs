use crate::game::{GameSession, Pos};

/// Universal interface for move providers.
pub trait Agent {
    /// Pick a placement for the side to move, or `None` when no legal
    /// placement exists. On a turn where the rules guarantee a move, `None`
    /// is a broken contract and the caller aborts.
    fn select_move(&mut self, session: &GameSession) -> Option<Pos>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
