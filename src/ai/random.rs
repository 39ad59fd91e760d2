use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{GameSession, Pos};

use super::agent::Agent;

/// An agent that picks uniformly at random from the legal placements.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, session: &GameSession) -> Option<Pos> {
        let legal = session.legal_positions();
        if legal.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..legal.len());
        Some(legal[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
