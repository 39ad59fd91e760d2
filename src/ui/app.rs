use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{Advisory, GameMode, GameSession, Placement, Player, Pos};

use super::{game_view, menu_view};

/// A per-player advisory currently on screen.
pub(crate) struct Note {
    pub(crate) code: &'static str,
    pub(crate) until: Instant,
}

/// One round of play: the session plus everything the frontend layers on
/// top of it (cell cursor, advisory notes, the computer's pending move).
pub(crate) struct Round {
    pub(crate) session: GameSession,
    pub(crate) cursor: Pos,
    pub(crate) notes: [Option<Note>; 2],
    agent: Option<Box<dyn Agent>>,
    pending_ai_move: Option<Pos>,
}

impl Round {
    fn new(mode: GameMode, config: &AppConfig) -> Self {
        let agent: Option<Box<dyn Agent>> = match mode {
            GameMode::OnePlayer => Some(Box::new(MinimaxAgent::new(Player::Two))),
            GameMode::TwoPlayer => None,
        };
        Round {
            session: GameSession::new(mode, config.game.ai_thinking_secs),
            cursor: Pos::new(0, 0),
            notes: [None, None],
            agent,
            pending_ai_move: None,
        }
    }

    fn set_note(&mut self, player: Player, advisory: Advisory) {
        let slot = match player {
            Player::One => 0,
            Player::Two => 1,
        };
        self.notes[slot] = Some(Note {
            code: advisory.code,
            until: Instant::now() + Duration::from_secs_f32(advisory.secs),
        });
    }

    fn expire_notes(&mut self) {
        let now = Instant::now();
        for note in self.notes.iter_mut() {
            if note.as_ref().is_some_and(|n| now >= n.until) {
                *note = None;
            }
        }
    }

    /// Post-placement bookkeeping shared by human and computer moves.
    fn after_placement(&mut self, mover: Player, placement: Placement) {
        self.notes = [None, None];
        if placement.forced_win {
            self.set_note(mover, Advisory::opponent_cannot_play());
            self.set_note(mover.other(), Advisory::cannot_play());
        }
    }

    /// Place the cursor cell for the human side to move.
    fn place_at_cursor(&mut self) {
        if self.session.is_terminal() {
            let player = self.session.current_player();
            self.set_note(player, crate::game::MoveError::GameOver.advisory());
            return;
        }
        if self.session.is_ai_turn() {
            return;
        }

        let mover = self.session.current_player();
        match self.session.attempt_move(self.cursor) {
            Ok(placement) => self.after_placement(mover, placement),
            Err(err) => self.set_note(mover, err.advisory()),
        }
    }

    /// Drive the computer's turn. The move is computed as soon as the turn
    /// arrives; the pacing cooldown only defers when it is applied.
    fn drive_ai(&mut self) {
        if !self.session.is_ai_turn() {
            return;
        }

        if self.pending_ai_move.is_none() {
            let agent = self
                .agent
                .as_mut()
                .unwrap_or_else(|| unreachable!("one-player round without an agent"));
            let pos = agent
                .select_move(&self.session)
                .expect("search engine must produce a move on the computer's turn");
            self.pending_ai_move = Some(pos);
        }

        if self.session.ai_gate_open() {
            if let Some(pos) = self.pending_ai_move.take() {
                let mover = self.session.current_player();
                match self.session.attempt_move(pos) {
                    Ok(placement) => self.after_placement(mover, placement),
                    Err(err) => panic!("search engine produced an illegal move {pos:?}: {err:?}"),
                }
            }
        }
    }

    fn restart(&mut self) {
        if self.session.restart().is_ok() {
            self.cursor = Pos::new(0, 0);
            self.notes = [None, None];
            self.pending_ai_move = None;
        }
    }
}

enum Page {
    Menu { selected: usize },
    Game(Box<Round>),
}

pub struct App {
    config: AppConfig,
    page: Page,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, mode: Option<GameMode>) -> Self {
        let page = match mode {
            Some(mode) => Page::Game(Box::new(Round::new(mode, &config))),
            None => Page::Menu { selected: 0 },
        };
        App {
            config,
            page,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| match &self.page {
                Page::Menu { selected } => menu_view::render(frame, *selected),
                Page::Game(round) => game_view::render(frame, round),
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            self.update(dt);
        }
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        if let Page::Game(round) = &mut self.page {
            round.session.tick(dt);
            round.expire_notes();
            round.drive_ai();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.page {
            Page::Menu { selected } => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => *selected = selected.saturating_sub(1),
                KeyCode::Down => {
                    *selected = (*selected + 1).min(menu_view::ITEMS.len() - 1);
                }
                KeyCode::Enter | KeyCode::Char(' ') => match *selected {
                    0 => self.start_game(GameMode::OnePlayer),
                    1 => self.start_game(GameMode::TwoPlayer),
                    _ => self.should_quit = true,
                },
                _ => {}
            },
            Page::Game(round) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => round.cursor.row = round.cursor.row.saturating_sub(1),
                KeyCode::Down => round.cursor.row = (round.cursor.row + 1).min(3),
                KeyCode::Left => round.cursor.col = round.cursor.col.saturating_sub(1),
                KeyCode::Right => round.cursor.col = (round.cursor.col + 1).min(3),
                KeyCode::Enter | KeyCode::Char(' ') => round.place_at_cursor(),
                KeyCode::Char('r') => round.restart(),
                KeyCode::Char('m') => {
                    // Leaving the round is a terminal-state command, like restart
                    if round.session.is_terminal() {
                        self.page = Page::Menu { selected: 0 };
                    }
                }
                _ => {}
            },
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        self.page = Page::Game(Box::new(Round::new(mode, &self.config)));
    }
}
