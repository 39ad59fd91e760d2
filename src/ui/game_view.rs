use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{CardColor, CardKind, GameMode, GameOutcome, Player, Pos, Tile};

use super::app::Round;
use super::messages;

pub fn render(frame: &mut Frame, round: &Round) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board + side panel
            Constraint::Length(4),  // Messages
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, round, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(24)])
        .split(chunks[1]);
    render_board(frame, round, main[0]);
    render_side_panel(frame, round, main[1]);

    render_messages(frame, round, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn color_of(color: CardColor) -> Color {
    match color {
        CardColor::Blue => Color::Rgb(0, 121, 241),
        CardColor::Yellow => Color::Rgb(253, 249, 0),
        CardColor::Orange => Color::Rgb(255, 161, 0),
        CardColor::Skyblue => Color::Rgb(102, 191, 255),
        CardColor::Red => Color::Rgb(230, 41, 55),
        CardColor::Purple => Color::Rgb(200, 122, 255),
        CardColor::Green => Color::Rgb(0, 228, 48),
        CardColor::Brown => Color::Rgb(127, 106, 79),
    }
}

fn token_color(player: Player) -> Color {
    match player {
        Player::One => Color::White,
        Player::Two => Color::Magenta,
    }
}

/// The two halves of a card, one span per color.
fn card_spans(card: CardKind) -> Vec<Span<'static>> {
    let (primary, secondary) = card.colors();
    vec![
        Span::styled("\u{258c}", Style::default().fg(color_of(primary))),
        Span::styled("\u{2590}", Style::default().fg(color_of(secondary))),
    ]
}

fn tile_spans(tile: Tile) -> Vec<Span<'static>> {
    match tile {
        Tile::Card(card) => card_spans(card),
        Tile::Token(player) => vec![
            Span::styled("\u{25cf}", Style::default().fg(token_color(player))),
            Span::raw(" "),
        ],
        Tile::Empty => vec![Span::styled(". ", Style::default().fg(Color::DarkGray))],
    }
}

fn render_header(frame: &mut Frame, round: &Round, area: Rect) {
    let mode = match round.session.mode() {
        GameMode::OnePlayer => "One player",
        GameMode::TwoPlayer => "Two players",
    };

    let (status, color) = match round.session.outcome() {
        Some(GameOutcome::Winner(player)) => {
            (format!("{} wins!  |  {mode}", player.name()), token_color(player))
        }
        Some(GameOutcome::Draw) => ("It's a draw!".to_string(), Color::Yellow),
        None => {
            let player = round.session.current_player();
            let turn = if round.session.is_ai_turn() {
                format!("{} is thinking...", player.name())
            } else {
                format!("Current: {}", player.name())
            };
            (format!("{turn}  |  {mode}"), token_color(player))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Chroma Four"));
    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, round: &Round, area: Rect) {
    let board = round.session.board();
    let show_cursor = !round.session.is_terminal() && !round.session.is_ai_turn();

    // 4 cells of 5 columns each, plus one leading space inside the frame
    let inner = 21;
    let mut lines = vec![Line::from(format!(
        "  \u{2554}{}\u{2557}",
        "\u{2550}".repeat(inner)
    ))];

    for row in 0..4 {
        let mut spans = vec![Span::raw("  \u{2551} ")];
        for col in 0..4 {
            let pos = Pos::new(row, col);
            let here = show_cursor && pos == round.cursor;
            spans.push(Span::styled(
                if here { "[" } else { " " },
                Style::default().fg(Color::Cyan),
            ));
            spans.extend(tile_spans(board.get(pos)));
            spans.push(Span::styled(
                if here { "]" } else { " " },
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("\u{2551}"));
        lines.push(Line::from(spans));
        if row < 3 {
            lines.push(Line::from(format!("  \u{2551}{}\u{2551}", " ".repeat(inner))));
        }
    }

    lines.push(Line::from(format!(
        "  \u{255a}{}\u{255d}",
        "\u{2550}".repeat(inner)
    )));

    let widget = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(widget, area);
}

fn render_side_panel(frame: &mut Frame, round: &Round, area: Rect) {
    let mut lines = Vec::new();

    let mut discard = vec![Span::raw("Discard pile: ")];
    match round.session.stack_top() {
        Some(card) => discard.extend(card_spans(card)),
        None => discard.push(Span::styled("--", Style::default().fg(Color::DarkGray))),
    }
    lines.push(Line::from(discard));
    lines.push(Line::from(""));

    for player in [Player::One, Player::Two] {
        let remaining = round.session.remaining_tokens(player);
        let mut spans = vec![Span::raw(format!("{}: ", player.name()))];
        spans.push(Span::styled(
            "\u{25cf}".repeat(remaining as usize),
            Style::default().fg(token_color(player)),
        ));
        spans.push(Span::raw(format!(" ({remaining})")));
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Stacks"),
    );
    frame.render_widget(widget, area);
}

fn render_messages(frame: &mut Frame, round: &Round, area: Rect) {
    let mut lines = Vec::new();
    for (player, note) in [Player::One, Player::Two].into_iter().zip(&round.notes) {
        if let Some(note) = note {
            lines.push(Line::from(format!(
                "{}: {}",
                player.name(),
                messages::text(note.code)
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls =
        Paragraph::new("Arrows: Move  |  Enter: Place  |  R: Restart  |  M: Menu  |  Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, area);
}
