use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const ITEMS: [&str; 3] = ["One player", "Two players", "Quit"];

pub fn render(frame: &mut Frame, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(ITEMS.len() as u16 + 2),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Chroma Four")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (i, item) in ITEMS.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("  {item}  "), style));
    }
    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let hint = Paragraph::new("Up/Down: Select  |  Enter: Confirm  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, chunks[2]);
}
