//! Layout rendering (top bar, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub fn render_top_bar(frame: &mut Frame, area: Rect, title: &str, loading: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Screen title
            Constraint::Length(16), // Activity
        ])
        .split(area);

    let heading = Paragraph::new(title.to_string())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" filmtime ")
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(heading, chunks[0]);

    let activity = if loading { "⟳ loading" } else { "✓ ready" };
    let status = Paragraph::new(activity)
        .style(Style::default().fg(if loading { Color::Yellow } else { Color::Cyan }))
        .block(Block::default().borders(Borders::ALL).title(" TMDB "));
    frame.render_widget(status, chunks[1]);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" {} ", key), Style::default().fg(Color::Black).bg(Color::Green)),
                Span::styled(format!(" {}  ", desc), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
