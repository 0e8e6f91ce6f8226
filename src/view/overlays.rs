//! Overlay rendering (loading and failure panes, notice, help popup)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::GeneralError;
use crate::model::{Failure, UiState};

const NETWORK_ART: [&str; 5] = [
    r"   ((  o  ))   ",
    r"      \|/      ",
    r"   ____|____   ",
    r"  |  x   x  |  ",
    r"  |_________|  ",
];

const NOT_FOUND_ART: [&str; 5] = [
    r"   .-------.   ",
    r"  /  ?   ?  \  ",
    r" |     ^     | ",
    r"  \  .---.  /  ",
    r"   '-------'   ",
];

pub const RETRY_HINT: &str = "Press r to retry";

/// Illustration shown for a failure; connectivity problems get their own art
pub fn illustration(error: &GeneralError) -> &'static [&'static str] {
    if error.is_network() {
        &NETWORK_ART
    } else {
        &NOT_FOUND_ART
    }
}

pub fn render_loading(frame: &mut Frame, area: Rect, block: Block) {
    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .block(block);
    frame.render_widget(loading, area);
}

/// Failure pane: illustration when there is room, then message and retry hint
pub fn render_failure(frame: &mut Frame, area: Rect, failure: &Failure, block: Block) {
    let art = illustration(&failure.error);
    let mut lines: Vec<Line> = Vec::new();

    // Borders plus message and hint lines
    if area.height as usize >= art.len() + 5 {
        lines.extend(
            art.iter()
                .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::DarkGray)))),
        );
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        failure.message.clone(),
        Style::default().fg(Color::Red),
    )));
    lines.push(Line::from(Span::styled(
        RETRY_HINT,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let pane = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(pane, area);
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn render_notice(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref notice) = ui_state.notice {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        // Calculate how many lines the message will take when wrapped
        let line_count = notice.chars().count().div_ceil(inner_width) as u16;

        let popup_area = centered_popup(area, popup_width, 2 + line_count.max(1));

        frame.render_widget(Clear, popup_area);

        let widget = Paragraph::new(notice.to_string())
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Notice (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Navigation ──"),
        ("↑ / ↓", "Move selection"),
        ("← / →", "Switch home section"),
        ("Enter", "Open"),
        ("Backspace / Esc", "Go back"),
        ("", ""),
        ("", "── Actions ──"),
        ("R", "Retry / Refresh"),
        ("P", "Play"),
        ("W", "Add to watch history"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_area = centered_popup(area, 62, keybindings.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illustration_is_keyed_by_error_kind() {
        assert_eq!(illustration(&GeneralError::NetworkError), &NETWORK_ART[..]);
        assert_eq!(illustration(&GeneralError::NotFound), &NOT_FOUND_ART[..]);
        assert_eq!(illustration(&GeneralError::Unauthorized), &NOT_FOUND_ART[..]);
    }
}
