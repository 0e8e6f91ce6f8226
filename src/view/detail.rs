//! Detail screen: header, synopsis, cast and similar titles
//!
//! The three sections are drawn from independent states, so a failed cast
//! request still leaves the similar row on screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, Paragraph, Wrap},
    Frame,
};

use crate::model::{CreditState, DetailState, SimilarState, VideoDetail};

use super::overlays::{render_failure, render_loading};
use super::utils::{argb_color, item_style, panel, render_scrollable_list, thumbnail_label, truncate_string};

pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailState,
    credits: &CreditState,
    similar: &SimilarState,
    selected: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),     // Header + synopsis
            Constraint::Length(12), // Cast and similar titles
        ])
        .split(area);

    render_main_section(frame, chunks[0], detail);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_credits(frame, bottom[0], credits);
    render_similar(frame, bottom[1], similar, selected);
}

fn render_main_section(frame: &mut Frame, area: Rect, state: &DetailState) {
    let screen = &state.screen;
    let title = screen
        .payload
        .as_ref()
        .map(|d| format!(" {} ", d.title))
        .unwrap_or_else(|| " Details ".to_string());
    let block = panel(&title, false);

    let Some(detail) = screen.payload.as_ref() else {
        match screen.settled_failure() {
            Some(failure) => render_failure(frame, area, failure, block),
            None => render_loading(frame, area, block),
        }
        return;
    };

    let mut lines = vec![facts_line(detail), Line::from(Span::styled(
        detail.genres.join(" · "),
        Style::default().fg(Color::Cyan),
    ))];
    lines.push(Line::from(""));
    lines.push(actions_line(state, detail));
    if let Some(failure) = &state.stream_failure {
        lines.push(Line::from(Span::styled(
            failure.message.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(message) = screen.settled_failure().map(|f| f.message.as_str()) {
        // Reload failed; the previous detail stays visible
        lines.push(Line::from(Span::styled(
            format!("{} Press r to retry", message),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    let synopsis = if detail.description.is_empty() {
        "No synopsis available."
    } else {
        detail.description.as_str()
    };
    lines.push(Line::from(Span::styled(synopsis.to_string(), Style::default().fg(Color::White))));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn facts_line(detail: &VideoDetail) -> Line<'static> {
    let year = detail.release_date.get(..4).unwrap_or("----").to_string();
    Line::from(vec![
        Span::styled(
            format!("★ {}", detail.score_label()),
            Style::default()
                .fg(argb_color(detail.vote_color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(detail.kind.label(), Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(year, Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(detail.runtime_label(), Style::default().fg(Color::DarkGray)),
    ])
}

fn actions_line(state: &DetailState, detail: &VideoDetail) -> Line<'static> {
    let play = if state.is_stream_loading {
        Span::styled("[ ⟳ Resolving stream... ]", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "[ p ▶ Play ]",
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![play];
    match detail.is_watched {
        Some(true) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("✓ Watched", Style::default().fg(Color::Green)));
        }
        Some(false) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("[ w Mark watched ]", Style::default().fg(Color::Cyan)));
        }
        None => {}
    }
    Line::from(spans)
}

fn render_credits(frame: &mut Frame, area: Rect, credits: &CreditState) {
    let block = panel(" Cast ", false);

    if let Some(failure) = credits.settled_failure() {
        render_failure(frame, area, failure, block);
        return;
    }
    let Some(cast) = credits.payload.as_ref() else {
        render_loading(frame, area, block);
        return;
    };

    let name_width = (area.width as usize / 2).saturating_sub(2);
    let rows: Vec<ListItem> = cast
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(truncate_string(&c.name, name_width), Style::default().fg(Color::White)),
                Span::styled(
                    c.character.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    render_scrollable_list(frame, area, rows, 0, block);
}

fn render_similar(frame: &mut Frame, area: Rect, similar: &SimilarState, selected: usize) {
    let block = panel(" More like this ", true);

    if let Some(failure) = similar.settled_failure() {
        render_failure(frame, area, failure, block);
        return;
    }
    let Some(items) = similar.payload.as_ref() else {
        render_loading(frame, area, block);
        return;
    };

    let width = area.width.saturating_sub(6) as usize;
    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            ListItem::new(format!(" {}", thumbnail_label(item, width))).style(item_style(i == selected, true))
        })
        .collect();
    render_scrollable_list(frame, area, rows, selected, block);
}
