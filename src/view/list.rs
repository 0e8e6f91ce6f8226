//! Paginated list screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{ListItem, Paragraph},
    Frame,
};

use crate::model::{ListState, ListType};

use super::overlays::{RETRY_HINT, render_failure, render_loading};
use super::utils::{calculate_num_width, item_style, panel, render_scrollable_list, thumbnail_label};

pub fn render_list(frame: &mut Frame, area: Rect, list_type: ListType, state: &ListState, selected: usize) {
    let title = format!(" {} ({}) ", list_type.title(), state.items().len());
    let block = panel(&title, true);

    if state.items().is_empty() {
        if let Some(failure) = state.screen.settled_failure() {
            render_failure(frame, area, failure, block);
        } else if state.screen.is_loading {
            render_loading(frame, area, block);
        } else {
            let empty = Paragraph::new("Nothing to show here")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
        }
        return;
    }

    // Footer line for paging status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let items = state.items();
    let num_width = calculate_num_width(items.len());
    let title_width = (chunks[0].width as usize).saturating_sub(num_width + 8);
    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            ListItem::new(format!(
                " {:>num_width$}  {}",
                i + 1,
                thumbnail_label(item, title_width),
                num_width = num_width
            ))
            .style(item_style(i == selected, true))
        })
        .collect();
    render_scrollable_list(frame, chunks[0], rows, selected, block);

    let (footer, color) = if let Some(failure) = state.screen.settled_failure() {
        (format!(" {} {}", failure.message, RETRY_HINT), Color::Red)
    } else if state.screen.is_loading {
        (" Loading more...".to_string(), Color::Yellow)
    } else if state.end_reached {
        (" End of list".to_string(), Color::DarkGray)
    } else {
        (String::new(), Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(footer).style(Style::default().fg(color)), chunks[1]);
}
