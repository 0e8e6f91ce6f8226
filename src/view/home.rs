//! Home screen: trending movies and the list catalogue

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::ListItem,
    Frame,
};

use crate::model::{HomeSection, ListType, ScreenState, UiState, VideoThumbnail};

use super::overlays::{render_failure, render_loading};
use super::utils::{item_style, panel, render_scrollable_list, thumbnail_label};

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    trending: &ScreenState<Vec<VideoThumbnail>>,
    lists: &[ListType],
    ui_state: &UiState,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let trending_focused = ui_state.home_section == HomeSection::Trending;
    let block = panel(" Trending this week ", trending_focused);

    match (&trending.payload, trending.settled_failure()) {
        (_, Some(failure)) => render_failure(frame, chunks[0], failure, block),
        (None, None) if trending.is_loading => render_loading(frame, chunks[0], block),
        (items, None) => {
            let width = chunks[0].width.saturating_sub(6) as usize;
            let rows: Vec<ListItem> = items
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    ListItem::new(format!(" {}", thumbnail_label(item, width)))
                        .style(item_style(i == ui_state.trending_selected, trending_focused))
                })
                .collect();
            render_scrollable_list(frame, chunks[0], rows, ui_state.trending_selected, block);
        }
    }

    let lists_focused = ui_state.home_section == HomeSection::Lists;
    let rows: Vec<ListItem> = lists
        .iter()
        .enumerate()
        .map(|(i, list)| {
            ListItem::new(format!(" {}", list.title()))
                .style(item_style(i == ui_state.list_selected, lists_focused))
        })
        .collect();
    render_scrollable_list(
        frame,
        chunks[1],
        rows,
        ui_state.list_selected,
        panel(" Browse ", lists_focused),
    );
}
