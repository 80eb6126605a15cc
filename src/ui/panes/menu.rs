//! Algorithm menu pane, grouped by category

use super::border_style;
use crate::algorithm::{AlgorithmKind, Catalog, Category};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the menu. `cursor` is a catalog position.
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    cursor: usize,
    selected: Option<AlgorithmKind>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut items = Vec::with_capacity(catalog.len() + Category::ALL.len());
    let mut last_category: Option<Category> = None;

    for (pos, info) in catalog.iter().enumerate() {
        if last_category != Some(info.category()) {
            last_category = Some(info.category());
            items.push(ListItem::new(Line::from(Span::styled(
                info.category().label(),
                Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .add_modifier(Modifier::BOLD),
            ))));
        }

        let is_cursor = pos == cursor;
        let is_selected = selected == Some(info.kind);
        let marker = if is_selected { "▶ " } else { "  " };

        let mut style = Style::default().fg(if is_selected {
            DEFAULT_THEME.secondary
        } else {
            DEFAULT_THEME.fg
        });
        if is_cursor && is_focused {
            style = style
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD);
        }

        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(info.name, style),
        ])));
    }

    frame.render_widget(List::new(items).block(block), area);
}
