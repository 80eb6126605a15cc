//! Step list pane
//!
//! Lists every step of the active sequence and marks the one most recently
//! applied. The view follows the current step unless the user scrolled away
//! from it while playback was paused.

use super::border_style;
use crate::steps::StepSequence;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the step list
#[derive(Debug, Default)]
pub struct StepsScrollState {
    pub offset: usize,
    /// Index that was current on the previous frame
    pub prev_current: Option<usize>,
}

/// Keep `current` inside the visible window when it changed since last frame
pub(crate) fn follow_current(
    state: &mut StepsScrollState,
    current: Option<usize>,
    total: usize,
    visible_height: usize,
) {
    if current != state.prev_current {
        if let Some(cur) = current {
            if cur < state.offset {
                state.offset = cur;
            } else if cur >= state.offset + visible_height {
                state.offset = cur + 1 - visible_height;
            }
        } else {
            state.offset = 0;
        }
        state.prev_current = current;
    }

    let max_scroll = total.saturating_sub(visible_height);
    state.offset = state.offset.min(max_scroll);
}

/// Render the step list
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    sequence: Option<&StepSequence>,
    current: Option<usize>,
    is_focused: bool,
    scroll_state: &mut StepsScrollState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(sequence) = sequence else {
        let paragraph = Paragraph::new("(select an algorithm)")
            .block(block.title(" Steps "))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let total = sequence.len();
    let applied = current.map_or(0, |c| c + 1);
    let block = block.title(format!(" Steps ({}/{}) ", applied, total));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    follow_current(scroll_state, current, total, visible_height);

    let items: Vec<ListItem> = sequence
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let is_current = current == Some(idx);
            let is_done = current.is_some_and(|c| idx < c);

            let (num_style, text_style) = if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_done {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:4} ", idx + 1), num_style),
                Span::styled(
                    format!("{:<9} ", step.kind.label()),
                    Style::default().fg(DEFAULT_THEME.highlight_for(step.kind)),
                ),
                Span::styled(step.description.clone(), text_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
