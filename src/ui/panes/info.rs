//! Algorithm description pane

use super::border_style;
use crate::algorithm::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render name, description, complexity labels and outline
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    info: Option<&AlgorithmInfo>,
    outline_progress: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(info) = info else {
        let paragraph = Paragraph::new("Pick an algorithm from the menu and press Enter.")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(Span::styled(
            info.name,
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(info.description, Style::default().fg(DEFAULT_THEME.fg))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time:  ", label),
            Span::styled(info.time_complexity, Style::default().fg(DEFAULT_THEME.primary)),
        ]),
        Line::from(vec![
            Span::styled("Space: ", label),
            Span::styled(info.space_complexity, Style::default().fg(DEFAULT_THEME.success)),
        ]),
        Line::from(""),
    ];

    for (i, item) in info.outline.iter().enumerate() {
        let active = i < outline_progress;
        let (marker, style) = if active {
            ("●", Style::default().fg(DEFAULT_THEME.primary))
        } else {
            ("○", Style::default().fg(DEFAULT_THEME.comment))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(*item, style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
