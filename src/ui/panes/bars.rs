//! Data bar pane: one bar per element, highlighted by the current step

use super::border_style;
use crate::steps::StepKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the bar pane
pub struct BarsRenderData<'a> {
    pub data: &'a [i64],
    pub highlight: &'a [usize],
    /// Kind of the step that produced `highlight`, None before any step
    pub kind: Option<StepKind>,
    pub target: Option<i64>,
}

/// Bar heights with negative values shifted so the smallest bar is 1
pub(crate) fn bar_heights(data: &[i64]) -> Vec<u64> {
    let floor = data.iter().copied().min().unwrap_or(0).min(1).saturating_sub(1);
    data.iter().map(|&v| v.abs_diff(floor)).collect()
}

/// Render the data bars
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, is_focused: bool) {
    let title = match data.target {
        Some(target) => format!(" Data (target {}) ", target),
        None => " Data ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.data.is_empty() {
        let paragraph = Paragraph::new("(no data)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let highlight_color = data
        .kind
        .map(|kind| DEFAULT_THEME.highlight_for(kind))
        .unwrap_or(DEFAULT_THEME.bar);

    let heights = bar_heights(data.data);
    let bars: Vec<Bar> = data
        .data
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (&value, height))| {
            let color = if data.highlight.contains(&i) {
                highlight_color
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(ratatui::style::Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let count = bars.len();
    let gap = if inner_width > count * 2 { 1 } else { 0 };
    let bar_width = (inner_width.saturating_sub(gap * count.saturating_sub(1)) / count).max(1);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width.min(u16::MAX as usize) as u16)
        .bar_gap(gap as u16)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_heights_unchanged() {
        assert_eq!(bar_heights(&[64, 34, 1]), vec![64, 34, 1]);
    }

    #[test]
    fn test_negative_values_shifted() {
        assert_eq!(bar_heights(&[-5, 0, 5]), vec![1, 6, 11]);
    }
}
