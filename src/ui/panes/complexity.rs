//! Complexity pane: time/space class bars next to a growth curve

use super::border_style;
use crate::algorithm::complexity::{classify, growth_curve, rank_label};
use crate::algorithm::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Growth points as (x index, log10 operations) for the chart
pub(crate) fn log_points(label: &str) -> Vec<(f64, f64)> {
    growth_curve(label)
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.operations.max(1.0).log10()))
        .collect()
}

/// Render the complexity pane
pub fn render_complexity_pane(
    frame: &mut Frame,
    area: Rect,
    info: Option<&AlgorithmInfo>,
    is_focused: bool,
) {
    let Some(info) = info else {
        let block = Block::default()
            .title(" Complexity ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused));
        let paragraph = Paragraph::new("(select an algorithm)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_class_bars(frame, columns[0], info, is_focused);
    render_growth_chart(frame, columns[1], info, is_focused);
}

fn render_class_bars(frame: &mut Frame, area: Rect, info: &AlgorithmInfo, is_focused: bool) {
    let block = Block::default()
        .title(format!(" {} Complexity ", info.name))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let bar = |label: &'static str, complexity: &'static str, color: Color| {
        let rank = classify(complexity);
        Bar::default()
            .value(u64::from(rank))
            .text_value(complexity.to_string())
            .label(Line::from(format!("{} ({})", label, rank_label(rank))))
            .style(Style::default().fg(color))
            .value_style(
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
    };
    let bars = [
        bar("Time", info.time_complexity, DEFAULT_THEME.bar),
        bar("Space", info.space_complexity, DEFAULT_THEME.success),
    ];

    let inner_width = area.width.saturating_sub(2);
    let chart = BarChart::default()
        .block(block)
        .bar_width((inner_width.saturating_sub(2) / 2).max(1))
        .bar_gap(2)
        .max(5)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_growth_chart(frame: &mut Frame, area: Rect, info: &AlgorithmInfo, is_focused: bool) {
    let points = log_points(info.time_complexity);
    let y_max = points
        .iter()
        .map(|&(_, y)| y)
        .fold(1.0_f64, f64::max)
        .ceil();

    let dataset = Dataset::default()
        .name(info.time_complexity)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(DEFAULT_THEME.bar))
        .data(&points);

    let label_style = Style::default().fg(DEFAULT_THEME.fg);
    let x_labels: Vec<Span> = growth_curve(info.time_complexity)
        .iter()
        .map(|p| Span::styled(p.input_size.to_string(), label_style))
        .collect();
    let y_labels = vec![
        Span::styled("1", label_style),
        Span::styled(format!("1e{}", (y_max / 2.0).round()), label_style),
        Span::styled(format!("1e{}", y_max), label_style),
    ];

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Growth (log scale) ")
                .borders(Borders::ALL)
                .border_style(border_style(is_focused)),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("Input Size", Style::default().fg(DEFAULT_THEME.comment)))
                .bounds([0.0, (points.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Operations", Style::default().fg(DEFAULT_THEME.comment)))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}
