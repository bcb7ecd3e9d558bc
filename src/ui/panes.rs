//! Rendering for the playback panes

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{Highlights, Step};

use super::theme::DEFAULT_THEME;

/// Render the array snapshot as a row of cells plus a pointer-marker row
pub fn render_array_pane(frame: &mut Frame, area: Rect, step: &Step, title: &str) {
    let theme = &DEFAULT_THEME;

    let mut value_spans: Vec<Span> = Vec::with_capacity(step.array.len() * 2);
    let mut marker_spans: Vec<Span> = Vec::with_capacity(step.array.len() * 2);

    for (i, slot) in step.array.iter().enumerate() {
        let text = match slot {
            Some(element) => format!("[{:^5}]", element.value),
            None => format!("[{:^5}]", "·"),
        };
        let width = text.chars().count();

        let style = match slot {
            Some(_) => slot_style(&step.highlights, i),
            None => Style::default().fg(theme.empty_slot),
        };
        value_spans.push(Span::styled(text, style));
        value_spans.push(Span::raw(" "));

        let marker = pointer_marker(&step.highlights, i);
        marker_spans.push(Span::styled(
            format!("{:^width$}", marker, width = width),
            Style::default().fg(theme.pointer),
        ));
        marker_spans.push(Span::raw(" "));
    }

    let mut index_spans: Vec<Span> = Vec::with_capacity(step.array.len() * 2);
    for i in 0..step.array.len() {
        index_spans.push(Span::styled(
            format!("{:^7}", i),
            Style::default().fg(theme.eliminated),
        ));
        index_spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::default(),
        Line::from(value_spans),
        Line::from(index_spans),
        Line::from(marker_spans),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the current step's description
pub fn render_description_pane(frame: &mut Frame, area: Rect, step: &Step) {
    let theme = &DEFAULT_THEME;
    let is_error = step.description.starts_with("Error:");
    let style = if is_error {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.fg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Description ",
            Style::default().fg(theme.title),
        ));

    let paragraph = Paragraph::new(Line::from(Span::styled(step.description.clone(), style)))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the bottom status bar: position, counters, key hints
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    position: usize,
    total: usize,
    is_playing: bool,
    status_message: &str,
) {
    let theme = &DEFAULT_THEME;

    let mut text = format!(" Step {}/{}", position + 1, total);
    if let Some(metadata) = step.metadata {
        text.push_str(&format!(
            " | pass {} | comparisons {} | swaps {}",
            metadata.pass, metadata.comparisons, metadata.swaps
        ));
    }
    if is_playing {
        text.push_str(" | ▶ playing");
    }
    text.push_str(&format!(
        " | {} | ←/→ step  1-9 skip  space play  enter end  bksp start  q quit",
        status_message
    ));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(theme.status),
    )));
    frame.render_widget(paragraph, area);
}

/// Resolve the display style for an occupied slot, roles in priority order
fn slot_style(highlights: &Highlights, i: usize) -> Style {
    let theme = &DEFAULT_THEME;
    if highlights.success.contains(&i) {
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD)
    } else if highlights.primary.contains(&i) {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else if highlights.secondary.contains(&i) {
        Style::default().fg(theme.secondary)
    } else if highlights.mid == Some(i) {
        Style::default().fg(theme.mid).add_modifier(Modifier::BOLD)
    } else if highlights.start == Some(i) || highlights.end == Some(i) {
        Style::default().fg(theme.pointer)
    } else if highlights.pointer == Some(i) {
        Style::default()
            .fg(theme.pointer)
            .add_modifier(Modifier::BOLD)
    } else if highlights.eliminated.contains(&i) {
        Style::default().fg(theme.eliminated)
    } else if highlights.sorted.contains(&i) {
        Style::default().fg(theme.sorted)
    } else {
        Style::default().fg(theme.fg)
    }
}

/// Short labels for the pointer roles under a cell
fn pointer_marker(highlights: &Highlights, i: usize) -> String {
    let mut marker = String::new();
    if highlights.start == Some(i) {
        marker.push('S');
    }
    if highlights.mid == Some(i) {
        marker.push('M');
    }
    if highlights.end == Some(i) {
        marker.push('E');
    }
    if highlights.pointer == Some(i) {
        marker.push('^');
    }
    marker
}
