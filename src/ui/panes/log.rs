//! Trace log pane rendering

use crate::trace::{EventKind, TraceEvent};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the trace event log.
///
/// Events at or before the cursor are bright, future events are dimmed, and
/// the current event row is highlighted. A `scroll_offset` of `usize::MAX`
/// means "follow the cursor": the offset is recomputed to keep the current
/// row centered.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[TraceEvent],
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    if events.is_empty() {
        let paragraph = Paragraph::new("(no events)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total_lines = events.len();
    let max_scroll = total_lines.saturating_sub(visible_height);

    // Follow mode: center the cursor row
    if *scroll_offset == usize::MAX {
        *scroll_offset = position.saturating_sub(visible_height / 2);
    }
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let lines: Vec<Line> = events
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|event| {
            let revealed = event.sequence as usize <= position;
            let is_current = event.sequence as usize == position;

            let kind_fg = match event.kind {
                EventKind::DescendPush => DEFAULT_THEME.primary,
                EventKind::DescendPop => DEFAULT_THEME.secondary,
                EventKind::TerminalSuccess => DEFAULT_THEME.success,
                EventKind::TerminalFailure => DEFAULT_THEME.error,
            };

            let (text_style, kind_style) = if is_current {
                let base = Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
                (base.fg(DEFAULT_THEME.fg), base.fg(kind_fg))
            } else if revealed {
                (
                    Style::default().fg(DEFAULT_THEME.fg),
                    Style::default().fg(kind_fg),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            };

            Line::from(vec![
                Span::styled(format!("#{:<4} ", event.sequence), text_style),
                Span::styled(format!("{:<9} ", event.sig.to_string()), text_style),
                Span::styled(format!("{:<8} ", event.kind.to_string()), kind_style),
                Span::styled(format!("d={}", event.depth), text_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
