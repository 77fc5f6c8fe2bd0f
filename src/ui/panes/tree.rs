//! Recursion tree pane rendering

use crate::engine::MemoStore;
use crate::trace::tree::{grouped_by_depth, NodeStatus};
use crate::trace::TraceEvent;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the depth-grouped recursion tree.
///
/// Nodes not yet reached by the cursor are dimmed; the node of the current
/// event is highlighted.
#[allow(clippy::too_many_arguments)]
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[TraceEvent],
    memo: &MemoStore,
    n: u32,
    result: u64,
    current: Option<&TraceEvent>,
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
        .title(format!(" Recursion Tree — N = {}, count = {} ", n, result))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    if events.is_empty() {
        let paragraph = Paragraph::new("(no trace)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let grouped = grouped_by_depth(events, memo, n, Some(position));

    let mut lines: Vec<Line> = Vec::new();
    for (depth, nodes) in &grouped {
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("depth {:>2}  ", depth),
            Style::default().fg(DEFAULT_THEME.comment),
        )];

        for node in nodes {
            let status_fg = match node.status {
                NodeStatus::Success => DEFAULT_THEME.success,
                NodeStatus::Accumulated => DEFAULT_THEME.primary,
                NodeStatus::Failed => DEFAULT_THEME.error,
                NodeStatus::Pending => DEFAULT_THEME.node,
            };

            // Not-yet-revealed nodes render fully dimmed
            let (mut sig_style, mut value_style) = if node.visited {
                (
                    Style::default().fg(status_fg),
                    Style::default().fg(DEFAULT_THEME.result_value),
                )
            } else {
                let dim = Style::default().fg(DEFAULT_THEME.comment);
                (dim, dim)
            };

            let is_current = current
                .is_some_and(|e| e.sig == node.sig && e.depth == node.depth);
            if is_current {
                sig_style = sig_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
                value_style = value_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }

            spans.push(Span::styled(format!(" {}", node.sig), sig_style));
            if let Some(value) = node.result(memo) {
                spans.push(Span::styled(format!("={} ", value), value_style));
            } else {
                spans.push(Span::styled(" ", sig_style));
            }
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    // Drop the trailing spacer row
    lines.pop();

    // Clamp scroll offset only if content exceeds visible area
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
