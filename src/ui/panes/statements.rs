//! Statements pane rendering

use super::{border_style, clamp_scroll};
use crate::compiler::report::format_statement;
use crate::snapshot::LineSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the statements extracted from the current line, or why it was rejected
pub fn render_statements_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&LineSnapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match snapshot {
        Some(snapshot) => format!(" Statements (line {}) ", snapshot.line),
        None => " Statements ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no lines processed)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    if let Some(error) = snapshot.error() {
        let text = vec![
            Line::from(Span::styled(
                "Invalid syntax",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                error.kind.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            )),
            Line::from(Span::styled(
                format!("at column {}", error.location.column),
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(block.padding(Padding::new(1, 0, 0, 0)))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = snapshot
        .statements()
        .iter()
        .map(|statement| {
            let color = if statement.is_declaration() {
                DEFAULT_THEME.type_name
            } else {
                DEFAULT_THEME.fg
            };
            ListItem::new(format_statement(statement)).style(Style::default().fg(color))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
