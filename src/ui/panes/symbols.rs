//! Symbol table pane rendering

use super::{border_style, clamp_scroll};
use crate::snapshot::LineSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the declared names after the current line. Names declared by that
/// line are highlighted.
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&LineSnapshot>,
    capacity: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let names: &[String] = snapshot.map(|s| s.symbols.as_slice()).unwrap_or(&[]);
    let block = Block::default()
        .title(format!(" Symbols {}/{} ", names.len(), capacity))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if names.is_empty() {
        let paragraph = Paragraph::new("(no variables declared)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let declared = snapshot.map(|s| s.declared()).unwrap_or(&[]);
    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let name_style = if declared.contains(name) {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:3} ", idx), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(name.clone(), name_style),
            ]))
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
