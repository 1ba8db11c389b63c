//! Source pane rendering with syntax highlighting
//!
//! Shows the whole input file with line numbers. The line of the current
//! snapshot is highlighted, in the error colour when that line was rejected.
//! The view scrolls to keep the current line at a fixed row.

use super::border_style;
use crate::parser::declarations::is_reserved_word;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlighting for the int-only subset: keywords, numbers, operators
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            spans.push(Span::styled(current_word.clone(), word_style(&current_word)));
            current_word.clear();
        }

        let style = match c {
            '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    if word == "int" {
        Style::default().fg(DEFAULT_THEME.type_name)
    } else if is_reserved_word(word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the source pane. `current_line` is 1-based; 0 means no line.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    is_error: bool,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target row, clamped to the file
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);
        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let line_num_str = format!("{:4} ", line_num);

            let mut content_line = highlight_source_code(line);

            let num_style = if is_current && is_error {
                for span in &mut content_line.spans {
                    span.style = Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD);
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                for span in &mut content_line.spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_splits_words_and_symbols() {
        let line = highlight_source_code("int a = (42);");
        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["int", " ", "a", " ", "=", " ", "(", "42", ")", ";"]);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.type_name));
        assert_eq!(line.spans[7].style.fg, Some(DEFAULT_THEME.number));
    }
}
