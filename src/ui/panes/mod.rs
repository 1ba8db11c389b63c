//! TUI pane rendering modules
//!
//! - [`source`]: input file with the current line highlighted
//! - [`statements`]: statements extracted from the current line, or its rejection
//! - [`symbols`]: symbol table as it stood after the current line
//! - [`status`]: status bar with position and keybindings
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state and only mutates its own scroll offset.

pub mod source;
pub mod statements;
pub mod status;
pub mod symbols;

pub use source::{render_source_pane, SourceScrollState};
pub use statements::render_statements_pane;
pub use status::render_status_bar;
pub use symbols::render_symbols_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a list scroll offset so the last page stays full.
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }
}
