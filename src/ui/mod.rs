//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The viewer steps through a finished run one processed line at a time:
//!
//! - **[`app`]** — viewer state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each pane (source,
//!   statements, symbols, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] from a [`Session`] and call [`App::run`].
//!
//! [`Session`]: crate::compiler::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
