//! TUI pane rendering modules
//!
//! Each pane module exports a `render_*_pane()` function plus whatever state
//! type it needs to keep between frames.
//!
//! - [`menu`]: algorithm list grouped by category
//! - [`info`]: name, description, complexity labels and outline
//! - [`bars`]: the data as bars, colored by the current step
//! - [`steps`]: the full step list with the current step marked
//! - [`complexity`]: complexity class bars and growth curve
//! - [`code`]: the algorithm's code snippet
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod code;
pub mod complexity;
pub mod info;
pub mod menu;
pub mod status;
pub mod steps;

pub use bars::{render_bars_pane, BarsRenderData};
pub use code::render_code_pane;
pub use complexity::render_complexity_pane;
pub use info::render_info_pane;
pub use menu::render_menu_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use steps::{render_steps_pane, StepsScrollState};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
