//! TUI dialog components

mod confirm;
mod task_form;

pub use confirm::ConfirmDialog;
pub use task_form::{TaskFormData, TaskFormDialog};

use ratatui::prelude::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// Center a fixed-size dialog inside the given area, clamping to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
