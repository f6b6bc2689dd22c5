//! Shared one-of-N selector rendering component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::text_input::LABEL_WIDTH;
use crate::tui::styles::Theme;

/// Render a labelled horizontal selector: one radio marker per option, the
/// selected one highlighted. Cycling is handled by the owning dialog.
pub fn render_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: usize,
    is_focused: bool,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}", label, width = LABEL_WIDTH),
        label_style,
    )];

    for (idx, option) in options.iter().enumerate() {
        let is_selected = idx == selected;
        let style = if is_selected && is_focused {
            Style::default().fg(theme.accent).bold()
        } else if is_selected {
            Style::default().fg(theme.text).bold()
        } else {
            Style::default().fg(theme.dimmed)
        };

        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(if is_selected { "● " } else { "○ " }, style));
        spans.push(Span::styled(*option, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
