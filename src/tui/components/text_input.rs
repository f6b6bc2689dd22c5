//! Shared text input rendering component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Label column width inside form dialogs, so values line up.
pub const LABEL_WIDTH: usize = 13;

/// Render a labelled text field. A focused field underlines its label and
/// draws an inverse-video cursor; an empty field shows its placeholder in
/// dimmed text.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    let placeholder_style = Style::default().fg(theme.dimmed);

    let mut spans = vec![Span::styled(
        format!("{:<width$}", label, width = LABEL_WIDTH),
        label_style,
    )];

    let value = input.value();
    if is_focused {
        let cursor = input.visual_cursor();
        let before: String = value.chars().take(cursor).collect();
        let at: String = value
            .chars()
            .nth(cursor)
            .map(String::from)
            .unwrap_or_else(|| " ".to_string());
        let after: String = value.chars().skip(cursor + 1).collect();

        if !before.is_empty() {
            spans.push(Span::styled(before, value_style));
        }
        spans.push(Span::styled(
            at,
            Style::default().fg(theme.background).bg(theme.accent),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
        if value.is_empty() {
            if let Some(text) = placeholder {
                spans.push(Span::styled(text, placeholder_style));
            }
        }
    } else if value.is_empty() {
        if let Some(text) = placeholder {
            spans.push(Span::styled(text, placeholder_style));
        }
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
