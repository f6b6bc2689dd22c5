//! Help overlay component

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::dialogs::centered_rect;
use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 46;

/// Shortcut sections in display order. The overlay sizes itself to fit.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("h/←", "Collapse section"),
            ("l/→", "Expand section"),
            ("g", "Go to top"),
            ("G", "Go to bottom"),
        ],
    ),
    (
        "Tasks",
        &[
            ("Space", "Toggle complete"),
            ("n", "New task"),
            ("e", "Edit task"),
            ("d", "Delete task"),
        ],
    ),
    (
        "Filters",
        &[
            ("/", "Search"),
            ("s", "Cycle status filter"),
            ("p", "Cycle priority filter"),
            ("o", "Cycle sort field"),
            ("r", "Reverse sort order"),
        ],
    ),
    ("Other", &[("?", "Toggle help"), ("q", "Quit")]),
];

fn line_count() -> usize {
    // One header per section, one blank line between sections.
    let shortcuts: usize = SECTIONS.iter().map(|(_, keys)| keys.len()).sum();
    SECTIONS.len() + shortcuts + SECTIONS.len().saturating_sub(1)
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, DIALOG_WIDTH, line_count() as u16 + 2);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut lines: Vec<Line> = Vec::with_capacity(line_count());
        for (i, (section, keys)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                *section,
                Style::default().fg(theme.accent).bold(),
            )));
            for (keybind, desc) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {keybind:<9}"),
                        Style::default().fg(theme.pending),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.text)),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_content_fits_in_dialog() {
        let available_width = (DIALOG_WIDTH - 2) as usize;
        for (section, keys) in SECTIONS {
            assert!(
                section.len() <= available_width,
                "Section header '{section}' exceeds dialog width ({available_width} chars)"
            );
            for (keybind, desc) in *keys {
                // 2-space indent plus the 9-char key column
                let line_width = 11 + desc.len();
                assert!(
                    line_width <= available_width,
                    "Shortcut '{keybind}' description '{desc}' exceeds dialog width ({line_width} > {available_width})"
                );
            }
        }
    }

    #[test]
    fn line_count_matches_sections() {
        let shortcuts: usize = SECTIONS.iter().map(|(_, keys)| keys.len()).sum();
        assert_eq!(line_count(), shortcuts + 2 * SECTIONS.len() - 1);
    }
}
