//! Task create/edit form dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::store::{parse_due, Priority, Status, Task, TaskDraft, TaskError};
use crate::tui::components::{render_choice_field, render_text_field};
use crate::tui::styles::Theme;

const FIELD_TITLE: usize = 0;
const FIELD_DESCRIPTION: usize = 1;
const FIELD_DUE: usize = 2;
const FIELD_PRIORITY: usize = 3;
const FIELD_STATUS: usize = 4;
const FIELD_COUNT: usize = 5;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 15;

#[derive(Clone)]
pub struct TaskFormData {
    /// Id of the task being edited, `None` when creating.
    pub editing: Option<String>,
    pub draft: TaskDraft,
}

pub struct TaskFormDialog {
    editing: Option<String>,
    title: Input,
    description: Input,
    due: Input,
    priority_index: usize,
    status_index: usize,
    focused_field: usize,
    error_message: Option<String>,
}

impl TaskFormDialog {
    pub fn new() -> Self {
        Self {
            editing: None,
            title: Input::default(),
            description: Input::default(),
            due: Input::default(),
            priority_index: selector_index(&Priority::ALL, Priority::default()),
            status_index: selector_index(&Status::DISPLAY_ORDER, Status::default()),
            focused_field: FIELD_TITLE,
            error_message: None,
        }
    }

    /// Open the form pre-filled with an existing task's content.
    pub fn edit(task: &Task) -> Self {
        Self {
            editing: Some(task.id.clone()),
            title: Input::new(task.title.clone()),
            description: Input::new(task.description.clone().unwrap_or_default()),
            due: Input::new(
                task.due
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
            priority_index: selector_index(&Priority::ALL, task.priority),
            status_index: selector_index(&Status::DISPLAY_ORDER, task.status),
            focused_field: FIELD_TITLE,
            error_message: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn heading(&self) -> &'static str {
        if self.is_editing() {
            " Edit Task "
        } else {
            " New Task "
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskFormData> {
        let is_selector = matches!(self.focused_field, FIELD_PRIORITY | FIELD_STATUS);

        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => match self.build_draft() {
                Ok(draft) => DialogResult::Submit(TaskFormData {
                    editing: self.editing.clone(),
                    draft,
                }),
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    DialogResult::Continue
                }
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::Left if is_selector => {
                self.cycle_selector(false);
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if is_selector => {
                self.cycle_selector(true);
                DialogResult::Continue
            }
            _ => {
                if !is_selector {
                    self.current_input_mut()
                        .handle_event(&crossterm::event::Event::Key(key));
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    /// Collect and validate the form fields into a draft.
    fn build_draft(&mut self) -> Result<TaskDraft, TaskError> {
        let title = self.title.value().trim().to_string();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let due = parse_due(self.due.value())?;

        let description = self.description.value().trim();
        let description = if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        };

        Ok(TaskDraft {
            title,
            description,
            due,
            priority: Priority::ALL[self.priority_index],
            status: Status::DISPLAY_ORDER[self.status_index],
        })
    }

    fn cycle_selector(&mut self, forward: bool) {
        let (index, len) = match self.focused_field {
            FIELD_PRIORITY => (&mut self.priority_index, Priority::ALL.len()),
            FIELD_STATUS => (&mut self.status_index, Status::DISPLAY_ORDER.len()),
            _ => return,
        };
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }

    fn current_input_mut(&mut self) -> &mut Input {
        match self.focused_field {
            FIELD_DESCRIPTION => &mut self.description,
            FIELD_DUE => &mut self.due,
            _ => &mut self.title,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(self.heading())
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[FIELD_TITLE],
            "Title:",
            &self.title,
            self.focused_field == FIELD_TITLE,
            Some("(required)"),
            theme,
        );
        render_text_field(
            frame,
            chunks[FIELD_DESCRIPTION],
            "Description:",
            &self.description,
            self.focused_field == FIELD_DESCRIPTION,
            Some("(optional)"),
            theme,
        );
        render_text_field(
            frame,
            chunks[FIELD_DUE],
            "Due date:",
            &self.due,
            self.focused_field == FIELD_DUE,
            Some("YYYY-MM-DD"),
            theme,
        );

        let priority_labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
        render_choice_field(
            frame,
            chunks[FIELD_PRIORITY],
            "Priority:",
            &priority_labels,
            self.priority_index,
            self.focused_field == FIELD_PRIORITY,
            theme,
        );

        let status_labels: Vec<&str> = Status::DISPLAY_ORDER.iter().map(|s| s.label()).collect();
        render_choice_field(
            frame,
            chunks[FIELD_STATUS],
            "Status:",
            &status_labels,
            self.status_index,
            self.focused_field == FIELD_STATUS,
            theme,
        );

        if let Some(error) = &self.error_message {
            let error_line = Line::from(vec![
                Span::styled("✗ ", Style::default().fg(theme.error).bold()),
                Span::styled(error, Style::default().fg(theme.error)),
            ]);
            frame.render_widget(Paragraph::new(error_line), chunks[5]);
        } else {
            let action = if self.is_editing() { " save" } else { " add" };
            let hint = Line::from(vec![
                Span::styled("Tab", Style::default().fg(theme.hint)),
                Span::raw(" next  "),
                Span::styled("←/→", Style::default().fg(theme.hint)),
                Span::raw(" choose  "),
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(action),
                Span::raw("  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ]);
            frame.render_widget(Paragraph::new(hint), chunks[5]);
        }
    }
}

impl Default for TaskFormDialog {
    fn default() -> Self {
        Self::new()
    }
}

fn selector_index<T: PartialEq + Copy>(options: &[T], value: T) -> usize {
    options.iter().position(|&o| o == value).unwrap_or(0)
}
