//! Home view - grouped task list, search, filters, and dialogs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{ConfirmDialog, DialogResult, TaskFormData, TaskFormDialog};
use super::styles::Theme;
use crate::store::{filter_and_sort, group_by_status, Priority, Query, Status, Task, TaskStore};

/// One visible line in the task list: a status section header or a task.
#[derive(Debug, Clone)]
enum Row {
    Header {
        status: Status,
        count: usize,
        collapsed: bool,
    },
    Task {
        id: String,
    },
}

pub struct HomeView {
    store: TaskStore,
    query: Query,
    rows: Vec<Row>,
    collapsed: HashSet<Status>,

    // UI state
    cursor: usize,
    selected_task: Option<String>,

    // Dialogs
    show_help: bool,
    form_dialog: Option<TaskFormDialog>,
    confirm_dialog: Option<ConfirmDialog>,

    // Search
    search_active: bool,
}

impl HomeView {
    pub fn new(query: Query) -> Self {
        let mut view = Self {
            store: TaskStore::new(),
            query,
            rows: Vec::new(),
            collapsed: HashSet::new(),
            cursor: 0,
            selected_task: None,
            show_help: false,
            form_dialog: None,
            confirm_dialog: None,
            search_active: false,
        };
        view.rebuild_rows();
        view
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.form_dialog.is_some() || self.confirm_dialog.is_some()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Re-derive the visible rows from the store and the current query.
    fn rebuild_rows(&mut self) {
        let visible = filter_and_sort(self.store.tasks(), &self.query);

        self.rows.clear();
        for (status, tasks) in group_by_status(&visible) {
            let collapsed = self.collapsed.contains(&status);
            self.rows.push(Row::Header {
                status,
                count: tasks.len(),
                collapsed,
            });
            if !collapsed {
                for task in tasks {
                    self.rows.push(Row::Task { id: task.id });
                }
            }
        }

        if self.cursor >= self.rows.len() && !self.rows.is_empty() {
            self.cursor = self.rows.len() - 1;
        }
        self.update_selected();
    }

    fn update_selected(&mut self) {
        self.selected_task = match self.rows.get(self.cursor) {
            Some(Row::Task { id }) => Some(id.clone()),
            _ => None,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Dialogs swallow input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.form_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.form_dialog = None;
                }
                DialogResult::Submit(data) => {
                    self.form_dialog = None;
                    self.apply_form(data);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                }
                DialogResult::Submit(()) => {
                    self.confirm_dialog = None;
                    self.delete_selected();
                }
            }
            return None;
        }

        // Incremental search mode
        if self.search_active {
            match key.code {
                KeyCode::Esc => {
                    self.search_active = false;
                    self.query.search.clear();
                    self.rebuild_rows();
                }
                KeyCode::Enter => {
                    self.search_active = false;
                }
                KeyCode::Backspace => {
                    self.query.search.pop();
                    self.rebuild_rows();
                }
                KeyCode::Char(c) => {
                    self.query.search.push(c);
                    self.rebuild_rows();
                }
                _ => {}
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('/') => {
                self.search_active = true;
                self.query.search.clear();
                self.rebuild_rows();
            }
            KeyCode::Char('n') => {
                self.form_dialog = Some(TaskFormDialog::new());
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.selected().cloned() {
                    self.form_dialog = Some(TaskFormDialog::edit(&task));
                }
            }
            KeyCode::Char('d') => {
                if self.selected_task.is_some() {
                    self.confirm_dialog = Some(ConfirmDialog::new(
                        "Delete Task",
                        "Are you sure you want to delete this task? This action cannot be undone.",
                    ));
                }
            }
            KeyCode::Char(' ') => {
                self.toggle_selected();
            }
            KeyCode::Char('s') => {
                self.cycle_status_filter();
            }
            KeyCode::Char('p') => {
                self.cycle_priority_filter();
            }
            KeyCode::Char('o') => {
                self.query.sort_by = self.query.sort_by.next();
                self.rebuild_rows();
            }
            KeyCode::Char('r') => {
                self.query.sort_order = self.query.sort_order.reversed();
                self.rebuild_rows();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
            }
            KeyCode::PageUp => {
                self.move_cursor(-10);
            }
            KeyCode::PageDown => {
                self.move_cursor(10);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                self.update_selected();
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !self.rows.is_empty() {
                    self.cursor = self.rows.len() - 1;
                    self.update_selected();
                }
            }
            KeyCode::Enter => match self.rows.get(self.cursor) {
                Some(Row::Task { .. }) => self.toggle_selected(),
                Some(Row::Header { status, .. }) => {
                    let status = *status;
                    self.toggle_collapsed(status);
                }
                None => {}
            },
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(Row::Header {
                    status, collapsed, ..
                }) = self.rows.get(self.cursor)
                {
                    if !collapsed {
                        let status = *status;
                        self.toggle_collapsed(status);
                    }
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(Row::Header {
                    status, collapsed, ..
                }) = self.rows.get(self.cursor)
                {
                    if *collapsed {
                        let status = *status;
                        self.toggle_collapsed(status);
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn selected(&self) -> Option<&Task> {
        self.selected_task.as_deref().and_then(|id| self.store.get(id))
    }

    fn move_cursor(&mut self, delta: i32) {
        if self.rows.is_empty() {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub((-delta) as usize)
        } else {
            (self.cursor + delta as usize).min(self.rows.len() - 1)
        };
        self.update_selected();
    }

    fn toggle_collapsed(&mut self, status: Status) {
        if !self.collapsed.remove(&status) {
            self.collapsed.insert(status);
        }
        self.rebuild_rows();
    }

    fn cycle_status_filter(&mut self) {
        self.query.status = match self.query.status {
            None => Some(Status::Pending),
            Some(Status::Pending) => Some(Status::InProgress),
            Some(Status::InProgress) => Some(Status::Completed),
            Some(Status::Completed) => None,
        };
        self.rebuild_rows();
    }

    fn cycle_priority_filter(&mut self) {
        self.query.priority = match self.query.priority {
            None => Some(Priority::High),
            Some(Priority::High) => Some(Priority::Medium),
            Some(Priority::Medium) => Some(Priority::Low),
            Some(Priority::Low) => None,
        };
        self.rebuild_rows();
    }

    fn apply_form(&mut self, data: TaskFormData) {
        let result = match &data.editing {
            Some(id) => self.store.update(id, data.draft).map(|_| ()),
            None => self.store.add(data.draft).map(|_| ()),
        };
        if let Err(e) = result {
            tracing::error!("Failed to save task: {}", e);
        }
        self.rebuild_rows();
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task.clone() {
            if let Err(e) = self.store.toggle(&id) {
                tracing::error!("Failed to toggle task: {}", e);
            }
            self.rebuild_rows();
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task.take() {
            if let Err(e) = self.store.remove(&id) {
                tracing::error!("Failed to delete task: {}", e);
            }
            self.rebuild_rows();
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Layout: content, filter line, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        // Layout: left panel (list) and right panel (details)
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        self.render_list(frame, chunks[0], theme);
        self.render_details(frame, chunks[1], theme);
        self.render_filter_line(frame, main_chunks[1], theme);
        self.render_status_bar(frame, main_chunks[2], theme);

        // Dialogs on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
        if let Some(dialog) = &self.form_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Taskdeck ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'n' to add one").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        if self.rows.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks match the current filters")
                    .style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Adjust the search or press 's'/'p' to change filters")
                    .style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let list_items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.render_row(row, idx == self.cursor, inner.width as usize, theme))
            .collect();

        let list = List::new(list_items);
        frame.render_widget(list, inner);
    }

    fn render_row(
        &self,
        row: &Row,
        is_selected: bool,
        width: usize,
        theme: &Theme,
    ) -> ListItem<'_> {
        let line = match row {
            Row::Header {
                status,
                count,
                collapsed,
            } => {
                let marker = if *collapsed { "▶" } else { "▼" };
                let style = Style::default().fg(theme.status_color(*status)).bold();
                Line::from(vec![
                    Span::styled(format!("{} ", marker), style),
                    Span::styled(format!("{} ({})", status.label(), count), style),
                ])
            }
            Row::Task { id } => match self.store.get(id) {
                Some(task) => self.task_line(task, width, theme),
                None => Line::from(Span::styled("?", Style::default().fg(theme.dimmed))),
            },
        };

        if is_selected {
            ListItem::new(line).style(Style::default().bg(theme.selection))
        } else {
            ListItem::new(line)
        }
    }

    fn task_line(&self, task: &Task, width: usize, theme: &Theme) -> Line<'_> {
        let icon = match task.status {
            Status::Pending => "○",
            Status::InProgress => "◐",
            Status::Completed => "✔",
        };
        let icon_style = Style::default().fg(theme.status_color(task.status));

        let title_style = if task.is_completed() {
            Style::default().fg(theme.dimmed).crossed_out()
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{} ", icon), icon_style),
        ];

        // Reserve room for the trailing priority/due tags.
        let due_tag = task.due.map(|d| d.format("%b %d").to_string());
        let tag_width = 3 + task.priority.label().len()
            + due_tag.as_ref().map(|d| d.len() + 3).unwrap_or(0);
        let title_width = width.saturating_sub(4 + tag_width + 1);
        spans.push(Span::styled(
            truncate_width(&task.title, title_width),
            title_style,
        ));

        spans.push(Span::styled(" · ", Style::default().fg(theme.dimmed)));
        spans.push(Span::styled(
            task.priority.label(),
            Style::default().fg(theme.priority_color(task.priority)),
        ));

        if let Some(due) = due_tag {
            let due_style = if task.is_overdue() {
                Style::default().fg(theme.overdue).bold()
            } else {
                Style::default().fg(theme.hint)
            };
            spans.push(Span::styled(" · ", Style::default().fg(theme.dimmed)));
            spans.push(Span::styled(due, due_style));
        }

        Line::from(spans)
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Details ")
            .title_style(Style::default().fg(theme.title));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(task) = self.selected() else {
            let hint = Paragraph::new("Select a task to see details")
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        };

        let label = Style::default().fg(theme.dimmed);
        let mut lines = vec![
            Line::from(Span::styled(
                task.title.clone(),
                Style::default().fg(theme.text).bold(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Status:    ", label),
                Span::styled(
                    task.status.label(),
                    Style::default().fg(theme.status_color(task.status)),
                ),
            ]),
            Line::from(vec![
                Span::styled("Priority:  ", label),
                Span::styled(
                    task.priority.label(),
                    Style::default().fg(theme.priority_color(task.priority)),
                ),
            ]),
        ];

        let due_line = match task.due {
            Some(due) => {
                let mut spans = vec![
                    Span::styled("Due:       ", label),
                    Span::styled(
                        due.format("%Y-%m-%d").to_string(),
                        Style::default().fg(theme.text),
                    ),
                ];
                if task.is_overdue() {
                    spans.push(Span::styled(
                        "  (overdue)",
                        Style::default().fg(theme.overdue).bold(),
                    ));
                } else if task.is_due_today() {
                    spans.push(Span::styled("  (today)", Style::default().fg(theme.pending)));
                }
                Line::from(spans)
            }
            None => Line::from(vec![
                Span::styled("Due:       ", label),
                Span::styled("—", Style::default().fg(theme.dimmed)),
            ]),
        };
        lines.push(due_line);

        lines.push(Line::from(vec![
            Span::styled("Created:   ", label),
            Span::styled(
                task.created_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(theme.text),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Updated:   ", label),
            Span::styled(
                task.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(theme.text),
            ),
        ]));

        if let Some(description) = &task.description {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(theme.text),
            )));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }

    fn render_filter_line(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let label = Style::default().fg(theme.dimmed);
        let value = Style::default().fg(theme.text);
        let sep = Span::styled(" │ ", Style::default().fg(theme.border));

        let mut spans = Vec::new();

        if self.search_active {
            spans.push(Span::styled(
                format!(" /{}", self.query.search),
                Style::default().fg(theme.search),
            ));
            spans.push(Span::styled("█", Style::default().fg(theme.search)));
            spans.push(sep.clone());
        } else if !self.query.search.is_empty() {
            spans.push(Span::styled(" Search: ", label));
            spans.push(Span::styled(self.query.search.clone(), value));
            spans.push(sep.clone());
        } else {
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled("Status: ", label));
        spans.push(match self.query.status {
            Some(status) => Span::styled(
                status.label(),
                Style::default().fg(theme.status_color(status)),
            ),
            None => Span::styled("All", value),
        });
        spans.push(sep.clone());

        spans.push(Span::styled("Priority: ", label));
        spans.push(match self.query.priority {
            Some(priority) => Span::styled(
                priority.label(),
                Style::default().fg(theme.priority_color(priority)),
            ),
            None => Span::styled("All", value),
        });
        spans.push(sep);

        spans.push(Span::styled("Sort: ", label));
        spans.push(Span::styled(
            format!(
                "{} {}",
                self.query.sort_by.label(),
                self.query.sort_order.arrow()
            ),
            value,
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" j/k", key_style),
            Span::styled(" Navigate ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Space", key_style),
            Span::styled(" Toggle ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" n", key_style),
            Span::styled(" New ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" e", key_style),
            Span::styled(" Edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Delete ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" /", key_style),
            Span::styled(" Search ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}

/// Truncate a string to a display width, appending an ellipsis when cut.
fn truncate_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let avail = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > avail {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
