//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

use super::home::HomeView;
use super::styles::Theme;
use crate::config::Config;
use crate::store::Query;

pub struct App {
    home: HomeView,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        let query = Query {
            sort_by: config.defaults.sort_by,
            sort_order: config.defaults.sort_order,
            ..Default::default()
        };

        Self {
            home: HomeView::new(query),
            theme,
            should_quit: false,
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            // Poll with a short timeout for responsive input
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => {
                        self.handle_key(key);
                        terminal.draw(|f| self.render(f))?;
                        if self.should_quit {
                            break;
                        }
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|f| self.render(f))?;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits; plain 'q' is handled by the home view so it
        // can type into dialogs.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new(&Config::default(), Theme::default());
        app.handle_key(key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(&Config::default(), Theme::default());
        app.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = App::new(&Config::default(), Theme::default());
        app.handle_key(key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_q_types_into_open_dialog() {
        let mut app = App::new(&Config::default(), Theme::default());
        app.handle_key(key(KeyCode::Char('n'), KeyModifiers::NONE));
        app.handle_key(key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_app_honors_config_sort_defaults() {
        use crate::config::DefaultsConfig;
        use crate::store::{SortField, SortOrder};

        let config = Config {
            defaults: DefaultsConfig {
                sort_by: SortField::Priority,
                sort_order: SortOrder::Ascending,
            },
            ..Default::default()
        };

        let app = App::new(&config, Theme::default());
        assert_eq!(app.home.query().sort_by, SortField::Priority);
        assert_eq!(app.home.query().sort_order, SortOrder::Ascending);
    }
}
