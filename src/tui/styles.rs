//! TUI theme and styling

use ratatui::style::Color;

use crate::store::{Priority, Status};

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Status colors
    pub pending: Color,
    pub in_progress: Color,
    pub completed: Color,
    pub overdue: Color,

    // Priority colors
    pub high: Color,
    pub medium: Color,
    pub low: Color,

    // UI elements
    pub search: Color,
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    pub const NAMES: [&'static str; 3] = ["phosphor", "slate", "paper"];

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "phosphor" => Some(Self::phosphor()),
            "slate" => Some(Self::slate()),
            "paper" => Some(Self::paper()),
            _ => None,
        }
    }

    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            pending: Color::Rgb(255, 180, 60),
            in_progress: Color::Rgb(130, 170, 255),
            completed: Color::Rgb(0, 255, 180),
            overdue: Color::Rgb(255, 100, 80),

            high: Color::Rgb(255, 100, 80),
            medium: Color::Rgb(255, 200, 90),
            low: Color::Rgb(100, 220, 160),

            search: Color::Rgb(180, 255, 200),
            accent: Color::Rgb(57, 255, 20),
            error: Color::Rgb(255, 100, 80),
        }
    }

    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(22, 24, 30),
            border: Color::Rgb(60, 66, 82),
            selection: Color::Rgb(44, 50, 66),

            title: Color::Rgb(130, 170, 255),
            text: Color::Rgb(200, 206, 220),
            dimmed: Color::Rgb(100, 106, 124),
            hint: Color::Rgb(130, 140, 165),

            pending: Color::Rgb(230, 180, 80),
            in_progress: Color::Rgb(130, 170, 255),
            completed: Color::Rgb(120, 220, 160),
            overdue: Color::Rgb(240, 110, 110),

            high: Color::Rgb(240, 110, 110),
            medium: Color::Rgb(230, 180, 80),
            low: Color::Rgb(120, 220, 160),

            search: Color::Rgb(180, 200, 255),
            accent: Color::Rgb(130, 170, 255),
            error: Color::Rgb(240, 110, 110),
        }
    }

    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(246, 242, 232),
            border: Color::Rgb(180, 170, 150),
            selection: Color::Rgb(226, 218, 200),

            title: Color::Rgb(90, 60, 20),
            text: Color::Rgb(60, 54, 40),
            dimmed: Color::Rgb(150, 140, 120),
            hint: Color::Rgb(120, 110, 90),

            pending: Color::Rgb(180, 120, 20),
            in_progress: Color::Rgb(40, 90, 170),
            completed: Color::Rgb(40, 130, 80),
            overdue: Color::Rgb(180, 50, 40),

            high: Color::Rgb(180, 50, 40),
            medium: Color::Rgb(180, 120, 20),
            low: Color::Rgb(40, 130, 80),

            search: Color::Rgb(40, 90, 170),
            accent: Color::Rgb(90, 60, 20),
            error: Color::Rgb(180, 50, 40),
        }
    }

    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_resolves_all_listed_themes() {
        for name in Theme::NAMES {
            assert!(Theme::by_name(name).is_some(), "theme '{}' missing", name);
        }
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert!(Theme::by_name("Phosphor").is_some());
        assert!(Theme::by_name("SLATE").is_some());
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(Theme::by_name("neon").is_none());
    }
}
