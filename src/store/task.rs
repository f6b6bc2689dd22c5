//! Task data model

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDueDate(String),
    #[error("No task with id '{0}'")]
    NotFound(String),
}

/// Task priority, ordered Low < Medium < High so that a descending sort
/// puts High first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Cycle order used by form selectors and the priority filter.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Workflow stage of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl Status {
    /// Fixed order in which status sections are displayed.
    pub const DISPLAY_ORDER: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "in progress" | "in-progress" | "inprogress" => Some(Self::InProgress),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Payload for creating a task or replacing an existing task's content.
/// The form dialog always submits every field, so updates carry a full
/// draft rather than a partial patch.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    pub status: Status,
}

impl TaskDraft {
    /// Trim the title and reject drafts without one.
    fn validated(mut self) -> Result<Self, TaskError> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if let Some(desc) = &self.description {
            if desc.trim().is_empty() {
                self.description = None;
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Result<Self, TaskError> {
        let draft = draft.validated()?;
        let now = Utc::now();
        Ok(Self {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            due: draft.due,
            priority: draft.priority,
            status: draft.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Completion is derived from status rather than stored, so the two can
    /// never disagree.
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    pub fn is_overdue(&self) -> bool {
        match self.due {
            Some(due) => due < Utc::now().date_naive() && !self.is_completed(),
            None => false,
        }
    }

    pub fn is_due_today(&self) -> bool {
        self.due == Some(Utc::now().date_naive())
    }

    /// Replace the task's content with a validated draft, refreshing
    /// `updated_at`. Id and creation time are preserved.
    pub(crate) fn apply(&mut self, draft: TaskDraft) -> Result<(), TaskError> {
        let draft = draft.validated()?;
        self.title = draft.title;
        self.description = draft.description;
        self.due = draft.due;
        self.priority = draft.priority;
        self.status = draft.status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Flip completion: a completed task goes back to Pending, anything
    /// else becomes Completed.
    pub(crate) fn toggle(&mut self) {
        self.status = if self.is_completed() {
            Status::Pending
        } else {
            Status::Completed
        };
        self.updated_at = Utc::now();
    }
}

/// Parse a due-date field as entered in the form. Empty input means no due
/// date; anything else must be an ISO calendar date.
pub fn parse_due(s: &str) -> Result<Option<NaiveDate>, TaskError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TaskError::InvalidDueDate(s.to_string()))
}

fn generate_id() -> String {
    Uuid::new_v4().to_string().replace("-", "")[..16].to_string()
}
