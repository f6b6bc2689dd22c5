//! Derived task views
//!
//! Pure functions that turn the task list plus the current query state into
//! what the UI displays. Nothing here mutates the store; every derivation
//! allocates a fresh result.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::task::{Priority, Status, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Created,
    Due,
    Priority,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Due => "Due",
            Self::Priority => "Priority",
        }
    }

    /// Next field in the cycle used by the sort control.
    pub fn next(&self) -> Self {
        match self {
            Self::Created => Self::Due,
            Self::Due => Self::Priority,
            Self::Priority => Self::Created,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Search, filter, and sort state. `None` filters mean "All". The default
/// matches the initial UI state: no filters, newest first.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub search: String,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Query {
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.priority.is_some()
    }

    fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Apply the query's filters and sort to a task list. The sort is stable,
/// so ties keep their insertion order.
pub fn filter_and_sort(tasks: &[Task], query: &Query) -> Vec<Task> {
    let mut out: Vec<Task> = tasks.iter().filter(|t| query.matches(t)).cloned().collect();
    out.sort_by(|a, b| compare(a, b, query));
    out
}

fn compare(a: &Task, b: &Task, query: &Query) -> Ordering {
    let directed = |ord: Ordering| match query.sort_order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    };

    match query.sort_by {
        SortField::Created => directed(a.created_at.cmp(&b.created_at)),
        SortField::Priority => directed(a.priority.cmp(&b.priority)),
        // Undated tasks sort after dated ones in either direction.
        SortField::Due => match (a.due, b.due) {
            (Some(a_due), Some(b_due)) => directed(a_due.cmp(&b_due)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Partition a filtered/sorted list into status sections in display order.
/// Empty sections are omitted.
pub fn group_by_status(tasks: &[Task]) -> Vec<(Status, Vec<Task>)> {
    Status::DISPLAY_ORDER
        .iter()
        .filter_map(|&status| {
            let section: Vec<Task> = tasks
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .collect();
            if section.is_empty() {
                None
            } else {
                Some((status, section))
            }
        })
        .collect()
}
