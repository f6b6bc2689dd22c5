//! Combined search, filter, sort, and grouping scenarios

use chrono::NaiveDate;
use taskdeck::store::{
    filter_and_sort, group_by_status, Priority, Query, SortField, SortOrder, Status, TaskDraft,
    TaskStore,
};

/// A small board: errands and work tasks across all statuses.
fn seeded_store() -> TaskStore {
    let mut store = TaskStore::new();
    let entries = [
        ("Buy groceries", None, Priority::Low, Status::Pending, Some("2026-08-07")),
        ("File expense report", Some("scan the receipts"), Priority::Medium, Status::Pending, Some("2026-08-20")),
        ("Refactor login flow", Some("waiting on code review"), Priority::High, Status::InProgress, None),
        ("Draft launch email", None, Priority::High, Status::InProgress, Some("2026-08-12")),
        ("Renew passport", Some("appointment booked"), Priority::Medium, Status::Completed, None),
    ];
    for (title, description, priority, status, due) in entries {
        store
            .add(TaskDraft {
                title: title.to_string(),
                description: description.map(String::from),
                priority,
                status,
                due: due.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            })
            .unwrap();
    }
    store
}

fn titles(tasks: &[taskdeck::store::Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn search_reaches_descriptions() {
    let store = seeded_store();
    let query = Query {
        search: "receipts".to_string(),
        ..Default::default()
    };

    assert_eq!(
        titles(&filter_and_sort(store.tasks(), &query)),
        vec!["File expense report"]
    );
}

#[test]
fn search_is_case_insensitive_and_combines_with_status_filter() {
    let store = seeded_store();
    let query = Query {
        search: "RE".to_string(),
        status: Some(Status::InProgress),
        ..Default::default()
    };

    let out = filter_and_sort(store.tasks(), &query);
    assert!(titles(&out).contains(&"Refactor login flow"));
    assert!(out.iter().all(|t| t.status == Status::InProgress));
}

#[test]
fn priority_filter_and_priority_sort() {
    let store = seeded_store();

    let query = Query {
        priority: Some(Priority::High),
        ..Default::default()
    };
    let high = filter_and_sort(store.tasks(), &query);
    assert_eq!(high.len(), 2);
    assert!(high.iter().all(|t| t.priority == Priority::High));

    let query = Query {
        sort_by: SortField::Priority,
        sort_order: SortOrder::Descending,
        ..Default::default()
    };
    let sorted = filter_and_sort(store.tasks(), &query);
    let priorities: Vec<Priority> = sorted.iter().map(|t| t.priority).collect();
    let mut expected = priorities.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(priorities, expected);
    assert_eq!(sorted[0].priority, Priority::High);
    assert_eq!(sorted.last().unwrap().priority, Priority::Low);
}

#[test]
fn due_sort_puts_undated_tasks_last_in_both_orders() {
    let store = seeded_store();

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let query = Query {
            sort_by: SortField::Due,
            sort_order: order,
            ..Default::default()
        };
        let sorted = filter_and_sort(store.tasks(), &query);

        let first_undated = sorted.iter().position(|t| t.due.is_none()).unwrap();
        assert!(
            sorted[first_undated..].iter().all(|t| t.due.is_none()),
            "undated tasks must be contiguous at the end ({order:?})"
        );
    }

    let query = Query {
        sort_by: SortField::Due,
        sort_order: SortOrder::Ascending,
        ..Default::default()
    };
    let sorted = filter_and_sort(store.tasks(), &query);
    assert_eq!(sorted[0].title, "Buy groceries");

    let query = Query {
        sort_by: SortField::Due,
        sort_order: SortOrder::Descending,
        ..Default::default()
    };
    let sorted = filter_and_sort(store.tasks(), &query);
    assert_eq!(sorted[0].title, "File expense report");
}

#[test]
fn grouping_follows_the_filtered_and_sorted_view() {
    let store = seeded_store();
    let query = Query {
        sort_by: SortField::Priority,
        sort_order: SortOrder::Descending,
        ..Default::default()
    };

    let groups = group_by_status(&filter_and_sort(store.tasks(), &query));

    let statuses: Vec<Status> = groups.iter().map(|(s, _)| *s).collect();
    assert_eq!(
        statuses,
        vec![Status::Pending, Status::InProgress, Status::Completed]
    );

    // Within Pending, Medium sorts before Low under descending priority.
    let pending = &groups[0].1;
    assert_eq!(
        titles(pending),
        vec!["File expense report", "Buy groceries"]
    );
}

#[test]
fn filtered_grouping_omits_empty_sections() {
    let store = seeded_store();
    let query = Query {
        priority: Some(Priority::High),
        ..Default::default()
    };

    let groups = group_by_status(&filter_and_sort(store.tasks(), &query));
    let statuses: Vec<Status> = groups.iter().map(|(s, _)| *s).collect();
    assert_eq!(statuses, vec![Status::InProgress]);
}

#[test]
fn unmatched_search_yields_an_empty_view() {
    let store = seeded_store();
    let query = Query {
        search: "no such task".to_string(),
        ..Default::default()
    };

    assert!(filter_and_sort(store.tasks(), &query).is_empty());
    assert!(group_by_status(&filter_and_sort(store.tasks(), &query)).is_empty());
}
