//! End-to-end task lifecycle through the public store API

use chrono::NaiveDate;
use taskdeck::store::{
    filter_and_sort, group_by_status, Priority, Query, Status, TaskDraft, TaskError, TaskStore,
};

fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn full_lifecycle_create_edit_toggle_delete() {
    let mut store = TaskStore::new();

    // Create
    let id = store
        .add(TaskDraft {
            title: "Plan the offsite".to_string(),
            description: Some("book a venue".to_string()),
            due: NaiveDate::from_ymd_opt(2026, 10, 1),
            priority: Priority::High,
            status: Status::Pending,
        })
        .unwrap()
        .id
        .clone();
    assert_eq!(store.len(), 1);

    // Edit: move it along and bump the due date
    store
        .update(
            &id,
            TaskDraft {
                title: "Plan the offsite".to_string(),
                description: Some("venue booked, send invites".to_string()),
                due: NaiveDate::from_ymd_opt(2026, 10, 15),
                priority: Priority::High,
                status: Status::InProgress,
            },
        )
        .unwrap();

    let task = store.get(&id).unwrap();
    assert_eq!(task.status, Status::InProgress);
    assert_eq!(task.due, NaiveDate::from_ymd_opt(2026, 10, 15));
    assert!(!task.is_completed());

    // Complete via toggle, then reopen
    store.toggle(&id).unwrap();
    assert!(store.get(&id).unwrap().is_completed());
    store.toggle(&id).unwrap();
    let task = store.get(&id).unwrap();
    assert_eq!(task.status, Status::Pending);
    assert!(!task.is_completed());

    // Delete
    store.remove(&id).unwrap();
    assert!(store.is_empty());
    assert!(matches!(store.toggle(&id), Err(TaskError::NotFound(_))));
}

#[test]
fn completion_stays_in_sync_across_every_mutation_path() {
    let mut store = TaskStore::new();

    let mut d = draft("a");
    d.status = Status::Completed;
    let id_a = store.add(d).unwrap().id.clone();
    let id_b = store.add(draft("b")).unwrap().id.clone();

    store.toggle(&id_b).unwrap();
    let mut d = draft("a");
    d.status = Status::InProgress;
    store.update(&id_a, d).unwrap();

    for task in store.tasks() {
        assert_eq!(task.is_completed(), task.status == Status::Completed);
    }
    assert!(store.get(&id_b).unwrap().is_completed());
}

#[test]
fn deleting_one_task_leaves_the_rest_untouched() {
    let mut store = TaskStore::new();
    let ids: Vec<String> = (0..5)
        .map(|i| store.add(draft(&format!("task {i}"))).unwrap().id.clone())
        .collect();

    store.remove(&ids[2]).unwrap();

    assert_eq!(store.len(), 4);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(store.get(id).is_some(), i != 2);
    }
}

#[test]
fn views_track_store_mutations() {
    let mut store = TaskStore::new();
    let id = store.add(draft("Write report")).unwrap().id.clone();
    store.add(draft("Walk dog")).unwrap();

    let query = Query {
        status: Some(Status::Completed),
        ..Default::default()
    };
    assert!(filter_and_sort(store.tasks(), &query).is_empty());

    store.toggle(&id).unwrap();

    let completed = filter_and_sort(store.tasks(), &query);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Write report");

    let groups = group_by_status(&filter_and_sort(store.tasks(), &Query::default()));
    let statuses: Vec<Status> = groups.iter().map(|(s, _)| *s).collect();
    assert_eq!(statuses, vec![Status::Pending, Status::Completed]);
}

#[test]
fn rejected_drafts_leave_the_store_unchanged() {
    let mut store = TaskStore::new();
    let id = store.add(draft("Valid")).unwrap().id.clone();

    assert!(matches!(store.add(draft("")), Err(TaskError::EmptyTitle)));
    assert!(matches!(
        store.update(&id, draft("  ")),
        Err(TaskError::EmptyTitle)
    ));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id).unwrap().title, "Valid");
}
