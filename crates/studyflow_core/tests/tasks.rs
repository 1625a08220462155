use chrono::NaiveDate;
use studyflow_core::repo::task_repo::InMemoryTaskRepository;
use studyflow_core::service::task_service::{TaskService, TaskServiceError};
use studyflow_core::{NewTask, TaskCategory, TaskFilter, TaskPatch, TaskPriority};
use uuid::Uuid;

fn service() -> TaskService<InMemoryTaskRepository> {
    TaskService::new(InMemoryTaskRepository::new())
}

#[test]
fn completed_filter_returns_only_completed_tasks() {
    let mut tasks = service();
    tasks.add_task(NewTask::titled("A")).unwrap();
    let b = tasks.add_task(NewTask::titled("B")).unwrap();
    tasks.toggle_task(b.id).unwrap();

    let filter: TaskFilter = "completed".parse().unwrap();
    let completed = tasks.list_tasks(filter).unwrap();

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, b.id);
    assert!(completed[0].completed);
}

#[test]
fn new_tasks_append_pending_with_form_defaults() {
    let mut tasks = service();
    tasks.add_task(NewTask::titled("first")).unwrap();
    let due = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
    let second = tasks
        .add_task(NewTask {
            title: "second".to_string(),
            priority: TaskPriority::High,
            category: TaskCategory::Exam,
            due_date: Some(due),
        })
        .unwrap();

    let all = tasks.list_tasks(TaskFilter::All).unwrap();
    assert_eq!(
        all.iter().map(|task| task.title.as_str()).collect::<Vec<_>>(),
        vec!["first", "second"]
    );
    assert_eq!(all[0].priority, TaskPriority::Medium);
    assert_eq!(all[0].category, TaskCategory::Study);
    assert!(!second.completed);
    assert_eq!(second.due_date, Some(due));
}

#[test]
fn blank_title_is_rejected_and_list_is_unchanged() {
    let mut tasks = service();
    tasks.add_task(NewTask::titled("keep")).unwrap();

    let err = tasks.add_task(NewTask::titled("   ")).unwrap_err();

    assert!(matches!(err, TaskServiceError::Invalid(_)));
    assert_eq!(tasks.counts().unwrap().all, 1);
}

#[test]
fn toggle_twice_restores_pending() {
    let mut tasks = service();
    let task = tasks.add_task(NewTask::titled("flip")).unwrap();

    assert!(tasks.toggle_task(task.id).unwrap().completed);
    assert!(!tasks.toggle_task(task.id).unwrap().completed);
}

#[test]
fn update_applies_patch_and_can_clear_due_date() {
    let mut tasks = service();
    let task = tasks
        .add_task(NewTask {
            title: "essay".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 7, 5),
            ..NewTask::default()
        })
        .unwrap();

    let updated = tasks
        .update_task(
            task.id,
            &TaskPatch {
                title: Some("final essay".to_string()),
                priority: Some(TaskPriority::Low),
                due_date: Some(None),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "final essay");
    assert_eq!(updated.priority, TaskPriority::Low);
    assert_eq!(updated.due_date, None);
    assert_eq!(tasks.get_task(task.id).unwrap(), Some(updated));
}

#[test]
fn patch_with_blank_title_is_rejected() {
    let mut tasks = service();
    let task = tasks.add_task(NewTask::titled("keep")).unwrap();

    let err = tasks
        .update_task(
            task.id,
            &TaskPatch {
                title: Some(String::new()),
                ..TaskPatch::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, TaskServiceError::Invalid(_)));
    assert_eq!(tasks.get_task(task.id).unwrap().unwrap().title, "keep");
}

#[test]
fn unknown_ids_report_not_found() {
    let mut tasks = service();
    let missing = Uuid::new_v4();

    assert_eq!(
        tasks.toggle_task(missing).unwrap_err(),
        TaskServiceError::TaskNotFound(missing)
    );
    assert_eq!(
        tasks.delete_task(missing).unwrap_err(),
        TaskServiceError::TaskNotFound(missing)
    );
}

#[test]
fn counts_follow_deletes_and_toggles() {
    let mut tasks = service();
    let a = tasks.add_task(NewTask::titled("a")).unwrap();
    let b = tasks.add_task(NewTask::titled("b")).unwrap();
    tasks.add_task(NewTask::titled("c")).unwrap();
    tasks.toggle_task(a.id).unwrap();
    tasks.delete_task(b.id).unwrap();

    let counts = tasks.counts().unwrap();
    assert_eq!((counts.all, counts.pending, counts.completed), (2, 1, 1));
    assert_eq!(tasks.list_tasks(TaskFilter::Pending).unwrap().len(), 1);
}
