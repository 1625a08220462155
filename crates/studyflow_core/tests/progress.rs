use chrono::NaiveDate;
use std::time::Duration;
use studyflow_core::config::TimerConfig;
use studyflow_core::model::task::Task;
use studyflow_core::seed;
use studyflow_core::service::progress_service::{upcoming_tasks, ProgressBoard, StudyStats};
use studyflow_core::{
    Dashboard, DueLabel, NewTask, StudyConfig, TaskCategory, TaskPriority, UserProfile,
};

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn user() -> UserProfile {
    UserProfile {
        name: "Study User".to_string(),
        email: "ada@example.com".to_string(),
    }
}

#[test]
fn due_labels_are_relative_to_today() {
    let today = day(7, 5);
    assert_eq!(DueLabel::relative_to(Some(day(7, 4)), today), DueLabel::Overdue);
    assert_eq!(DueLabel::relative_to(Some(today), today), DueLabel::Today);
    assert_eq!(DueLabel::relative_to(Some(day(7, 6)), today), DueLabel::Tomorrow);
    assert_eq!(DueLabel::relative_to(Some(day(7, 8)), today).to_string(), "3 days");
    assert_eq!(DueLabel::relative_to(None, today).to_string(), "No due date");
}

#[test]
fn upcoming_skips_completed_and_puts_undated_last() {
    let mut done = Task::new("done", TaskPriority::Low, TaskCategory::Study, Some(day(7, 1)));
    done.completed = true;
    let tasks = vec![
        Task::new("undated", TaskPriority::Low, TaskCategory::Study, None),
        done,
        Task::new("later", TaskPriority::High, TaskCategory::Exam, Some(day(7, 9))),
        Task::new("sooner", TaskPriority::Medium, TaskCategory::Project, Some(day(7, 6))),
    ];

    let upcoming = upcoming_tasks(&tasks, day(7, 5), 3);

    let titles: Vec<&str> = upcoming.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["sooner", "later", "undated"]);
    assert_eq!(upcoming[0].due, DueLabel::Tomorrow);
    assert_eq!(upcoming[2].due, DueLabel::NoDueDate);
}

#[test]
fn summary_percentages_are_clamped() {
    let stats = StudyStats {
        today_study_hours: 9.0,
        weekly_progress_hours: 40.0,
        focus_sessions: 2,
        streak_days: 1,
    };
    let board = ProgressBoard::new(stats, Vec::new(), 25.0);

    let summary = board.summarize(&[], 3, day(7, 5));

    assert_eq!(summary.weekly_percent, 100.0);
    assert_eq!(summary.task_percent, 0.0);
    assert_eq!(summary.total_tasks, 0);
    assert_eq!(summary.focus_sessions, 5);
}

#[tokio::test]
async fn seeded_dashboard_summary_reflects_live_tasks() {
    let mut dashboard = Dashboard::seeded(user(), &StudyConfig::default()).unwrap();
    let today = day(7, 5);

    let summary = dashboard.progress_summary(today).await.unwrap();
    assert_eq!(summary.completed_tasks, 1);
    assert_eq!(summary.total_tasks, 3);
    assert_eq!(summary.focus_sessions, seed::study_stats().focus_sessions);
    assert!((summary.weekly_percent - 62.0).abs() < 1e-9);
    assert_eq!(summary.achievements.len(), 3);
    assert_eq!(summary.upcoming.len(), 2);
    assert_eq!(summary.upcoming[0].due, DueLabel::Today);
    assert_eq!(summary.upcoming[1].due, DueLabel::InDays(3));

    dashboard
        .tasks_mut()
        .add_task(NewTask::titled("Flashcards"))
        .unwrap();
    let summary = dashboard.progress_summary(today).await.unwrap();
    assert_eq!(summary.total_tasks, 4);
    assert_eq!(summary.task_percent, 25.0);
    assert_eq!(summary.upcoming[2].due, DueLabel::NoDueDate);
}

#[tokio::test(start_paused = true)]
async fn finished_focus_sessions_feed_the_summary() {
    let config = StudyConfig {
        timer: TimerConfig {
            focus_minutes: 1,
            ..TimerConfig::default()
        },
        ..StudyConfig::default()
    };
    let mut dashboard = Dashboard::seeded(user(), &config).unwrap();

    dashboard.timer_mut().start().await;
    tokio::time::sleep(Duration::from_secs(61)).await;

    let summary = dashboard.progress_summary(day(7, 5)).await.unwrap();
    assert_eq!(summary.focus_sessions, seed::study_stats().focus_sessions + 1);
}
