//! Mock data shown by a freshly opened dashboard.

use crate::model::note::{parse_tags, Note};
use crate::model::schedule::{EventKind, ScheduleEvent};
use crate::model::task::{Task, TaskCategory, TaskPriority};
use crate::service::progress_service::{Achievement, StudyStats};
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn tasks() -> Vec<Task> {
    let mut done = Task::new(
        "Math Problem Set #3",
        TaskPriority::Medium,
        TaskCategory::Assignment,
        None,
    );
    done.completed = true;

    vec![
        Task::new(
            "Complete Chapter 5 Reading",
            TaskPriority::High,
            TaskCategory::Study,
            date(2024, 7, 5),
        ),
        done,
        Task::new(
            "Prepare for History Exam",
            TaskPriority::High,
            TaskCategory::Exam,
            date(2024, 7, 8),
        ),
    ]
}

/// Newest first, matching the collection order.
pub fn notes() -> Vec<Note> {
    let seeded = [
        (
            "Calculus - Derivatives",
            "Key formulas for derivatives:\n\n1. Power Rule: d/dx(x^n) = nx^(n-1)\n2. Product Rule: d/dx(uv) = u'v + uv'\n3. Chain Rule: d/dx(f(g(x))) = f'(g(x)) × g'(x)\n\nPractice problems: Complete exercises 1-15 on page 142.",
            "Mathematics",
            "calculus, derivatives, formulas",
            (7, 1),
            (7, 2),
        ),
        (
            "World War II - Key Events",
            "Important dates and events:\n\n• 1939: Germany invades Poland, war begins\n• 1941: Pearl Harbor attack, US enters war\n• 1944: D-Day landings in Normandy\n• 1945: Germany surrenders, atomic bombs dropped\n\nEssay topic: Analyze the impact of WWII on global politics.",
            "History",
            "wwii, timeline, essay",
            (6, 30),
            (7, 1),
        ),
        (
            "Organic Chemistry - Functional Groups",
            "Common functional groups to memorize:\n\n1. Alcohols (-OH)\n2. Aldehydes (-CHO)\n3. Ketones (C=O)\n4. Carboxylic acids (-COOH)\n5. Amines (-NH2)\n\nNaming conventions and reaction mechanisms are crucial for the midterm.",
            "Chemistry",
            "organic, functional-groups, midterm",
            (6, 29),
            (6, 30),
        ),
    ];

    seeded
        .into_iter()
        .filter_map(|(title, content, subject, tags, created, updated)| {
            Some(Note {
                id: Uuid::new_v4(),
                title: title.to_string(),
                content: content.to_string(),
                subject: subject.to_string(),
                tags: parse_tags(tags),
                created_at: date(2024, created.0, created.1)?,
                updated_at: date(2024, updated.0, updated.1)?,
            })
        })
        .collect()
}

pub fn events() -> Vec<ScheduleEvent> {
    let event = |title: &str, time: &str, duration: &str, subject: &str, kind, day| ScheduleEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        subject: subject.to_string(),
        kind,
        day,
    };

    vec![
        event(
            "Mathematics Study Session",
            "09:00",
            "2 hours",
            "Calculus",
            EventKind::Study,
            Weekday::Mon,
        ),
        event(
            "History Essay Writing",
            "11:30",
            "1.5 hours",
            "World History",
            EventKind::Assignment,
            Weekday::Mon,
        ),
        event(
            "Physics Lab Report",
            "14:00",
            "1 hour",
            "Physics",
            EventKind::Assignment,
            Weekday::Tue,
        ),
        event(
            "Chemistry Exam",
            "10:00",
            "2 hours",
            "Organic Chemistry",
            EventKind::Exam,
            Weekday::Wed,
        ),
    ]
}

pub fn study_stats() -> StudyStats {
    StudyStats {
        today_study_hours: 3.5,
        weekly_progress_hours: 15.5,
        focus_sessions: 14,
        streak_days: 5,
    }
}

pub fn achievements() -> Vec<Achievement> {
    [
        ("Study Streak Master", "5 days in a row!", "🔥"),
        ("Task Completionist", "Completed 10 tasks this week", "✅"),
        ("Pomodoro Pro", "20 focus sessions completed", "🍅"),
    ]
    .into_iter()
    .map(|(title, description, icon)| Achievement {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
