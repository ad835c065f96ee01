//! Example tasks for a freshly initialized default board.
//!
//! Six tasks, two per default column, dated relative to the moment the seed
//! is materialized.

use chrono::{DateTime, Duration, Utc};

use crate::entities::{ColumnId, Task};
use crate::enums::Priority;
use crate::order::normalize;

struct SeedSpec {
    id: &'static str,
    column: &'static str,
    title: &'static str,
    description: &'static str,
    labels: &'static [&'static str],
    order: u32,
    priority: Priority,
    due_in_days: i64,
    created_days_ago: i64,
    updated_days_ago: i64,
}

const SEED: [SeedSpec; 6] = [
    SeedSpec {
        id: "task-landing-refresh",
        column: ColumnId::TODO,
        title: "Refresh landing page hero illustrations",
        description: "Align new hero visuals with the updated brand language and craft micro-animations.",
        labels: &["Design", "Brand"],
        order: 0,
        priority: Priority::High,
        due_in_days: 4,
        created_days_ago: 6,
        updated_days_ago: 1,
    },
    SeedSpec {
        id: "task-research-sync",
        column: ColumnId::TODO,
        title: "Schedule customer discovery interviews",
        description: "Coordinate three customer calls focused on onboarding friction and form hypotheses.",
        labels: &["Research"],
        order: 1,
        priority: Priority::Medium,
        due_in_days: 9,
        created_days_ago: 3,
        updated_days_ago: 2,
    },
    SeedSpec {
        id: "task-ai-handbook",
        column: ColumnId::IN_PROGRESS,
        title: "Draft AI handover guidelines",
        description: "Codify expectations for prompt templates and QA steps before handing off to engineering.",
        labels: &["Product", "Documentation"],
        order: 0,
        priority: Priority::Medium,
        due_in_days: 2,
        created_days_ago: 5,
        updated_days_ago: 0,
    },
    SeedSpec {
        id: "task-automation",
        column: ColumnId::IN_PROGRESS,
        title: "Automate weekly analytics snapshot",
        description: "Build lightweight automation that sends the core KPI snapshot to Slack every Monday.",
        labels: &["Automation", "Growth"],
        order: 1,
        priority: Priority::High,
        due_in_days: 1,
        created_days_ago: 7,
        updated_days_ago: 0,
    },
    SeedSpec {
        id: "task-accessibility-audit",
        column: ColumnId::DONE,
        title: "Complete accessibility audit for dashboard",
        description: "Validate color contrast, keyboard flows, and announce upcoming fixes to the team.",
        labels: &["Accessibility"],
        order: 0,
        priority: Priority::Low,
        due_in_days: -1,
        created_days_ago: 11,
        updated_days_ago: 1,
    },
    SeedSpec {
        id: "task-launch-post",
        column: ColumnId::DONE,
        title: "Publish launch retrospective blog post",
        description: "Summarize the launch metrics, lessons learned, and thank the beta cohort.",
        labels: &["Marketing", "Content"],
        order: 1,
        priority: Priority::Medium,
        due_in_days: -2,
        created_days_ago: 14,
        updated_days_ago: 2,
    },
];

/// Materialize the seed set relative to `now`, normalized.
#[must_use]
pub fn seed_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let tasks = SEED
        .iter()
        .map(|spec| Task {
            id: spec.id.to_string(),
            column_id: ColumnId::new(spec.column),
            title: spec.title.to_string(),
            description: Some(spec.description.to_string()),
            labels: spec.labels.iter().map(|l| (*l).to_string()).collect(),
            order: spec.order,
            priority: spec.priority,
            due_date: Some(now + Duration::days(spec.due_in_days)),
            created_at: now - Duration::days(spec.created_days_ago),
            updated_at: now - Duration::days(spec.updated_days_ago),
        })
        .collect();
    normalize(tasks)
}
