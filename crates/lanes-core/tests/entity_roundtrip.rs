//! Serde roundtrip and JsonSchema validation tests for stored entity shapes.

use chrono::Utc;
use schemars::schema_for;
use lanes_core::entities::*;
use lanes_core::enums::Priority;
use lanes_core::seed::seed_tasks;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $schema_ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($schema_ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    board_roundtrip,
    Board,
    Board,
    Board::new("brd-0123", "Roadmap", Utc::now())
);

roundtrip_and_validate!(
    full_task_roundtrip,
    Task,
    TaskRecord,
    Task {
        id: "tsk-0123".into(),
        column_id: ColumnId::todo(),
        title: "Write release notes".into(),
        description: Some("Cover the storage migration".into()),
        labels: vec!["Docs".into(), "Release".into()],
        order: 0,
        priority: Priority::High,
        due_date: Some(Utc::now()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    minimal_task_roundtrip,
    Task,
    TaskRecord,
    Task {
        id: "tsk-0456".into(),
        column_id: ColumnId::new("Backlog"),
        title: "Triage".into(),
        description: None,
        labels: Vec::new(),
        order: 3,
        priority: Priority::Low,
        due_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

#[test]
fn seed_list_matches_record_schema() {
    let schema = serde_json::to_value(schema_for!(Vec<TaskRecord>)).unwrap();
    let instance = serde_json::to_value(seed_tasks(Utc::now())).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "seed tasks failed validation: {errors:?}");
}

#[test]
fn legacy_payload_with_millisecond_timestamps_loads() {
    let payload = r#"[{
        "id": "task-landing-refresh",
        "columnId": "Todo",
        "status": "Todo",
        "title": "Refresh landing page hero illustrations",
        "labels": ["Design", "Brand"],
        "order": 0,
        "priority": "high",
        "dueDate": "2024-11-20T10:15:00.000Z",
        "createdAt": "2024-11-10T10:15:00.000Z",
        "updatedAt": "2024-11-15T10:15:00.000Z"
    }]"#;
    let tasks: Vec<Task> = serde_json::from_str(payload).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].column_id, ColumnId::todo());
    assert!(tasks[0].due_date.is_some());
}
