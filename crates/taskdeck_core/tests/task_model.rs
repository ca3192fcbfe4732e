use chrono::NaiveDate;
use taskdeck_core::{Priority, Task, TaskDraft, TaskValidationError};

fn date(value: &str) -> NaiveDate {
    value.parse().expect("test date should parse")
}

#[test]
fn priority_sorts_high_before_medium_before_low() {
    let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
    priorities.sort();
    assert_eq!(
        priorities,
        vec![Priority::High, Priority::Medium, Priority::Low]
    );
}

#[test]
fn priority_serialization_uses_snake_case_wire_names() {
    assert_eq!(
        serde_json::to_value(Priority::High).unwrap(),
        serde_json::json!("high")
    );
    assert_eq!(
        serde_json::from_value::<Priority>(serde_json::json!("low")).unwrap(),
        Priority::Low
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task {
        id: 7,
        name: "renew passport".to_string(),
        description: "book the appointment".to_string(),
        added_on: date("2026-03-01"),
        due_on: date("2026-04-15"),
        priority: Priority::High,
        completed: false,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "renew passport");
    assert_eq!(json["description"], "book the appointment");
    assert_eq!(json["added_on"], "2026-03-01");
    assert_eq!(json["due_on"], "2026-04-15");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["completed"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn draft_validation_trims_before_checking() {
    let draft = TaskDraft {
        name: "  water plants  ".to_string(),
        description: "\tbalcony only".to_string(),
        due_on: date("2026-03-01"),
        priority: Priority::Low,
    };
    draft
        .validate(date("2026-03-01"))
        .expect("padded but non-blank fields should validate");

    let blank = TaskDraft {
        name: " \t ".to_string(),
        description: "something".to_string(),
        due_on: date("2026-03-01"),
        priority: Priority::Low,
    };
    assert_eq!(
        blank.validate(date("2026-03-01")),
        Err(TaskValidationError::EmptyName)
    );
}

#[test]
fn validation_error_messages_name_the_dates() {
    let draft = TaskDraft {
        name: "call bank".to_string(),
        description: "ask about the fee".to_string(),
        due_on: date("2026-02-27"),
        priority: Priority::Medium,
    };
    let err = draft.validate(date("2026-03-01")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2026-02-27"), "unexpected message: {message}");
    assert!(message.contains("2026-03-01"), "unexpected message: {message}");
}
