use strake_core::{FormMode, Task, TaskFields, TaskForm, TaskStatus};

fn stored_task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: "Buy milk".to_string(),
        description: "2%".to_string(),
        status: TaskStatus::ToDo,
    }
}

#[test]
fn blank_fields_block_submission() {
    let form = TaskForm::default();
    assert_eq!(form.submission().unwrap_err(), "Title is required.");

    let mut form = TaskForm::default();
    form.title = "   ".to_string();
    form.description = "2%".to_string();
    assert_eq!(form.submission().unwrap_err(), "Title is required.");

    let mut form = TaskForm::default();
    form.title = "Buy milk".to_string();
    assert_eq!(form.submission().unwrap_err(), "Description is required.");
}

#[test]
fn fresh_form_starts_in_create_mode() {
    let form = TaskForm::default();
    assert_eq!(form.mode, FormMode::Create);
    assert!(!form.is_editing());
    assert_eq!(form.submit_label(), "Add Task");
    assert_eq!(form.status, TaskStatus::ToDo);
}

#[test]
fn editing_copies_the_task_into_the_drafts() {
    let task = stored_task("652f8a0b9d1e");
    let form = TaskForm::editing(&task);

    assert!(form.is_editing());
    assert_eq!(form.submit_label(), "Update Task");
    assert_eq!(form.title, "Buy milk");
    assert_eq!(form.description, "2%");
    assert_eq!(form.status, TaskStatus::ToDo);
    assert!(form.error.is_none());
}

#[test]
fn unchanged_edit_submission_replays_the_stored_fields() {
    let task = stored_task("652f8a0b9d1e");
    let form = TaskForm::editing(&task);

    let (mode, fields) = form.submission().expect("prefilled form submits");
    assert_eq!(mode, FormMode::Edit(task.id.clone()));
    assert_eq!(
        fields,
        TaskFields {
            title: task.title,
            description: task.description,
            status: task.status,
        }
    );
}

#[test]
fn reset_returns_to_create_mode() {
    let mut form = TaskForm::editing(&stored_task("652f8a0b9d1e"));
    form.status = TaskStatus::Done;
    form.error = Some("Save failed: remote returned status 500".to_string());

    form.reset();
    assert_eq!(form, TaskForm::default());
}

#[test]
fn create_then_edit_to_done_scenario() {
    let mut form = TaskForm::default();
    form.title = "Buy milk".to_string();
    form.description = "2%".to_string();

    let (mode, fields) = form.submission().expect("create submits");
    assert_eq!(mode, FormMode::Create);
    assert_eq!(fields.status, TaskStatus::ToDo);

    // The store assigns the id; the reloaded record is what the user edits.
    let stored = Task {
        id: "66b1c2d3e4f5".to_string(),
        title: fields.title,
        description: fields.description,
        status: fields.status,
    };

    let mut form = TaskForm::editing(&stored);
    form.status = TaskStatus::Done;

    let (mode, fields) = form.submission().expect("update submits");
    assert_eq!(mode, FormMode::Edit("66b1c2d3e4f5".to_string()));
    assert_eq!(fields.title, "Buy milk");
    assert_eq!(fields.description, "2%");
    assert_eq!(fields.status, TaskStatus::Done);

    form.reset();
    assert_eq!(form.mode, FormMode::Create);
}

#[test]
fn submission_trims_the_drafts() {
    let mut form = TaskForm::default();
    form.title = "  Buy milk ".to_string();
    form.description = " 2% \n".to_string();
    form.status = TaskStatus::InProgress;

    let (_, fields) = form.submission().expect("padded form submits");
    assert_eq!(fields.title, "Buy milk");
    assert_eq!(fields.description, "2%");
}

#[test]
fn task_records_parse_the_store_wire_shape() {
    let raw = r#"{"_id":"652f8a0b9d1e","title":"Buy milk","description":"2%","status":"In Progress"}"#;
    let task: Task = serde_json::from_str(raw).expect("parse task record");

    assert_eq!(task.id, "652f8a0b9d1e");
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.status, TaskStatus::InProgress);
}

#[test]
fn payloads_never_carry_an_identifier() {
    let fields = TaskFields {
        title: "Buy milk".to_string(),
        description: "2%".to_string(),
        status: TaskStatus::Done,
    };

    let body = serde_json::to_value(&fields).expect("encode fields");
    assert_eq!(body["status"], "Done");
    assert!(body.get("_id").is_none());
    assert!(body.get("id").is_none());
}

#[test]
fn status_labels_cover_the_closed_set() {
    for status in TaskStatus::all() {
        assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(TaskStatus::parse("Archived"), None);
    assert_eq!(TaskStatus::parse(""), None);
}
