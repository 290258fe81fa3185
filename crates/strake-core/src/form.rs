use crate::task::{Task, TaskFields, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub error: Option<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::ToDo,
            error: None,
        }
    }
}

impl TaskForm {
    pub fn editing(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            error: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Task"
        } else {
            "Add Task"
        }
    }

    pub fn submission(&self) -> Result<(FormMode, TaskFields), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required.".to_string());
        }

        let fields = TaskFields {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
        };
        Ok((self.mode.clone(), fields))
    }
}
