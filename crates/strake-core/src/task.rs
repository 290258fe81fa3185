use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To-Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub fn all() -> [Self; 3] {
        [Self::ToDo, Self::InProgress, Self::Done]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To-Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "To-Do" => Some(Self::ToDo),
            "In Progress" => Some(Self::InProgress),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}
