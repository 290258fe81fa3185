pub mod form;
pub mod task;

pub use form::{FormMode, TaskForm};
pub use task::{Task, TaskFields, TaskStatus};
