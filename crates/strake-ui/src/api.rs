use gloo::net::http::{Request, Response};
use strake_core::{Task, TaskFields};
use thiserror::Error;
use tracing::debug;

const DEFAULT_TASKS_URL: &str = "http://localhost:4000/tasks";
const TASKS_URL_STORAGE_KEY: &str = "strake.tasks_url";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("remote returned status {0}")]
    Remote(u16),

    #[error("failed decoding remote response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    base_url: String,
}

impl TaskStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn configured() -> Self {
        let base_url = stored_tasks_url().unwrap_or_else(|| {
            option_env!("STRAKE_TASKS_URL")
                .unwrap_or(DEFAULT_TASKS_URL)
                .to_string()
        });
        Self::new(&base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn list(&self) -> Result<Vec<Task>, StoreError> {
        debug!(url = %self.base_url, "listing tasks");
        let response = Request::get(&self.base_url)
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        ensure_success(&response)?;

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))
    }

    pub async fn create(&self, fields: &TaskFields) -> Result<(), StoreError> {
        debug!(url = %self.base_url, title = %fields.title, "creating task");
        let response = Request::post(&self.base_url)
            .json(fields)
            .map_err(|err| StoreError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;

        // The created record in the body is ignored; the caller re-lists.
        ensure_success(&response)
    }

    pub async fn update(&self, id: &str, fields: &TaskFields) -> Result<(), StoreError> {
        let url = self.item_url(id);
        debug!(url = %url, "updating task");
        let response = Request::put(&url)
            .json(fields)
            .map_err(|err| StoreError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;

        ensure_success(&response)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.item_url(id);
        debug!(url = %url, "deleting task");
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;

        ensure_success(&response)
    }
}

fn ensure_success(response: &Response) -> Result<(), StoreError> {
    if response.ok() {
        Ok(())
    } else {
        Err(StoreError::Remote(response.status()))
    }
}

fn stored_tasks_url() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TASKS_URL_STORAGE_KEY).ok().flatten())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
