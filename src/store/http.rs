use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::{StoreError, TodoStore};
use crate::models::{NewTodo, Todo};

/// A [`TodoStore`] backed by a JSON collection endpoint.
///
/// `GET`/`POST` go to the base url, `PUT`/`DELETE` to `{base}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base: String,
}
impl HttpStore {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base)
    }
    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { client, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }
}

fn check(action: &'static str, response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status {
            action,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

#[async_trait]
impl TodoStore for HttpStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        debug!("GET {}", self.base);
        let response = self.client.get(&self.base).send().await?;
        let todos = check("fetch", response)?.json::<Vec<Todo>>().await?;
        Ok(todos)
    }

    async fn create(&self, new: &NewTodo) -> Result<(), StoreError> {
        debug!("POST {}", self.base);
        let response = self.client.post(&self.base).json(new).send().await?;
        check("create", response)?;
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> Result<(), StoreError> {
        let url = self.item_url(todo.id);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(todo).send().await?;
        check("update", response)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        check("delete", response)?;
        Ok(())
    }
}
