//! Reference collection service: the JSON API the frontend talks to, backed
//! by the embedded [`Db`].

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::db::Db;
use crate::error::AppError;
use crate::models::{NewTodo, Todo};

// === App State ===
#[derive(Debug, Clone)]
struct ApiState {
    state: Arc<RwLock<Db>>,
}
impl ApiState {
    fn new(db: Db) -> Self {
        Self {
            state: Arc::new(RwLock::new(db)),
        }
    }

    // borrow immutable state
    async fn read(&self) -> RwLockReadGuard<'_, Db> {
        self.state.read().await
    }
    // borrow mutable state
    async fn write(&self) -> RwLockWriteGuard<'_, Db> {
        self.state.write().await
    }
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(ApiState::new(db))
}

// === Routes ===
async fn list_todos(State(state): State<ApiState>) -> Result<Json<Vec<Todo>>, AppError> {
    let db = state.read().await;
    Ok(Json(db.list()?))
}

async fn get_todo(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let db = state.read().await;
    let todo = db
        .get(id)?
        .ok_or_else(|| AppError::not_found(format!("todo {}", id)))?;
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<ApiState>,
    Json(new): Json<NewTodo>,
) -> Result<Json<Todo>, AppError> {
    let db = state.write().await;
    let todo = db.create(new)?;
    debug!("created todo {}", todo.id);
    Ok(Json(todo))
}

// the path id wins over whatever id the body carries
async fn update_todo(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(update): Json<NewTodo>,
) -> Result<Json<Todo>, AppError> {
    let db = state.write().await;
    if db.get(id)?.is_none() {
        return Err(AppError::not_found(format!("todo {}", id)));
    }
    let todo = Todo {
        id,
        title: update.title,
        description: update.description,
        done: update.done,
    };
    db.insert(&todo)?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let db = state.write().await;
    if db.remove(id)? {
        debug!("deleted todo {}", id);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    fn setup() -> Result<(TempDir, Router)> {
        let dir = tempfile::Builder::new().prefix("todo_api").tempdir()?;
        let db = Db::new_with_path(&dir.path().join("db").to_string_lossy())?;
        Ok((dir, router(db)))
    }

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        json: Option<serde_json::Value>,
    ) -> Result<(StatusCode, String)> {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match json {
            Some(json) => {
                request = request.header(CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(request.body(body)?).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(bytes.to_vec())?))
    }

    #[tokio::test]
    async fn test_create_assigns_id() -> Result<()> {
        let (_dir, app) = setup()?;
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/todos",
            Some(serde_json::json!({ "title": "Buy milk", "description": "2%", "done": false })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        let todo: Todo = serde_json::from_str(&body)?;
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");

        let (status, body) = call(&app, Method::GET, "/api/todos/1", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Todo>(&body)?, todo);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_without_optional_fields() -> Result<()> {
        let (_dir, app) = setup()?;
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/todos",
            Some(serde_json::json!({ "title": "bare" })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        let todo: Todo = serde_json::from_str(&body)?;
        assert_eq!(todo.description, "");
        assert!(!todo.done);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_is_json_array() -> Result<()> {
        let (_dir, app) = setup()?;
        let (status, body) = call(&app, Method::GET, "/api/todos", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_todo() -> Result<()> {
        let (_dir, app) = setup()?;
        let (status, _) = call(&app, Method::GET, "/api/todos/9", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(
            &app,
            Method::PUT,
            "/api/todos/9",
            Some(serde_json::json!({ "id": 9, "title": "x", "description": "", "done": true })),
        )
        .await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_uses_path_id() -> Result<()> {
        let (_dir, app) = setup()?;
        call(
            &app,
            Method::POST,
            "/api/todos",
            Some(serde_json::json!({ "title": "a" })),
        )
        .await?;
        let (status, body) = call(
            &app,
            Method::PUT,
            "/api/todos/1",
            Some(serde_json::json!({ "id": 7, "title": "a", "description": "", "done": true })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        let todo: Todo = serde_json::from_str(&body)?;
        assert_eq!(todo.id, 1);
        assert!(todo.done);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() -> Result<()> {
        let (_dir, app) = setup()?;
        call(
            &app,
            Method::POST,
            "/api/todos",
            Some(serde_json::json!({ "title": "a" })),
        )
        .await?;
        let (status, _) = call(&app, Method::DELETE, "/api/todos/1", None).await?;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = call(&app, Method::DELETE, "/api/todos/1", None).await?;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = call(&app, Method::GET, "/api/todos", None).await?;
        assert_eq!(body, "[]");
        Ok(())
    }
}
