use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Form, Router,
};
use maud::Markup;

use crate::components::{page, CreationForm, Submission, TodoList, TODO_ADDED_EVENT};
use crate::models::Todo;
use crate::store::TodoStore;

// === App State ===
#[derive(Clone)]
struct AppState {
    store: Arc<dyn TodoStore>,
}

pub fn router(store: Arc<dyn TodoStore>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/todos", get(todos).post(create_todo))
        .route("/todos/toggle", post(toggle_todo))
        .route("/todos/:id", delete(remove_todo))
        .with_state(AppState { store })
}

async fn root() -> Markup {
    page::page()
}

async fn todos(State(state): State<AppState>) -> Markup {
    let mut list = TodoList::mount();
    list.refresh(state.store.as_ref()).await;
    list.render()
}

async fn create_todo(
    State(state): State<AppState>,
    Form(mut form): Form<CreationForm>,
) -> Response {
    match form.submit(state.store.as_ref()).await {
        Submission::Suppressed => form.render().into_response(),
        Submission::Added => ([("HX-Trigger", TODO_ADDED_EVENT)], form.render()).into_response(),
    }
}

async fn toggle_todo(State(state): State<AppState>, Form(todo): Form<Todo>) -> Markup {
    let mut list = TodoList::mount();
    list.toggle(state.store.as_ref(), &todo).await;
    list.render()
}

async fn remove_todo(State(state): State<AppState>, Path(id): Path<i64>) -> Markup {
    let mut list = TodoList::mount();
    list.delete(state.store.as_ref(), id).await;
    list.render()
}
