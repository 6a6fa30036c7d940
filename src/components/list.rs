use maud::{html, Markup};
use tracing::warn;

use crate::models::Todo;
use crate::store::TodoStore;

/// Where the listing is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Error(String),
    Ready,
}

/// The listing component.
///
/// Holds the last successfully fetched snapshot and refetches the whole
/// collection after every mutation; nothing is patched locally.
#[derive(Debug)]
pub struct TodoList {
    state: ListState,
    todos: Vec<Todo>,
    notice: Option<String>,
}
impl TodoList {
    pub fn mount() -> Self {
        Self {
            state: ListState::Loading,
            todos: Vec::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub async fn refresh(&mut self, store: &dyn TodoStore) {
        self.state = ListState::Loading;
        match store.list().await {
            Ok(todos) => {
                self.todos = todos;
                self.state = ListState::Ready;
            }
            Err(err) => {
                warn!("could not load todos: {}", err);
                self.state = ListState::Error(err.to_string());
            }
        }
    }

    pub async fn toggle(&mut self, store: &dyn TodoStore, todo: &Todo) {
        if let Err(err) = store.update(&todo.toggled()).await {
            warn!("could not update todo {}: {}", todo.id, err);
            self.notice = Some(format!("Could not update \"{}\": {}", todo.title, err));
        }
        self.refresh(store).await;
    }

    pub async fn delete(&mut self, store: &dyn TodoStore, id: i64) {
        if let Err(err) = store.delete(id).await {
            warn!("could not delete todo {}: {}", id, err);
            self.notice = Some(format!("Could not delete todo: {}", err));
        }
        self.refresh(store).await;
    }

    /// Renders into `#todo-list`. Outside of `Loading` the fragment carries a
    /// hidden `htmx-indicator` that htmx shows while the container, or a row
    /// button pointing at it, has a request in flight.
    pub fn render(&self) -> Markup {
        html! {
            @if self.state != ListState::Loading {
                p class="htmx-indicator mt-6" { "Loading..." }
            }
            @if let Some(notice) = &self.notice {
                p class="text-red-600 mt-6" { (notice) }
            }
            @match &self.state {
                ListState::Loading => {
                    p class="mt-6" { "Loading..." }
                }
                ListState::Error(message) => {
                    p class="text-red-600 mt-6" { (message) }
                }
                ListState::Ready => {
                    ul class="flex flex-col gap-3 mt-6" {
                        @for todo in &self.todos {
                            (todo_html(todo))
                        }
                    }
                }
            }
        }
    }
}

// a single line item in the todo list
fn todo_html(todo: &Todo) -> Markup {
    let title_class = if todo.done {
        "font-semibold line-through text-gray-500"
    } else {
        "font-semibold"
    };
    html! {
        li class="flex justify-between items-center bg-white p-4 rounded-2xl shadow-md" {
            div {
                h2 class=(title_class) { (todo.title) }
                p class="text-sm text-gray-600" { (todo.description) }
            }
            div class="flex gap-2" {
                button class="px-3 py-1 rounded bg-green-500 text-white hover:bg-green-600"
                    hx-post="/todos/toggle" hx-target="#todo-list" hx-swap="innerHTML"
                    hx-indicator="#todo-list" hx-vals=(serde_json::json!(todo)) {
                    @if todo.done { "Undo" } @else { "Done" }
                }
                button class="px-3 py-1 rounded bg-red-500 text-white hover:bg-red-600"
                    hx-delete={"/todos/" (todo.id)} hx-target="#todo-list" hx-swap="innerHTML"
                    hx-indicator="#todo-list" {
                    "Delete"
                }
            }
        }
    }
}
