use maud::{html, Markup};
use serde::Deserialize;
use tracing::warn;

use crate::models::NewTodo;
use crate::store::TodoStore;

/// htmx event fired after a submission; the listing refetches on it.
pub const TODO_ADDED_EVENT: &str = "todo-added";

/// Outcome of [`CreationForm::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Empty title, nothing was sent.
    Suppressed,
    /// A create request went out; listeners should refresh.
    Added,
}

/// The creation component.
#[derive(Debug, Default, Deserialize)]
pub struct CreationForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip)]
    notice: Option<String>,
}
impl CreationForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            notice: None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub async fn submit(&mut self, store: &dyn TodoStore) -> Submission {
        if self.title.is_empty() {
            return Submission::Suppressed;
        }
        let new = NewTodo::new(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.description),
        );
        self.notice = match store.create(&new).await {
            Ok(()) => None,
            Err(err) => {
                warn!("could not create todo: {}", err);
                Some(format!("Could not add \"{}\": {}", new.title, err))
            }
        };
        Submission::Added
    }

    pub fn render(&self) -> Markup {
        html! {
            form id="todo-form" class="flex flex-col gap-3 bg-white p-4 rounded-2xl shadow-md"
                hx-post="/todos" hx-swap="outerHTML" {
                @if let Some(notice) = &self.notice {
                    p class="text-red-600" { (notice) }
                }
                input class="p-2 border rounded" type="text" name="title" placeholder="Title" value=(self.title);
                textarea class="p-2 border rounded" name="description" placeholder="Description" { (self.description) }
                button class="bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-700" type="submit" { "Add Todo" }
            }
        }
    }
}
