use maud::{html, Markup, DOCTYPE};

use super::{CreationForm, TodoList, TODO_ADDED_EVENT};

/// The whole page. The listing starts out loading and pulls itself in on
/// load, and again whenever the form reports an addition.
pub fn page() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Todo App" }
                script src="https://unpkg.com/htmx.org@1.9.10" {}
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-gray-100 font-sans leading-normal tracking-normal" {
                main class="max-w-2xl mx-auto p-6" {
                    h1 class="text-3xl font-bold text-center mb-6" { "Todo App" }
                    (CreationForm::default().render())
                    div id="todo-list" hx-get="/todos" hx-swap="innerHTML" hx-indicator="#todo-list"
                        hx-trigger={"load, " (TODO_ADDED_EVENT) " from:body"} {
                        (TodoList::mount().render())
                    }
                }
            }
        }
    }
}
