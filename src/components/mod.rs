pub mod form;
pub mod list;
pub mod page;

pub use form::{CreationForm, Submission, TODO_ADDED_EVENT};
pub use list::{ListState, TodoList};
