use std::sync::Mutex;

use async_trait::async_trait;

use super::{StoreError, TodoStore};
use crate::models::{NewTodo, Todo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewTodo),
    Update(Todo),
    Delete(i64),
}

/// In-memory store that records every call, optionally failing some of them
/// with the given HTTP status.
#[derive(Debug, Default)]
pub struct RecordingStore {
    todos: Mutex<Vec<Todo>>,
    calls: Mutex<Vec<Call>>,
    fail_list: Option<u16>,
    fail_writes: Option<u16>,
}
impl RecordingStore {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            ..Default::default()
        }
    }

    /// Answer every list call with `status`, or succeed again with `None`.
    pub fn set_fail_list(&mut self, status: Option<u16>) {
        self.fail_list = status;
    }
    /// Same as [`Self::set_fail_list`] for create, update and delete.
    pub fn set_fail_writes(&mut self, status: Option<u16>) {
        self.fail_writes = status;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self, action: &'static str) -> Result<(), StoreError> {
        match self.fail_writes {
            Some(status) => Err(StoreError::Status { action, status }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodoStore for RecordingStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        self.record(Call::List);
        if let Some(status) = self.fail_list {
            return Err(StoreError::Status {
                action: "fetch",
                status,
            });
        }
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn create(&self, new: &NewTodo) -> Result<(), StoreError> {
        self.record(Call::Create(new.clone()));
        self.write_result("create")?;
        let mut todos = self.todos.lock().unwrap();
        let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        todos.push(Todo {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            done: new.done,
        });
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> Result<(), StoreError> {
        self.record(Call::Update(todo.clone()));
        self.write_result("update")?;
        let mut todos = self.todos.lock().unwrap();
        if let Some(existing) = todos.iter_mut().find(|t| t.id == todo.id) {
            *existing = todo.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.record(Call::Delete(id));
        self.write_result("delete")?;
        self.todos.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}
