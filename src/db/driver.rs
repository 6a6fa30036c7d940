use anyhow::Result;
use bincode::{
    config::{BigEndian, WithOtherEndian},
    DefaultOptions, Options,
};
use serde::{Deserialize, Serialize};
use sled::{Db as Sled, Tree};

use crate::models::{NewTodo, Todo};

// what actually lands on disk, the id lives in the key
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    title: String,
    description: String,
    done: bool,
}

pub struct Db {
    handle: Sled,
    todos: Tree,
    encoder: WithOtherEndian<DefaultOptions, BigEndian>,
}
impl Db {
    pub fn new_with_path(path: &str) -> Result<Self> {
        let handle = sled::open(path)?;
        let todos = handle.open_tree("todos")?;
        let encoder = bincode::options().with_big_endian();
        Ok(Self {
            handle,
            todos,
            encoder,
        })
    }

    // ids start at 1; sled hands out 0 first
    pub fn next_id(&self) -> Result<i64> {
        let id = self.handle.generate_id()? + 1;
        Ok(i64::try_from(id)?)
    }

    // CRUD
    pub fn create(&self, new: NewTodo) -> Result<Todo> {
        let todo = Todo {
            id: self.next_id()?,
            title: new.title,
            description: new.description,
            done: new.done,
        };
        self.insert(&todo)?;
        Ok(todo)
    }
    pub fn insert(&self, todo: &Todo) -> Result<()> {
        let record = Record {
            title: todo.title.clone(),
            description: todo.description.clone(),
            done: todo.done,
        };
        let value = self.encoder.serialize(&record)?;
        self.todos.insert(todo.id.to_be_bytes(), value)?;
        Ok(())
    }
    pub fn get(&self, id: i64) -> Result<Option<Todo>> {
        let value = match self.todos.get(id.to_be_bytes())? {
            Some(value) => value,
            None => return Ok(None),
        };
        Ok(Some(self.decode(id, &value)?))
    }
    /// Removes the record, reporting whether it was there.
    pub fn remove(&self, id: i64) -> Result<bool> {
        Ok(self.todos.remove(id.to_be_bytes())?.is_some())
    }

    /// Every todo in key order, which is creation order.
    pub fn list(&self) -> Result<Vec<Todo>> {
        self.todos
            .iter()
            .map(|item| {
                let (key, value) = item?;
                let key = <[u8; 8]>::try_from(&key[..])?;
                self.decode(i64::from_be_bytes(key), &value)
            })
            .collect()
    }

    fn decode(&self, id: i64, value: &[u8]) -> Result<Todo> {
        let record: Record = self.encoder.deserialize(value)?;
        Ok(Todo {
            id,
            title: record.title,
            description: record.description,
            done: record.done,
        })
    }
}

// Required Debug implementation for `Db`
impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish()
    }
}
