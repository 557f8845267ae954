//! Persistence boundary for todos.
//!
//! # Design
//! The controller only sees `TodoRepository`. The in-memory implementation is
//! what the binary runs with; tests are free to plug in their own.
//!
//! Identifiers come from a counter that starts at 0 and only moves forward,
//! so an id is never handed out twice even after the record is deleted. The
//! counter lives under the same lock as the records. Once `u64::MAX` has been
//! assigned, further creates fail instead of wrapping.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::RepoError;
use crate::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage collaborator the controller delegates to.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn get_all(&self) -> RepoResult<Vec<Todo>>;
    async fn find_by_id(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    async fn create(&self, input: CreateTodo) -> RepoResult<Todo>;
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> RepoResult<Todo>;
    async fn delete(&self, id: TodoId) -> RepoResult<Todo>;
}

/// Process-local repository backed by an ordered map.
///
/// Clones share the same underlying state.
#[derive(Clone, Debug, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

#[derive(Debug)]
struct Store {
    todos: BTreeMap<TodoId, Todo>,
    /// `None` once the id space is used up.
    next_id: Option<TodoId>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: Some(0),
        }
    }
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records, keeping their ids.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos: BTreeMap<TodoId, Todo> = todos.into_iter().map(|t| (t.id, t)).collect();
        let next_id = match todos.last_key_value() {
            Some((last, _)) => last.checked_add(1),
            None => Some(0),
        };
        Self {
            store: Arc::new(RwLock::new(Store { todos, next_id })),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all(&self) -> RepoResult<Vec<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.get(&id).cloned())
    }

    async fn create(&self, input: CreateTodo) -> RepoResult<Todo> {
        let mut store = self.store.write().await;
        let id = store
            .next_id
            .ok_or_else(|| RepoError::Storage("id space exhausted".to_string()))?;
        store.next_id = id.checked_add(1);
        let todo = Todo::from_create(id, input);
        store.todos.insert(id, todo.clone());
        tracing::debug!(id, "todo created");
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: UpdateTodo) -> RepoResult<Todo> {
        let mut store = self.store.write().await;
        let todo = store.todos.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        todo.apply(patch);
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> RepoResult<Todo> {
        let mut store = self.store.write().await;
        store.todos.remove(&id).ok_or(RepoError::NotFound(id))
    }
}
