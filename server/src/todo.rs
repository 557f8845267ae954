//! Domain types for the todo resource.
//!
//! # Design
//! `Todo` is the record the repository owns and the controller serializes.
//! Request payloads are separate types so that a client can never choose the
//! identifier: serde drops unknown fields, so an `id` sent in a create or
//! update body is silently ignored.

use serde::{Deserialize, Serialize};

/// Repository-assigned identifier of a todo.
pub type TodoId = u64;

/// A single todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Position hint for clients that render the list.
    pub order: i64,
}

impl Todo {
    /// Build a record from a create payload and the id the repository picked.
    pub fn from_create(id: TodoId, input: CreateTodo) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
            order: input.order,
        }
    }

    /// Apply the fields present in `patch`, leaving the rest unchanged.
    pub fn apply(&mut self, patch: UpdateTodo) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

/// Request payload for creating a todo.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: i64,
}

/// Request payload for a partial update. Omitted fields stay as they are.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: 0,
            title: "todo item 1".to_string(),
            completed: false,
            order: 0,
        }
    }

    #[test]
    fn todo_serializes_all_four_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 0, "title": "todo item 1", "completed": false, "order": 0})
        );
    }

    #[test]
    fn create_todo_defaults_completed_and_order() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert!(!input.completed);
        assert_eq!(input.order, 0);
    }

    #[test]
    fn create_todo_ignores_client_id() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"id":42,"title":"todo item 2","completed":false,"order":3}"#)
                .unwrap();
        let todo = Todo::from_create(7, input);
        assert_eq!(todo.id, 7);
        assert_eq!(todo.order, 3);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_accepts_full_record() {
        let input: UpdateTodo =
            serde_json::from_str(r#"{"id":0,"title":"todo item 2","completed":false,"order":0}"#)
                .unwrap();
        assert_eq!(input.title.as_deref(), Some("todo item 2"));
        assert_eq!(input.completed, Some(false));
        assert_eq!(input.order, Some(0));
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut todo = sample();
        todo.apply(UpdateTodo {
            completed: Some(true),
            ..UpdateTodo::default()
        });
        assert_eq!(todo.title, "todo item 1");
        assert!(todo.completed);
        assert_eq!(todo.order, 0);

        todo.apply(UpdateTodo {
            title: Some("renamed".to_string()),
            order: Some(5),
            ..UpdateTodo::default()
        });
        assert_eq!(todo.title, "renamed");
        assert!(todo.completed);
        assert_eq!(todo.order, 5);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut todo = sample();
        let input: UpdateTodo = serde_json::from_str("{}").unwrap();
        todo.apply(input);
        assert_eq!(todo, sample());
    }
}
