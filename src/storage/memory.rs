// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory todo store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, TodoStore};
use crate::models::Todo;

#[derive(Default)]
struct Inner {
    todos: BTreeMap<i32, Todo>,
    last_id: i32,
}

/// Todo store backed by a `BTreeMap`, ids assigned like a serial column.
#[derive(Default)]
pub struct InMemoryTodoStore {
    inner: RwLock<Inner>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn create(&self, text: String) -> StoreResult<Todo> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            text,
            completed: false,
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn set_completed(&self, id: i32, completed: bool) -> StoreResult<Todo> {
        let mut inner = self.inner.write().await;
        let todo = inner.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        todo.completed = completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<Todo> {
        let mut inner = self.inner.write().await;
        inner.todos.remove(&id).ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_increase_and_are_not_reused() {
        let store = InMemoryTodoStore::new();
        let first = store.create("first".into()).await.unwrap();
        let second = store.create("second".into()).await.unwrap();
        store.delete(second.id).await.unwrap();
        let third = store.create("third".into()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
        assert!(!third.completed);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = InMemoryTodoStore::new();
        for text in ["a", "b", "c"] {
            store.create(text.into()).await.unwrap();
        }

        let texts: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = InMemoryTodoStore::new();
        assert!(matches!(
            store.set_completed(42, true).await,
            Err(StoreError::NotFound(42))
        ));
        assert!(matches!(store.delete(42).await, Err(StoreError::NotFound(42))));
    }
}
