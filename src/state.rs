// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::AuthSettings;
use crate::config::AppConfig;
use crate::storage::{InMemoryTodoStore, TodoStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthSettings>,
    pub todos: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, todos: Arc<dyn TodoStore>) -> Self {
        let auth = Arc::new(AuthSettings::from_config(&config));
        Self {
            config,
            auth,
            todos,
        }
    }

    /// State backed by an empty in-memory todo store.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(Arc::new(config), Arc::new(InMemoryTodoStore::new()))
    }
}
