// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! KFZ Buddy - Application Server
//!
//! Validates the environment once at startup, classifies the deployment
//! tier, and serves the todo API.
//!
//! ## Modules
//!
//! - `config` - Environment validation and deployment-tier detection
//! - `logging` - `tracing` subscriber setup
//! - `auth` - Cookie policy, trusted origins, signed sessions
//! - `storage` - Todo store (PostgreSQL and in-memory)
//! - `api` - HTTP API handlers (Axum)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod storage;
