// SPDX-License-Identifier: MIT

//! June-bug Diaries: a pet-activity journal API.
//!
//! This crate provides the backend for logging discrete puppy events
//! (feeding, walks, sleep, etc.) against a hosted Firestore collection
//! and viewing them as a timeline, aggregated stats, and a month calendar.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::JournalService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub journal: JournalService,
}
