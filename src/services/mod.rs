// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod journal;

pub use journal::JournalService;
