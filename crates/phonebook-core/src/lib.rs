// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Phonebook — Core types, configuration, loading and sorting shared across all
// crates.

pub mod config;
pub mod error;
pub mod loader;
pub mod sort;
pub mod types;

pub use config::PhonebookConfig;
pub use error::PhonebookError;
pub use loader::{load_directory, parse_directory};
pub use sort::{SortKey, sort_directory};
pub use types::*;
