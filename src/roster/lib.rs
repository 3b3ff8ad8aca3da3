//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee records library**: validated CRUD over a
//! small collection, persisted to a session-scoped key/value slot. The
//! command-line binary is one client of it, not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, confirms deletes       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session and the Persistence gateway             │
//! │  - Loads stored state once, dispatches intents              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - submit / edit / delete / list / check / clear            │
//! │  - Validation gate, edit pointer, save-after-mutation       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State & Storage (session, records, persistence, store/)    │
//! │  - RecordStore owns the collection and the id generator     │
//! │  - SessionStorage trait: FileStorage, InMemoryStorage       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Ids are positive, unique, and never reused.
//! - Only candidates that pass every rule in [`validation`] reach the store.
//! - The editing pointer is absent or names exactly one stored record.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types. It
//! never writes to stdout/stderr and never produces markup; rendering records
//! and validation messages is the presentation layer's business.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user intent
//! - [`validation`]: Per-field rules
//! - [`records`]: The record store and id generator
//! - [`session`]: Editing pointer and form candidate
//! - [`persistence`]: Save/load of the collection snapshot
//! - [`store`]: Session-scoped slot storage
//! - [`model`]: Core data types (`Employee`, `EmployeeFields`, `CollectionState`)
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod persistence;
pub mod records;
pub mod session;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;
