//! # Shelf Architecture
//!
//! Shelf keeps a small book inventory in a single JSON file. The library crate holds all
//! of the behavior; the `shelf` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - One-shot subcommands and the interactive menu            │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Parses raw user text into ids, years, statuses           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One operation each, returns a CmdResult with messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (library.rs)                                       │
//! │  - Ordered books, id assignment, validation, write-through  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - FileBackend (JSON file), MemBackend (tests)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Owner
//!
//! A `Library` assumes it is the only writer of its file. Two processes pointing at the
//! same path are not coordinated; the last save wins.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade taking raw text input
//! - [`commands`]: One module per operation
//! - [`library`]: The record store and [`library::SearchQuery`]
//! - [`store`]: Storage abstraction and backends
//! - [`model`]: `Book`, `Status`, `Locale`
//! - [`validation`]: Field rules for new books
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
pub mod validation;
