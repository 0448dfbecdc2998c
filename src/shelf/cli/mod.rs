//! # CLI Layer
//!
//! One UI client for the shelf library. This is the only code that reads stdin, writes
//! stdout/stderr, or decides exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and one-shot dispatch
//! - `menu`: the interactive session (request/response handler plus its input loop)
//! - `print`: turning `CmdResult`s into terminal text

mod commands;
mod menu;
mod print;
mod setup;

pub use commands::run;
