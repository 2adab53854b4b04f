//! Shell init compiler.
//!
//! Turns a declarative TOML description of shell start-up work (sourced
//! files, aliases, environment variables, `PATH` entries, raw commands)
//! into a single init script for bash, zsh, or fish. Entries can be limited
//! to particular shells, operating systems, or architectures, guarded by
//! runtime checks, and ordered through `label` / `depends` relations.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: load, merge, and lint TOML config files
//! - **[`shell`]**: per-shell converters that render directives as commands
//! - **[`compile`]**: filter, guard, order, and emit the script
//! - **[`commands`]**: command-line orchestration and output
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod compile;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod shell;
