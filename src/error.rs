//! Domain-specific error types for the shellrc compiler.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`ConfigError`], [`CompileError`])
//! while the command handler at the CLI boundary converts them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ShellrcError
//! ├── Config(ConfigError)   : reading, parsing, merging, schema validation
//! └── Compile(CompileError) : unsupported shell, dependency problems
//! ```

use thiserror::Error;

/// Top-level error type for the shellrc compiler.
#[derive(Error, Debug)]
pub enum ShellrcError {
    /// Configuration-related error (I/O, TOML syntax, schema).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Compilation error (converter selection, dependency ordering).
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Errors that arise while loading configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {path}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("Invalid TOML syntax in {file}: {message}")]
    InvalidSyntax {
        /// Path of the offending file.
        file: String,
        /// Parser message.
        message: String,
    },

    /// The merged configuration does not match the expected schema.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that arise while compiling a configuration into a script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// No converter is registered for the requested shell.
    #[error("Unsupported shell '{0}': must be one of bash, zsh, fish")]
    UnsupportedShell(String),

    /// The scheduler could not order every entry.
    #[error("Configuration contains a circular dependency")]
    CircularDependency,

    /// An entry depends on a label that no entry declares.
    #[error("Entry `{command}` depends on unknown label '{label}'")]
    DanglingDependency {
        /// The label that could not be resolved.
        label: String,
        /// Rendered command of the dependent entry.
        command: String,
    },
}
