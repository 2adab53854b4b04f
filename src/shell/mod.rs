//! Per-shell command rendering.
//!
//! A [`Converter`] maps one abstract action to the concrete syntax of a
//! target shell. The trait's provided methods are the POSIX-style syntax
//! shared by bash and zsh; other shells override only what differs.

mod fish;
mod posix;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CompileError;

pub use fish::Fish;
pub use posix::Posix;

/// Renders abstract shell-initialization actions as command strings.
#[cfg_attr(test, mockall::automock)]
pub trait Converter {
    /// Run `execute` only when `command` resolves on `PATH`.
    fn if_executable(&self, command: &str, execute: &str) -> String {
        format!("command -v {command} >/dev/null 2>&1 && {execute}")
    }

    /// Run `execute` only when `path` exists.
    fn if_exists(&self, path: &str, execute: &str) -> String {
        format!("[ -e {path} ] && {execute}")
    }

    /// Source a file into the current shell.
    fn source(&self, path: &str) -> String {
        format!("source {path}")
    }

    /// Define alias `to` expanding to `from`.
    fn alias(&self, from: &str, to: &str) -> String {
        format!("alias {to} {from}")
    }

    /// Export variable `to` with value `from`.
    fn environment(&self, from: &str, to: &str) -> String {
        format!("export {to}={from}")
    }

    /// Put `path` on the executable search path.
    fn path(&self, path: &str) -> String {
        format!("export PATH={path}:$PATH")
    }

    /// Raw commands pass through untouched.
    fn evaluate(&self, command: &str) -> String {
        command.to_string()
    }
}

static POSIX: Posix = Posix;
static FISH: Fish = Fish;

/// A supported target shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    /// GNU Bash.
    Bash,
    /// Z shell.
    Zsh,
    /// Friendly interactive shell.
    Fish,
}

impl Shell {
    /// Every supported shell, in the order shown to users.
    pub const ALL: [Self; 3] = [Self::Bash, Self::Zsh, Self::Fish];

    /// Lowercase shell name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
        }
    }

    /// The converter that renders commands for this shell.
    #[must_use]
    pub fn converter(self) -> &'static dyn Converter {
        match self {
            Self::Bash | Self::Zsh => &POSIX,
            Self::Fish => &FISH,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shell {
    type Err = CompileError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shell| shell.as_str() == name)
            .ok_or_else(|| CompileError::UnsupportedShell(name.to_string()))
    }
}

/// Look up the shell and converter for a user-supplied shell name.
///
/// # Errors
///
/// Returns [`CompileError::UnsupportedShell`] if no converter is registered
/// under `name`.
pub fn resolve(name: &str) -> Result<(Shell, &'static dyn Converter), CompileError> {
    let shell: Shell = name.parse()?;
    Ok((shell, shell.converter()))
}
