//! Configuration loading: parse, merge, and schema-check TOML files.
pub mod directive;
pub mod toml_loader;
pub mod validation;

use rayon::prelude::*;
use serde::Deserialize;
use std::path::PathBuf;
use toml::{Table, Value};

use crate::error::ConfigError;
use directive::{Alias, Directive, Environment, Evaluate, SearchPath, Source};

/// A merged, schema-checked shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// `[[paths]]` entries.
    #[serde(default)]
    pub paths: Vec<SearchPath>,
    /// `[[environments]]` entries.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// `[[aliases]]` entries.
    #[serde(default)]
    pub aliases: Vec<Alias>,
    /// `[[sources]]` entries.
    #[serde(default)]
    pub sources: Vec<Source>,
    /// `[[evaluates]]` entries.
    #[serde(default)]
    pub evaluates: Vec<Evaluate>,
}

impl Config {
    /// Load, merge, and validate the given files.
    ///
    /// Files are read in parallel and merged left to right, so later files
    /// append to the lists of earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be read or parsed, or if the
    /// merged document does not match the configuration schema.
    pub fn load(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let documents = paths
            .par_iter()
            .map(|path| toml_loader::load_document(path))
            .collect::<Result<Vec<Table>, ConfigError>>()?;

        let merged = documents
            .into_iter()
            .fold(Table::new(), |mut merged, document| {
                toml_loader::deep_merge(&mut merged, document);
                merged
            });

        Self::from_table(merged)
    }

    /// Check a generic TOML tree against the configuration schema.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first mismatch.
    pub fn from_table(table: Table) -> Result<Self, ConfigError> {
        Value::Table(table)
            .try_into::<Self>()
            .map_err(|e: toml::de::Error| ConfigError::Invalid(e.to_string().trim_end().to_string()))
    }

    /// Total number of directives across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
            + self.environments.len()
            + self.aliases.len()
            + self.sources.len()
            + self.evaluates.len()
    }

    /// Whether the configuration declares no directives at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All directives in declaration order: raw commands, sources, aliases,
    /// environment variables, then paths, each in file order.
    #[must_use]
    pub fn directives(&self) -> Vec<Directive> {
        let mut directives = Vec::with_capacity(self.len());
        directives.extend(self.evaluates.iter().cloned().map(Directive::from));
        directives.extend(self.sources.iter().cloned().map(Directive::from));
        directives.extend(self.aliases.iter().cloned().map(Directive::from));
        directives.extend(self.environments.iter().cloned().map(Directive::from));
        directives.extend(self.paths.iter().cloned().map(Directive::from));
        directives
    }
}
