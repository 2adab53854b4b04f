//! Non-fatal configuration lints and host probes.
use std::collections::HashMap;
use std::path::Path;

use super::Config;
use super::directive::Directive;

/// A validation warning detected after configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The configuration section (e.g., "aliases", "paths").
    pub source: String,
    /// The specific item that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Create a warning for `item` in the `source` section.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Trait for configuration validators.
pub trait ConfigValidator {
    /// Validate the directives and return any warnings found.
    fn validate(&self, directives: &[Directive]) -> Vec<ValidationWarning>;

    /// Return a human-readable name for this validator.
    fn name(&self) -> &'static str;
}

/// Short identifier for a directive in warning output.
fn describe(directive: &Directive) -> String {
    directive.options.label.as_ref().map_or_else(
        || {
            directive
                .action
                .fields()
                .into_iter()
                .map(|(_, value)| value)
                .collect::<Vec<_>>()
                .join(" ")
        },
        |label| format!("label={label}"),
    )
}

/// Flags labels that are empty, shared, or self-referential.
#[derive(Debug, Default)]
pub struct LabelValidator;

impl ConfigValidator for LabelValidator {
    fn validate(&self, directives: &[Directive]) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for directive in directives {
            let Some(label) = directive.options.label.as_deref() else {
                continue;
            };
            let section = directive.action.section();

            if label.is_empty() {
                warnings.push(ValidationWarning::new(
                    section,
                    describe(directive),
                    "empty label cannot be depended on",
                ));
                continue;
            }

            *counts.entry(label).or_default() += 1;

            let depends_on_self = directive
                .options
                .depends
                .as_ref()
                .is_some_and(|deps| deps.as_slice().iter().any(|d| d == label));
            if depends_on_self {
                warnings.push(ValidationWarning::new(
                    section,
                    describe(directive),
                    "entry depends on its own label",
                ));
            }
        }

        let mut shared: Vec<(&str, usize)> = counts.into_iter().filter(|&(_, n)| n > 1).collect();
        shared.sort_unstable();
        for (label, count) in shared {
            warnings.push(ValidationWarning::new(
                "labels",
                label,
                format!("declared by {count} entries; dependents wait for all of them"),
            ));
        }

        warnings
    }

    fn name(&self) -> &'static str {
        "labels"
    }
}

/// Flags empty `path`, `command`, `from` and `to` values.
#[derive(Debug, Default)]
pub struct FieldValidator;

impl ConfigValidator for FieldValidator {
    fn validate(&self, directives: &[Directive]) -> Vec<ValidationWarning> {
        directives
            .iter()
            .flat_map(|directive| {
                directive
                    .action
                    .fields()
                    .into_iter()
                    .filter(|(_, value)| value.trim().is_empty())
                    .map(|(field, _)| {
                        ValidationWarning::new(
                            directive.action.section(),
                            describe(directive),
                            format!("`{field}` is empty"),
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "fields"
    }
}

impl Config {
    /// Run every validator and collect the warnings.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let directives = self.directives();
        let validators: [&dyn ConfigValidator; 2] = [&LabelValidator, &FieldValidator];
        validators
            .iter()
            .flat_map(|v| {
                let warnings = v.validate(&directives);
                tracing::debug!("{} validator: {} warning(s)", v.name(), warnings.len());
                warnings
            })
            .collect()
    }
}

/// Describe guards that would not pass on this machine right now.
///
/// Guards are evaluated by the target shell at start-up, so a failing probe
/// is not an error; it only explains why a line may be skipped.
#[must_use]
pub fn probe_guards(config: &Config) -> Vec<String> {
    let mut notes = Vec::new();
    for directive in config.directives() {
        if let Some(command) = &directive.options.if_executable
            && which::which(command).is_err()
        {
            notes.push(format!(
                "{}: `{command}` is not on PATH here",
                directive.action.section()
            ));
        }
        if let Some(path) = &directive.options.if_exists
            && !path.contains('$')
            && !path.starts_with('~')
            && !Path::new(path).exists()
        {
            notes.push(format!("{}: {path} does not exist here", directive.action.section()));
        }
    }
    notes
}
