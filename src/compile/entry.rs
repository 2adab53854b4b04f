//! Executable entries: rendered, guard-wrapped directives ready for ordering.
use crate::config::directive::{Directive, OneOrMany};
use crate::platform::{Arch, Os};
use crate::shell::{Converter, Shell};

/// A directive after rendering, with canonical label and dependency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Shell command, guard-wrapped once [`Entry::wrap_guards`] has run.
    pub command: String,
    /// Shells the entry is emitted for; unset means all.
    pub shell: Option<OneOrMany<Shell>>,
    /// Operating systems the entry is emitted on; unset means all.
    pub os: Option<OneOrMany<Os>>,
    /// Architectures the entry is emitted on; unset means all.
    pub arch: Option<OneOrMany<Arch>>,
    /// Command that must be on `PATH` at shell start-up.
    pub if_executable: Option<String>,
    /// Path that must exist at shell start-up.
    pub if_exists: Option<String>,
    /// Empty when the directive has no label; never a dependency target.
    pub label: String,
    /// Labels that must be emitted before this entry.
    pub depends: Vec<String>,
}

impl Entry {
    /// Render a directive's action and canonicalize its label and depends.
    ///
    /// Guards are not applied here; see [`Entry::wrap_guards`].
    #[must_use]
    pub fn render(directive: Directive, converter: &dyn Converter) -> Self {
        let command = directive.action.render(converter);
        let options = directive.options;
        Self {
            command,
            shell: options.shell,
            os: options.os,
            arch: options.arch,
            if_executable: options.if_executable,
            if_exists: options.if_exists,
            label: options.label.unwrap_or_default(),
            depends: options.depends.map(OneOrMany::into_vec).unwrap_or_default(),
        }
    }

    /// Wrap the command in its runtime guards.
    ///
    /// The executable guard is applied first and the existence guard wraps
    /// the result, so the existence check is outermost.
    #[must_use]
    pub fn wrap_guards(mut self, converter: &dyn Converter) -> Self {
        if let Some(command) = &self.if_executable {
            self.command = converter.if_executable(command, &self.command);
        }
        if let Some(path) = &self.if_exists {
            self.command = converter.if_exists(path, &self.command);
        }
        self
    }

    /// Whether this entry names `label` in its dependency list.
    #[must_use]
    pub fn depends_on(&self, label: &str) -> bool {
        self.depends.iter().any(|d| d == label)
    }

    /// Whether another entry can depend on this one.
    #[must_use]
    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }
}
