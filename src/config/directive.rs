//! Typed directive records as they appear in configuration files.
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::platform::{Arch, Os};
use crate::shell::{Converter, Shell};

/// A value that may be written either as a single item or as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    /// A bare value, e.g. `os = "linux"`.
    One(T),
    /// A list of values, e.g. `os = ["linux", "darwin"]`.
    Many(Vec<T>),
}

/// Accepts a scalar or a sequence and hands it straight to `T`, so errors
/// from `T` (such as an unknown variant) reach the user intact.
struct OneOrManyVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrManyVisitor<T> {
    type Value = OneOrMany<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a list of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::deserialize(de::value::StrDeserializer::<E>::new(v)).map(OneOrMany::One)
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        T::deserialize(de::value::BorrowedStrDeserializer::<E>::new(v)).map(OneOrMany::One)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        T::deserialize(de::value::StringDeserializer::<E>::new(v)).map(OneOrMany::One)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        Vec::<T>::deserialize(de::value::SeqAccessDeserializer::new(seq)).map(OneOrMany::Many)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OneOrManyVisitor(PhantomData))
    }
}

impl<T: PartialEq> OneOrMany<T> {
    /// Whether `value` is the single item or one of the listed items.
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::One(item) => item == value,
            Self::Many(items) => items.contains(value),
        }
    }
}

impl<T> OneOrMany<T> {
    /// Promote to a list, keeping declaration order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Borrow the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }
}

/// Options shared by every directive kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Options {
    /// Operating systems the directive applies to; unset means all.
    #[serde(default)]
    pub os: Option<OneOrMany<Os>>,
    /// CPU architectures the directive applies to; unset means all.
    #[serde(default)]
    pub arch: Option<OneOrMany<Arch>>,
    /// Shells the directive applies to; unset means all.
    #[serde(default)]
    pub shell: Option<OneOrMany<Shell>>,
    /// Only run when this command is on `PATH`.
    #[serde(default)]
    pub if_executable: Option<String>,
    /// Only run when this path exists.
    #[serde(default)]
    pub if_exists: Option<String>,
    /// Name other directives can depend on.
    #[serde(default)]
    pub label: Option<String>,
    /// Labels that must run before this directive.
    #[serde(default)]
    pub depends: Option<OneOrMany<String>>,
}

/// `[[sources]]`: source a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Source {
    /// File to source.
    pub path: String,
    /// Shared options.
    #[serde(flatten)]
    pub options: Options,
}

/// `[[aliases]]`: alias `to` expanding to `from`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Alias {
    /// Expansion.
    pub from: String,
    /// Alias name.
    pub to: String,
    /// Shared options.
    #[serde(flatten)]
    pub options: Options,
}

/// `[[environments]]`: export variable `to` with value `from`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Environment {
    /// Value.
    pub from: String,
    /// Variable name.
    pub to: String,
    /// Shared options.
    #[serde(flatten)]
    pub options: Options,
}

/// `[[paths]]`: add a directory to `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPath {
    /// Directory to prepend.
    pub path: String,
    /// Shared options.
    #[serde(flatten)]
    pub options: Options,
}

/// `[[evaluates]]`: a raw command emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Evaluate {
    /// Command text.
    pub command: String,
    /// Shared options.
    #[serde(flatten)]
    pub options: Options,
}

/// The shell action a directive asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Source a file.
    Source {
        /// File to source.
        path: String,
    },
    /// Define an alias.
    Alias {
        /// Expansion.
        from: String,
        /// Alias name.
        to: String,
    },
    /// Export an environment variable.
    Environment {
        /// Value.
        from: String,
        /// Variable name.
        to: String,
    },
    /// Prepend a directory to `PATH`.
    Path {
        /// Directory to prepend.
        path: String,
    },
    /// Emit a raw command.
    Evaluate {
        /// Command text.
        command: String,
    },
}

impl Action {
    /// Render this action with the given converter, without guards.
    #[must_use]
    pub fn render(&self, converter: &dyn Converter) -> String {
        match self {
            Self::Source { path } => converter.source(path),
            Self::Alias { from, to } => converter.alias(from, to),
            Self::Environment { from, to } => converter.environment(from, to),
            Self::Path { path } => converter.path(path),
            Self::Evaluate { command } => converter.evaluate(command),
        }
    }

    /// Configuration key this kind of action is declared under.
    #[must_use]
    pub const fn section(&self) -> &'static str {
        match self {
            Self::Source { .. } => "sources",
            Self::Alias { .. } => "aliases",
            Self::Environment { .. } => "environments",
            Self::Path { .. } => "paths",
            Self::Evaluate { .. } => "evaluates",
        }
    }

    /// Named string fields that must not be empty, for linting.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Source { path } | Self::Path { path } => vec![("path", path.as_str())],
            Self::Alias { from, to } | Self::Environment { from, to } => {
                vec![("from", from.as_str()), ("to", to.as_str())]
            }
            Self::Evaluate { command } => vec![("command", command.as_str())],
        }
    }
}

/// One declarative unit of shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// What to emit.
    pub action: Action,
    /// When and in which order to emit it.
    pub options: Options,
}

impl From<Source> for Directive {
    fn from(s: Source) -> Self {
        Self {
            action: Action::Source { path: s.path },
            options: s.options,
        }
    }
}

impl From<Alias> for Directive {
    fn from(a: Alias) -> Self {
        Self {
            action: Action::Alias {
                from: a.from,
                to: a.to,
            },
            options: a.options,
        }
    }
}

impl From<Environment> for Directive {
    fn from(e: Environment) -> Self {
        Self {
            action: Action::Environment {
                from: e.from,
                to: e.to,
            },
            options: e.options,
        }
    }
}

impl From<SearchPath> for Directive {
    fn from(p: SearchPath) -> Self {
        Self {
            action: Action::Path { path: p.path },
            options: p.options,
        }
    }
}

impl From<Evaluate> for Directive {
    fn from(e: Evaluate) -> Self {
        Self {
            action: Action::Evaluate { command: e.command },
            options: e.options,
        }
    }
}
