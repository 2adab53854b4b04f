//! Shell / OS / architecture applicability.
use super::entry::Entry;
use crate::config::directive::OneOrMany;
use crate::platform::Platform;
use crate::shell::Shell;

/// An unset selector matches everything; a set one must contain `current`.
///
/// An unknown `current` value only matches an unset selector.
fn axis_matches<T: PartialEq + Copy>(selector: Option<&OneOrMany<T>>, current: Option<T>) -> bool {
    selector.is_none_or(|selector| current.is_some_and(|value| selector.contains(&value)))
}

/// Whether `entry` should be emitted for `shell` on `platform`.
#[must_use]
pub fn applies(entry: &Entry, shell: Shell, platform: &Platform) -> bool {
    axis_matches(entry.shell.as_ref(), Some(shell))
        && axis_matches(entry.arch.as_ref(), platform.arch)
        && axis_matches(entry.os.as_ref(), platform.os)
}
