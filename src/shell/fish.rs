use super::Converter;

/// Converter for fish.
///
/// Inherits `if_executable`, `source` and `evaluate` from the POSIX syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fish;

impl Converter for Fish {
    fn if_exists(&self, path: &str, execute: &str) -> String {
        format!("test -e {path} && {execute}")
    }

    fn alias(&self, from: &str, to: &str) -> String {
        format!("alias {to} \"{from}\"")
    }

    fn environment(&self, from: &str, to: &str) -> String {
        format!("set --export --unpath {to} {from}")
    }

    fn path(&self, path: &str) -> String {
        format!("set --path PATH $PATH {path}")
    }
}
