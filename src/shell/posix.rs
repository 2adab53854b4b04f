use super::Converter;

/// Converter for bash and zsh.
///
/// Both shells accept the same syntax for every action this tool emits, so
/// the trait's provided methods are used as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posix;

impl Converter for Posix {}
