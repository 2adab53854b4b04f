// Shared helpers for integration tests.
//
// Provides a temporary directory of TOML config files and a fluent builder
// so each integration test can set up isolated inputs without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use shellrc_cli::config::Config;
use shellrc_cli::logging::Logger;
use shellrc_cli::platform::{Arch, Os, Platform};

/// A fixed Linux x86-64 host so results do not depend on the test machine.
pub const LINUX: Platform = Platform::new(Some(Os::Linux), Some(Arch::X86_64));

/// A fixed Apple Silicon host.
pub const DARWIN: Platform = Platform::new(Some(Os::Darwin), Some(Arch::Aarch64));

/// Config files written into a [`tempfile::TempDir`], in merge order.
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding the config files.
    pub root: tempfile::TempDir,
    /// Paths of the written files, in the order they were added.
    pub files: Vec<PathBuf>,
}

impl IntegrationTestContext {
    /// Path to the temporary directory.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Load and merge every written file.
    pub fn load_config(&self) -> Config {
        Config::load(&self.files).expect("load config")
    }

    /// Run the full load + compile pipeline for `shell` on `platform`.
    pub fn build(&self, shell: &str, platform: &Platform) -> String {
        shellrc_cli::commands::generate::build_script(&self.files, shell, platform, &Logger::new())
            .expect("build script")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a context with no config files.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext {
                root: tempfile::tempdir().expect("create temp dir"),
                files: Vec::new(),
            },
        }
    }

    /// Write `content` to `<root>/<filename>` and append it to the merge order.
    pub fn with_config_file(mut self, filename: &str, content: &str) -> Self {
        let path = self.ctx.root.path().join(filename);
        std::fs::write(&path, content).expect("write config file");
        self.ctx.files.push(path);
        self
    }

    /// Append a path that does not exist to the merge order.
    pub fn with_missing_file(mut self, filename: &str) -> Self {
        self.ctx.files.push(self.ctx.root.path().join(filename));
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
