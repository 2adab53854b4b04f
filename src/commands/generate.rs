//! The generate command: load, lint, compile, and write the script.
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::compile;
use crate::config::Config;
use crate::config::validation::probe_guards;
use crate::error::ShellrcError;
use crate::logging::Logger;
use crate::platform::Platform;

/// Load, lint, and compile `paths` into a script for `shell` on `platform`.
///
/// Lint findings are logged as warnings and guard probes as debug notes;
/// neither affects the output.
///
/// # Errors
///
/// Returns an error if any file fails to load or the merged configuration
/// cannot be compiled for `shell`.
pub fn build_script(
    paths: &[PathBuf],
    shell: &str,
    platform: &Platform,
    log: &Logger,
) -> Result<String, ShellrcError> {
    log.stage("Loading configuration");
    let config = Config::load(paths)?;
    log.debug(&format!(
        "{} files merged into {} entries ({} paths, {} environments, {} aliases, {} sources, {} evaluates)",
        paths.len(),
        config.len(),
        config.paths.len(),
        config.environments.len(),
        config.aliases.len(),
        config.sources.len(),
        config.evaluates.len(),
    ));

    let warnings = config.validate();
    if !warnings.is_empty() {
        log.warn(&format!(
            "found {} configuration warning(s):",
            warnings.len()
        ));
        for warning in &warnings {
            log.warn(&format!(
                "  {} [{}]: {}",
                warning.source, warning.item, warning.message
            ));
        }
    }
    for note in probe_guards(&config) {
        log.debug(&note);
    }

    log.stage(&format!("Compiling for {shell}"));
    let script = compile::compile_for(&config, shell, platform)?;
    log.debug(&format!("{} lines emitted", script.lines().count()));
    Ok(script)
}

/// Run the generate command: compile and write the script.
///
/// # Errors
///
/// Returns an error if compilation fails or the output cannot be written.
/// Nothing is written when compilation fails.
pub fn run(cli: &Cli, log: &Logger) -> Result<()> {
    let platform = Platform::detect();
    log.debug(&format!("platform: {platform}"));

    let script = build_script(&cli.files, &cli.shell, &platform, log)?;

    if let Some(out) = &cli.out {
        std::fs::write(out, &script)
            .with_context(|| format!("writing output to {}", out.display()))?;
        log.info(&format!("wrote {}", out.display()));
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{script}").context("writing output to stdout")?;
    }

    let warnings = log.warning_count();
    if warnings > 0 {
        log.info(&format!("completed with {warnings} warning(s)"));
    }
    Ok(())
}
