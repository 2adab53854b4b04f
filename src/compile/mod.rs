//! The compilation pipeline: directives in, ordered shell script out.
//!
//! Stages, in order:
//!
//! 1. **render**: each directive becomes an [`Entry`] via the shell's converter
//! 2. **check**: every `depends` must name a declared label
//! 3. **filter**: drop entries for other shells, OSes, or architectures
//! 4. **guard**: wrap commands in `if_executable` / `if_exists` checks
//! 5. **graph**: link labels to the entries that depend on them
//! 6. **sort**: topological order; a short result means a cycle
//! 7. **emit**: join commands with newlines

pub mod entry;
pub mod filter;
pub mod graph;
pub mod sort;

use crate::config::Config;
use crate::error::CompileError;
use crate::platform::Platform;
use crate::shell;

pub use entry::Entry;

/// Compile `config` for `shell` on the host platform.
///
/// # Errors
///
/// See [`compile_for`].
pub fn compile(config: &Config, shell: &str) -> Result<String, CompileError> {
    compile_for(config, shell, &Platform::detect())
}

/// Compile `config` for `shell` as if running on `platform`.
///
/// # Errors
///
/// - [`CompileError::UnsupportedShell`] if `shell` has no converter
/// - [`CompileError::DanglingDependency`] if an entry depends on a label no
///   entry declares
/// - [`CompileError::CircularDependency`] if the remaining entries cannot be
///   ordered
pub fn compile_for(
    config: &Config,
    shell: &str,
    platform: &Platform,
) -> Result<String, CompileError> {
    let (shell, converter) = shell::resolve(shell)?;
    tracing::debug!("compiling for {shell} on {platform}");

    let entries: Vec<Entry> = config
        .directives()
        .into_iter()
        .map(|directive| Entry::render(directive, converter))
        .collect();
    graph::check_dependencies(&entries)?;

    let total = entries.len();
    let entries: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| {
            let keep = filter::applies(entry, shell, platform);
            if !keep {
                tracing::debug!("skipping `{}`: not applicable", entry.command);
            }
            keep
        })
        .map(|entry| entry.wrap_guards(converter))
        .collect();
    tracing::debug!("{} of {total} entries apply", entries.len());

    let nodes = graph::build(entries);
    let edges: Vec<Vec<usize>> = nodes.iter().map(|node| node.to.clone()).collect();
    let order = sort::topological_order(&edges);
    if order.len() < nodes.len() {
        return Err(CompileError::CircularDependency);
    }

    let commands: Vec<&str> = order
        .iter()
        .filter_map(|&idx| nodes.get(idx))
        .map(|node| node.entry.command.as_str())
        .collect();
    Ok(emit(&commands))
}

/// Join commands into the final script text, one per line.
#[must_use]
pub fn emit<S: AsRef<str>>(commands: &[S]) -> String {
    commands
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};

    const LINUX: Platform = Platform::new(Some(Os::Linux), Some(Arch::X86_64));

    fn config(toml: &str) -> Config {
        Config::from_table(toml.parse().unwrap()).unwrap()
    }

    fn lines(script: &str) -> Vec<&str> {
        script.lines().collect()
    }

    #[test]
    fn emit_joins_without_trailing_newline() {
        assert_eq!(emit(&["a", "b"]), "a\nb");
        assert_eq!(emit::<&str>(&[]), "");
    }

    #[test]
    fn empty_config_compiles_to_empty_script() {
        assert_eq!(compile_for(&Config::default(), "bash", &LINUX).unwrap(), "");
    }

    #[test]
    fn unsupported_shell_fails() {
        let err = compile_for(&Config::default(), "tcsh", &LINUX).unwrap_err();
        assert_eq!(err, CompileError::UnsupportedShell("tcsh".to_string()));
    }

    #[test]
    fn alias_rendering_per_shell() {
        let cfg = config("[[aliases]]\nfrom = \"ls -la\"\nto = \"ll\"\n");
        assert_eq!(compile_for(&cfg, "bash", &LINUX).unwrap(), "alias ll ls -la");
        assert_eq!(compile_for(&cfg, "zsh", &LINUX).unwrap(), "alias ll ls -la");
        assert_eq!(
            compile_for(&cfg, "fish", &LINUX).unwrap(),
            "alias ll \"ls -la\""
        );
    }

    #[test]
    fn path_rendering_per_shell() {
        let cfg = config("[[paths]]\npath = \"/opt/bin\"\n");
        assert_eq!(
            compile_for(&cfg, "bash", &LINUX).unwrap(),
            "export PATH=/opt/bin:$PATH"
        );
        assert_eq!(
            compile_for(&cfg, "fish", &LINUX).unwrap(),
            "set --path PATH $PATH /opt/bin"
        );
    }

    #[test]
    fn dependency_order_regardless_of_declaration() {
        let forward = config(
            "[[evaluates]]\ncommand = \"A\"\nlabel = \"a\"\n\n[[evaluates]]\ncommand = \"B\"\nlabel = \"b\"\ndepends = \"a\"\n",
        );
        let backward = config(
            "[[evaluates]]\ncommand = \"B\"\nlabel = \"b\"\ndepends = \"a\"\n\n[[evaluates]]\ncommand = \"A\"\nlabel = \"a\"\n",
        );
        assert_eq!(compile_for(&forward, "bash", &LINUX).unwrap(), "A\nB");
        assert_eq!(compile_for(&backward, "bash", &LINUX).unwrap(), "A\nB");
    }

    #[test]
    fn dependency_across_directive_kinds() {
        // paths come last in declaration order but the raw command needs brew on PATH
        let cfg = config(
            r#"
            [[evaluates]]
            command = 'eval "$(starship init zsh)"'
            depends = "brew"

            [[paths]]
            path = "/opt/homebrew/bin"
            label = "brew"
            "#,
        );
        assert_eq!(
            lines(&compile_for(&cfg, "zsh", &LINUX).unwrap()),
            vec![
                "export PATH=/opt/homebrew/bin:$PATH",
                "eval \"$(starship init zsh)\""
            ]
        );
    }

    #[test]
    fn mutual_dependency_is_circular() {
        let cfg = config(
            "[[evaluates]]\ncommand = \"X\"\nlabel = \"x\"\ndepends = \"y\"\n\n[[evaluates]]\ncommand = \"Y\"\nlabel = \"y\"\ndepends = \"x\"\n",
        );
        assert_eq!(
            compile_for(&cfg, "bash", &LINUX),
            Err(CompileError::CircularDependency)
        );
    }

    #[test]
    fn unknown_label_is_dangling() {
        let cfg = config("[[evaluates]]\ncommand = \"B\"\ndepends = \"nothing\"\n");
        assert_eq!(
            compile_for(&cfg, "bash", &LINUX),
            Err(CompileError::DanglingDependency {
                label: "nothing".to_string(),
                command: "B".to_string(),
            })
        );
    }

    #[test]
    fn filtered_out_dependency_is_vacuous() {
        let cfg = config(
            r#"
            [[paths]]
            path = "/opt/homebrew/bin"
            label = "brew"
            os = "darwin"

            [[evaluates]]
            command = "B"
            depends = "brew"
            "#,
        );
        assert_eq!(compile_for(&cfg, "bash", &LINUX).unwrap(), "B");
    }

    #[test]
    fn shell_filter_excludes_other_shells() {
        let cfg = config(
            r#"
            [[evaluates]]
            command = "fish_vi_key_bindings"
            shell = "fish"

            [[evaluates]]
            command = "set -o vi"
            shell = ["bash", "zsh"]

            [[evaluates]]
            command = "always"
            "#,
        );
        assert_eq!(
            compile_for(&cfg, "bash", &LINUX).unwrap(),
            "set -o vi\nalways"
        );
        assert_eq!(
            compile_for(&cfg, "fish", &LINUX).unwrap(),
            "fish_vi_key_bindings\nalways"
        );
    }

    #[test]
    fn guards_wrap_with_existence_outermost() {
        let cfg = config(
            r#"
            [[sources]]
            path = "~/.fzf.bash"
            if_executable = "fzf"
            if_exists = "~/.fzf.bash"
            "#,
        );
        assert_eq!(
            compile_for(&cfg, "bash", &LINUX).unwrap(),
            "[ -e ~/.fzf.bash ] && command -v fzf >/dev/null 2>&1 && source ~/.fzf.bash"
        );
    }

    #[test]
    fn compile_is_deterministic() {
        let cfg = config(
            r#"
            [[evaluates]]
            command = "C"
            depends = ["a", "b"]

            [[evaluates]]
            command = "B"
            label = "b"

            [[evaluates]]
            command = "A"
            label = "a"
            depends = "b"
            "#,
        );
        let first = compile_for(&cfg, "zsh", &LINUX).unwrap();
        let second = compile_for(&cfg, "zsh", &LINUX).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "B\nA\nC");
    }

    #[test]
    fn full_script_snapshot() {
        let cfg = config(
            r#"
            [[paths]]
            path = "$HOME/.cargo/bin"
            label = "cargo"

            [[paths]]
            path = "/opt/homebrew/bin"
            os = "darwin"
            label = "brew"

            [[environments]]
            from = "nvim"
            to = "EDITOR"

            [[aliases]]
            from = "ls -la"
            to = "ll"

            [[aliases]]
            from = "eza --icons"
            to = "ls"
            if_executable = "eza"
            depends = "cargo"

            [[sources]]
            path = "~/.bash_local"
            if_exists = "~/.bash_local"
            shell = "bash"

            [[evaluates]]
            command = 'eval "$(zoxide init bash)"'
            if_executable = "zoxide"
            depends = ["cargo", "brew"]
            "#,
        );
        let bash = compile_for(&cfg, "bash", &LINUX).unwrap();
        insta::assert_snapshot!(bash, @r#"
        [ -e ~/.bash_local ] && source ~/.bash_local
        alias ll ls -la
        export EDITOR=nvim
        export PATH=$HOME/.cargo/bin:$PATH
        command -v zoxide >/dev/null 2>&1 && eval "$(zoxide init bash)"
        command -v eza >/dev/null 2>&1 && alias ls eza --icons
        "#);
    }
}
