//! Host platform detection: operating system and CPU architecture.
use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Operating system tag as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    /// macOS.
    Darwin,
    /// Linux outside WSL.
    Linux,
    /// Windows.
    Windows,
    /// FreeBSD.
    Freebsd,
    /// NetBSD.
    Netbsd,
    /// IBM AIX.
    Aix,
    /// Oracle Solaris.
    Solaris,
    /// illumos.
    Illumos,
    /// Linux running inside the Windows Subsystem for Linux.
    Wsl,
}

impl Os {
    /// Every tag accepted in the `os` option.
    pub const ALL: [Self; 9] = [
        Self::Darwin,
        Self::Linux,
        Self::Windows,
        Self::Freebsd,
        Self::Netbsd,
        Self::Aix,
        Self::Solaris,
        Self::Illumos,
        Self::Wsl,
    ];

    /// Map a Rust target OS name (`std::env::consts::OS`) to a tag.
    ///
    /// Returns `None` for targets the configuration schema has no name for.
    #[must_use]
    pub fn from_target(name: &str) -> Option<Self> {
        match name {
            "macos" => Some(Self::Darwin),
            "linux" => Some(Self::Linux),
            "windows" => Some(Self::Windows),
            "freebsd" => Some(Self::Freebsd),
            "netbsd" => Some(Self::Netbsd),
            "aix" => Some(Self::Aix),
            "solaris" => Some(Self::Solaris),
            "illumos" => Some(Self::Illumos),
            _ => None,
        }
    }

    /// Lowercase tag used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Freebsd => "freebsd",
            Self::Netbsd => "netbsd",
            Self::Aix => "aix",
            Self::Solaris => "solaris",
            Self::Illumos => "illumos",
            Self::Wsl => "wsl",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture tag as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Arch {
    /// 64-bit x86.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 64-bit ARM.
    #[serde(rename = "aarch64")]
    Aarch64,
}

impl Arch {
    /// Map a Rust target architecture name (`std::env::consts::ARCH`) to a tag.
    #[must_use]
    pub fn from_target(name: &str) -> Option<Self> {
        match name {
            "x86_64" => Some(Self::X86_64),
            "aarch64" => Some(Self::Aarch64),
            _ => None,
        }
    }

    /// Lowercase tag used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform information for the current system.
///
/// Either axis is `None` when the host is not one the configuration schema
/// can name; such a platform only matches entries that leave the axis unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Operating system, if the schema has a name for it.
    pub os: Option<Os>,
    /// CPU architecture, if the schema has a name for it.
    pub arch: Option<Arch>,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Arch::from_target(std::env::consts::ARCH),
        }
    }

    /// Create a platform with explicit values.
    #[must_use]
    pub const fn new(os: Option<Os>, arch: Option<Arch>) -> Self {
        Self { os, arch }
    }

    fn detect_os() -> Option<Os> {
        let os = Os::from_target(std::env::consts::OS)?;
        if os == Os::Linux && is_wsl() {
            return Some(Os::Wsl);
        }
        Some(os)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let os = self.os.map_or("unknown", Os::as_str);
        let arch = self.arch.map_or("unknown", Arch::as_str);
        write!(f, "{os}/{arch}")
    }
}

/// Whether this Linux kernel is running under WSL.
fn is_wsl() -> bool {
    wsl_env_present(|name| std::env::var_os(name).is_some())
        || kernel_release_is_wsl(Path::new("/proc/sys/kernel/osrelease"))
}

/// WSL exports `WSL_DISTRO_NAME` and `WSL_INTEROP` into every session.
fn wsl_env_present(is_set: impl Fn(&str) -> bool) -> bool {
    ["WSL_DISTRO_NAME", "WSL_INTEROP"].into_iter().any(is_set)
}

/// WSL kernels carry a `microsoft` marker in their release string
/// (e.g. `5.15.90.1-microsoft-standard-WSL2`).
fn kernel_release_is_wsl(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .is_ok_and(|release| release.to_ascii_lowercase().contains("microsoft"))
}
