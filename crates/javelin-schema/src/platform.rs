//! Target platform identifiers.

use serde::{Deserialize, Serialize};

/// Operating systems recognized by version-metadata rules.
///
/// The names match the `os.name` values that appear in upstream
/// metadata (`windows`, `linux`, `osx`). The launch pipeline takes the
/// platform as an explicit parameter so commands can be constructed
/// for any target, not just the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Linux (any distribution).
    Linux,
    /// macOS, named `osx` in metadata.
    #[serde(rename = "osx")]
    MacOs,
}

impl Platform {
    /// The platform the launcher itself is running on.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Self::Windows
        }
        #[cfg(target_os = "macos")]
        {
            Self::MacOs
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Self::Linux
        }
    }

    /// The metadata name for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "osx",
        }
    }

    /// Separator used when joining classpath entries on this platform.
    pub fn classpath_separator(&self) -> &'static str {
        match self {
            Self::Windows => ";",
            Self::Linux | Self::MacOs => ":",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "osx" | "macos" | "darwin" => Ok(Self::MacOs),
            _ => Err(format!("Unknown platform: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_round_trip() {
        for platform in [Platform::Windows, Platform::Linux, Platform::MacOs] {
            assert_eq!(Platform::from_str(platform.as_str()).unwrap(), platform);
        }
    }

    #[test]
    fn accepts_macos_aliases() {
        assert_eq!(Platform::from_str("darwin").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_str("macos").unwrap(), Platform::MacOs);
    }

    #[test]
    fn classpath_separator_per_platform() {
        assert_eq!(Platform::Windows.classpath_separator(), ";");
        assert_eq!(Platform::Linux.classpath_separator(), ":");
    }
}
