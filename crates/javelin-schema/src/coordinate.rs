//! Maven-style dependency coordinates.
//!
//! Libraries are identified by a colon-delimited coordinate string
//! (`group:artifact:version[:classifier]`). The coordinate doubles as
//! the source of the artifact's relative path, which is used both as a
//! URL fragment and as a path under the local `libraries/` directory.

use serde::{Deserialize, Serialize};

/// Error raised when a coordinate string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// The string has fewer than the three mandatory segments.
    #[error("invalid coordinate '{input}': expected at least 3 colon-delimited segments, got {segments}")]
    TooFewSegments {
        /// The offending input string.
        input: String,
        /// How many segments were actually present.
        segments: usize,
    },
}

/// The `(group, artifact)` pair that identifies a library for merge
/// purposes. Version and classifier are deliberately excluded: an
/// overlay entry replaces a base entry whenever the identities match,
/// regardless of version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    /// Reverse-DNS group id (e.g. `org.lwjgl`).
    pub group: String,
    /// Artifact name within the group.
    pub artifact: String,
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// A parsed `group:artifact:version[:classifier]` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Reverse-DNS group id.
    pub group: String,
    /// Artifact name.
    pub artifact: String,
    /// Version string (not required to be semver).
    pub version: String,
    /// Optional classifier (e.g. `natives-windows`).
    pub classifier: Option<String>,
}

impl Coordinate {
    /// Parse a coordinate string.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::TooFewSegments`] if the input has
    /// fewer than three colon-delimited segments.
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() < 3 {
            return Err(CoordinateError::TooFewSegments {
                input: input.to_string(),
                segments: parts.len(),
            });
        }

        Ok(Self {
            group: parts[0].to_string(),
            artifact: parts[1].to_string(),
            version: parts[2].to_string(),
            classifier: parts.get(3).map(|s| (*s).to_string()),
        })
    }

    /// The merge identity of this coordinate.
    pub fn identity(&self) -> Identity {
        Identity {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
        }
    }

    /// Relative artifact path, always forward-slash separated.
    ///
    /// `org.lwjgl:lwjgl:3.3.1` becomes
    /// `org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1.jar`; a classifier is
    /// appended to the file name (`lwjgl-3.3.1-natives-windows.jar`).
    /// The same string serves as a URL path fragment and as a path
    /// relative to the local library root.
    pub fn artifact_path(&self) -> String {
        let group_path = self.group.replace('.', "/");
        let mut file = format!("{}-{}", self.artifact, self.version);
        if let Some(classifier) = &self.classifier {
            file.push('-');
            file.push_str(classifier);
        }
        file.push_str(".jar");

        format!("{}/{}/{}/{}", group_path, self.artifact, self.version, file)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}
