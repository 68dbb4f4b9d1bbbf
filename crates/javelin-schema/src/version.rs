//! Version metadata: the per-version document describing libraries,
//! argument templates, downloads, and the asset index, plus the
//! manifest that enumerates available versions.
//!
//! All types deserialize directly from the upstream JSON shapes. The
//! only non-derived parsing is [`ArgumentTemplate`], which accepts the
//! three wire shapes an argument entry may take (bare string, string
//! list, or a rule-gated object) and canonicalizes them into one type.

use crate::LookupError;
use crate::coordinate::{Coordinate, CoordinateError};
use crate::platform::Platform;
use crate::rule::{Rule, rules_allow};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Download descriptor for a single artifact: where to fetch it and
/// how to verify it. Also used for the client jar and asset index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// Download URL.
    pub url: String,
    /// SHA-1 content hash, possibly empty for loader-supplied entries.
    #[serde(default)]
    pub sha1: String,
    /// Size in bytes, when the metadata provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// The `downloads` block of a library: an optional primary artifact
/// plus per-classifier companion artifacts (native jars).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryDownloads {
    /// The main jar, absent for metadata-only entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactRef>,
    /// Native companion jars keyed by classifier name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub classifiers: HashMap<String, ArtifactRef>,
}

/// One library dependency. Constructed once from parsed metadata and
/// never mutated; merging produces new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Coordinate string (`group:artifact:version[:classifier]`).
    pub name: String,
    /// Artifact descriptors.
    #[serde(default)]
    pub downloads: LibraryDownloads,
    /// Per-platform classifier names for native companion jars,
    /// keyed by metadata platform name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub natives: HashMap<String, String>,
    /// Platform-applicability rules; empty means always applicable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl Library {
    /// Parse this library's coordinate string.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if the name has fewer than three
    /// segments. This is recoverable per entry: callers skip the
    /// library rather than abort the launch pipeline.
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::parse(&self.name)
    }

    /// Whether this library's rules allow the given platform.
    pub fn applies_to(&self, platform: Platform) -> bool {
        rules_allow(&self.rules, platform)
    }

    /// The native classifier name for the given platform, if any.
    pub fn native_classifier(&self, platform: Platform) -> Option<&str> {
        self.natives.get(platform.as_str()).map(String::as_str)
    }
}

/// One argument-template entry: an ordered token list gated by a
/// single rule evaluation. The template is atomic — either all of its
/// tokens are considered for emission or none are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentTemplate {
    /// Tokens, each possibly containing `${name}` placeholders.
    pub value: Vec<String>,
    /// Rules gating the whole template.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

/// The three shapes an argument entry takes on the wire. Anything
/// else (numbers, objects with a non-string value, ...) is a hard
/// deserialization error, never coerced.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawArgument {
    Plain(String),
    List(Vec<String>),
    Gated {
        value: RawValue,
        #[serde(default)]
        rules: Vec<Rule>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl From<RawValue> for Vec<String> {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::One(s) => vec![s],
            RawValue::Many(list) => list,
        }
    }
}

impl<'de> Deserialize<'de> for ArgumentTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let template = match RawArgument::deserialize(deserializer)? {
            RawArgument::Plain(s) => Self {
                value: vec![s],
                rules: Vec::new(),
            },
            RawArgument::List(value) => Self {
                value,
                rules: Vec::new(),
            },
            RawArgument::Gated { value, rules } => Self {
                value: value.into(),
                rules,
            },
        };
        Ok(template)
    }
}

/// The templated JVM and game argument lists of a version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Arguments {
    /// Program (game) arguments, appended after the main class.
    #[serde(default)]
    pub game: Vec<ArgumentTemplate>,
    /// JVM arguments, emitted before the main class.
    #[serde(default)]
    pub jvm: Vec<ArgumentTemplate>,
}

/// Pointer to the asset index document for a version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetIndexRef {
    /// Asset index identifier (the `assets_index_name` variable).
    #[serde(default)]
    pub id: String,
    /// Where the index document lives.
    #[serde(default)]
    pub url: String,
    /// SHA-1 of the index document.
    #[serde(default)]
    pub sha1: String,
}

/// The full per-version metadata document.
///
/// Exactly one of `arguments.game` (non-empty) or `legacy_arguments`
/// (non-empty) drives argument construction; templated game arguments
/// take precedence when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionMetadata {
    /// Version identifier (e.g. `1.20.4`).
    pub id: String,
    /// Templated argument lists; empty on pre-1.13 versions.
    #[serde(default)]
    pub arguments: Arguments,
    /// Single legacy argument string used by older versions.
    #[serde(rename = "minecraftArguments", default, skip_serializing_if = "String::is_empty")]
    pub legacy_arguments: String,
    /// Top-level downloads keyed by kind (`client`, `server`, ...).
    #[serde(default)]
    pub downloads: HashMap<String, ArtifactRef>,
    /// Ordered library list.
    #[serde(default)]
    pub libraries: Vec<Library>,
    /// Asset index pointer.
    #[serde(rename = "assetIndex", default)]
    pub asset_index: AssetIndexRef,
    /// Fully qualified main class name.
    #[serde(rename = "mainClass")]
    pub main_class: String,
}

impl VersionMetadata {
    /// Whether this version uses the legacy single-string argument
    /// format instead of templated argument lists.
    pub fn uses_legacy_arguments(&self) -> bool {
        self.arguments.game.is_empty()
    }
}

/// `latest` block of the version manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LatestVersions {
    /// Newest stable release id.
    #[serde(default)]
    pub release: String,
    /// Newest snapshot id.
    #[serde(default)]
    pub snapshot: String,
}

/// One entry in the version manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    /// Version identifier.
    pub id: String,
    /// Release channel (`release`, `snapshot`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Where the full metadata document lives.
    pub url: String,
    /// Last-modified timestamp, as provided upstream.
    #[serde(default)]
    pub time: String,
    /// Release timestamp, as provided upstream.
    #[serde(rename = "releaseTime", default)]
    pub release_time: String,
    /// SHA-1 of the metadata document.
    #[serde(default)]
    pub sha1: String,
}

/// The upstream manifest enumerating every available version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionManifest {
    /// Latest release/snapshot pointers.
    #[serde(default)]
    pub latest: LatestVersions,
    /// All known versions, newest first.
    #[serde(default)]
    pub versions: Vec<VersionSummary>,
}

impl VersionManifest {
    /// Find a version entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::VersionNotFound`] when the id is absent.
    pub fn get(&self, id: &str) -> Result<&VersionSummary, LookupError> {
        self.versions
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| LookupError::VersionNotFound(id.to_string()))
    }
}

/// A downloaded asset index document mapping logical asset names to
/// content-addressed objects. `BTreeMap` keeps iteration order stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetIndex {
    /// Logical asset name to object descriptor.
    #[serde(default)]
    pub objects: BTreeMap<String, AssetObject>,
}

/// One content-addressed asset object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetObject {
    /// SHA-1 content hash; also the storage file name.
    pub hash: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

impl AssetObject {
    /// Relative path of this object in the content-addressed store:
    /// the first two hash characters as a shard directory, then the
    /// full hash (`ab/abcdef...`).
    pub fn object_path(&self) -> String {
        match self.hash.get(..2) {
            Some(prefix) => format!("{}/{}", prefix, self.hash),
            None => self.hash.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_accepts_bare_string() {
        let arg: ArgumentTemplate = serde_json::from_str(r#""--username""#).unwrap();
        assert_eq!(arg.value, vec!["--username"]);
        assert!(arg.rules.is_empty());
    }

    #[test]
    fn argument_accepts_string_list() {
        let arg: ArgumentTemplate =
            serde_json::from_str(r#"["--width", "${resolution_width}"]"#).unwrap();
        assert_eq!(arg.value, vec!["--width", "${resolution_width}"]);
        assert!(arg.rules.is_empty());
    }

    #[test]
    fn argument_accepts_gated_object() {
        let json = r#"{
            "rules": [{"action": "allow", "os": {"name": "osx"}}],
            "value": ["-XstartOnFirstThread"]
        }"#;
        let arg: ArgumentTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(arg.value, vec!["-XstartOnFirstThread"]);
        assert_eq!(arg.rules.len(), 1);

        // Single-string value inside the object form.
        let json = r#"{"rules": [], "value": "-Xss1M"}"#;
        let arg: ArgumentTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(arg.value, vec!["-Xss1M"]);
    }

    #[test]
    fn argument_rejects_unsupported_shapes() {
        assert!(serde_json::from_str::<ArgumentTemplate>("42").is_err());
        assert!(serde_json::from_str::<ArgumentTemplate>(r#"{"value": 42}"#).is_err());
        assert!(serde_json::from_str::<ArgumentTemplate>(r#"["ok", 42]"#).is_err());
    }

    #[test]
    fn wire_shapes_agree_after_canonicalization() {
        let plain: ArgumentTemplate = serde_json::from_str(r#""--demo""#).unwrap();
        let list: ArgumentTemplate = serde_json::from_str(r#"["--demo"]"#).unwrap();
        let gated: ArgumentTemplate =
            serde_json::from_str(r#"{"value": "--demo", "rules": []}"#).unwrap();
        assert_eq!(plain, list);
        assert_eq!(plain, gated);
    }

    #[test]
    fn library_helpers() {
        let json = r#"{
            "name": "org.lwjgl:lwjgl:3.3.1",
            "downloads": {
                "artifact": {"url": "https://example.com/lwjgl.jar", "sha1": "abc", "size": 10},
                "classifiers": {
                    "natives-linux": {"url": "https://example.com/lwjgl-natives-linux.jar", "sha1": "def"}
                }
            },
            "natives": {"linux": "natives-linux"},
            "rules": [{"action": "allow", "os": {"name": "linux"}}]
        }"#;
        let lib: Library = serde_json::from_str(json).unwrap();

        assert!(lib.applies_to(Platform::Linux));
        assert!(!lib.applies_to(Platform::Windows));
        assert_eq!(lib.native_classifier(Platform::Linux), Some("natives-linux"));
        assert_eq!(lib.native_classifier(Platform::Windows), None);
        assert_eq!(lib.coordinate().unwrap().artifact, "lwjgl");
    }

    #[test]
    fn version_metadata_parses_legacy_and_templated() {
        let legacy: VersionMetadata = serde_json::from_str(
            r#"{
                "id": "1.8.9",
                "mainClass": "net.minecraft.client.main.Main",
                "minecraftArguments": "--username ${auth_player_name}"
            }"#,
        )
        .unwrap();
        assert!(legacy.uses_legacy_arguments());

        let templated: VersionMetadata = serde_json::from_str(
            r#"{
                "id": "1.20.4",
                "mainClass": "net.minecraft.client.main.Main",
                "arguments": {"game": ["--username", "${auth_player_name}"], "jvm": []}
            }"#,
        )
        .unwrap();
        assert!(!templated.uses_legacy_arguments());
        assert_eq!(templated.arguments.game.len(), 2);
    }

    #[test]
    fn manifest_lookup() {
        let manifest: VersionManifest = serde_json::from_str(
            r#"{
                "latest": {"release": "1.20.4", "snapshot": "24w14a"},
                "versions": [
                    {"id": "1.20.4", "type": "release", "url": "https://example.com/1.20.4.json"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.get("1.20.4").unwrap().kind, "release");
        assert!(matches!(
            manifest.get("0.0.0"),
            Err(crate::LookupError::VersionNotFound(_))
        ));
    }

    #[test]
    fn asset_object_path_is_sharded() {
        let object = AssetObject {
            hash: "abcdef0123".to_string(),
            size: 1,
        };
        assert_eq!(object.object_path(), "ab/abcdef0123");
    }
}
