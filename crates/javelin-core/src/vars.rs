//! The variable-substitution table and its conventional keys.

use javelin_schema::VersionMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from placeholder name to literal replacement string.
///
/// Backed by a `BTreeMap` so iteration order is stable. The launch
/// pipeline reads it; the only keys it writes are `classpath` and
/// `natives_directory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableTable(BTreeMap<String, String>);

impl VariableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a replacement by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Insert or replace a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Caller-supplied identity and session fields for one launch.
///
/// [`LaunchContext::variables`] turns this into the conventional
/// variable set that version metadata expects.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Player display name (`auth_player_name`).
    pub username: String,
    /// Player UUID (`auth_uuid`).
    pub uuid: String,
    /// Session access token (`auth_access_token`).
    pub access_token: String,
    /// Account type tag (`user_type`).
    pub user_type: String,
    /// Client identifier (`clientid`).
    pub client_id: String,
    /// Version-type label (`version_type`).
    pub version_type: String,
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self {
            username: "Player".to_string(),
            uuid: String::new(),
            access_token: String::new(),
            user_type: "legacy".to_string(),
            client_id: String::new(),
            version_type: "release".to_string(),
        }
    }
}

impl LaunchContext {
    /// Build the conventional variable table for a version rooted at
    /// `base_dir`. Directory values use the host path representation;
    /// `game_assets` aliases `assets_root` for pre-1.7 metadata.
    pub fn variables(&self, meta: &VersionMetadata, base_dir: &Path) -> VariableTable {
        let assets_root = base_dir.join("assets").display().to_string();

        let mut vars = VariableTable::new();
        vars.insert("auth_player_name", self.username.as_str());
        vars.insert("version_name", meta.id.as_str());
        vars.insert("game_directory", base_dir.display().to_string());
        vars.insert("assets_root", assets_root.clone());
        vars.insert("game_assets", assets_root);
        vars.insert("assets_index_name", meta.asset_index.id.as_str());
        vars.insert("auth_access_token", self.access_token.as_str());
        vars.insert("auth_uuid", self.uuid.as_str());
        vars.insert("auth_session", self.access_token.as_str());
        vars.insert("user_type", self.user_type.as_str());
        vars.insert("clientid", self.client_id.as_str());
        vars.insert("version_type", self.version_type.as_str());
        vars.insert("user_properties", "{}");
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_meta() -> VersionMetadata {
        serde_json::from_str(
            r#"{
                "id": "1.20.4",
                "mainClass": "net.minecraft.client.main.Main",
                "assetIndex": {"id": "12", "url": "", "sha1": ""}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn conventional_keys_are_present() {
        let context = LaunchContext {
            username: "Steve".to_string(),
            uuid: "1234".to_string(),
            ..LaunchContext::default()
        };
        let vars = context.variables(&minimal_meta(), Path::new("/tmp/javelin"));

        assert_eq!(vars.get("auth_player_name"), Some("Steve"));
        assert_eq!(vars.get("auth_uuid"), Some("1234"));
        assert_eq!(vars.get("version_name"), Some("1.20.4"));
        assert_eq!(vars.get("assets_index_name"), Some("12"));
        assert_eq!(vars.get("user_properties"), Some("{}"));
        assert_eq!(vars.get("game_assets"), vars.get("assets_root"));
    }

    #[test]
    fn insert_overwrites() {
        let mut vars = VariableTable::new();
        vars.insert("classpath", "a");
        vars.insert("classpath", "b");
        assert_eq!(vars.get("classpath"), Some("b"));
    }
}
