//! Fetch planning.
//!
//! Computes what a download collaborator would need to retrieve for a
//! version — the client jar, rule-passing library artifacts, native
//! companion jars for the target platform, and the asset index — as
//! plain values. Nothing here performs I/O, verifies hashes, or
//! decides scheduling; the plan is input for whoever does.

use crate::paths;
use javelin_schema::{AssetIndex, Platform, VersionMetadata};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL of the content-addressed asset store.
const ASSET_STORE_URL: &str = "https://resources.download.minecraft.net";

/// One artifact a collaborator would need to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchItem {
    /// Where to fetch from.
    pub url: String,
    /// Expected SHA-1 content hash, when the metadata provides one.
    pub sha1: Option<String>,
    /// Expected size in bytes, when the metadata provides one.
    pub size: Option<u64>,
    /// Destination path rooted under the base directory.
    pub dest: PathBuf,
}

/// The complete fetch plan for one version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPlan {
    /// Items in deterministic order: client jar, then libraries and
    /// natives in metadata order, then the asset index.
    pub items: Vec<FetchItem>,
    /// Library names excluded because their coordinate would not parse.
    pub skipped: Vec<String>,
}

fn optional_sha1(sha1: &str) -> Option<String> {
    if sha1.is_empty() {
        None
    } else {
        Some(sha1.to_string())
    }
}

/// Compute the fetch plan for a version rooted at `base_dir`.
///
/// Libraries that fail their rules on `platform` or carry no primary
/// artifact contribute nothing; a library whose coordinate fails to
/// parse is recorded in [`FetchPlan::skipped`] instead of aborting.
pub fn fetch_plan(meta: &VersionMetadata, base_dir: &Path, platform: Platform) -> FetchPlan {
    let mut plan = FetchPlan::default();

    if let Some(client) = meta.downloads.get("client") {
        plan.items.push(FetchItem {
            url: client.url.clone(),
            sha1: optional_sha1(&client.sha1),
            size: client.size,
            dest: paths::version_jar(base_dir, &meta.id),
        });
    }

    for lib in &meta.libraries {
        if !lib.applies_to(platform) {
            continue;
        }

        if let Some(artifact) = &lib.downloads.artifact {
            match lib.coordinate() {
                Ok(coordinate) => plan.items.push(FetchItem {
                    url: artifact.url.clone(),
                    sha1: optional_sha1(&artifact.sha1),
                    size: artifact.size,
                    dest: paths::library_path(base_dir, &coordinate),
                }),
                Err(_) => {
                    plan.skipped.push(lib.name.clone());
                    continue;
                }
            }
        }

        // Native companion jar for the target platform, if declared.
        if let Some(classifier) = lib.native_classifier(platform) {
            if let Some(native) = lib.downloads.classifiers.get(classifier) {
                plan.items.push(FetchItem {
                    url: native.url.clone(),
                    sha1: optional_sha1(&native.sha1),
                    size: native.size,
                    dest: paths::native_jars_dir(base_dir)
                        .join(paths::filename_from_url(&native.url)),
                });
            }
        }
    }

    if !meta.asset_index.url.is_empty() {
        plan.items.push(FetchItem {
            url: meta.asset_index.url.clone(),
            sha1: optional_sha1(&meta.asset_index.sha1),
            size: None,
            dest: paths::asset_indexes_dir(base_dir).join(format!("{}.json", meta.asset_index.id)),
        });
    }

    plan
}

/// Fetch items for every object in a parsed asset index, sorted by
/// logical asset name. The object's hash doubles as its expected SHA-1.
pub fn asset_items(index: &AssetIndex, base_dir: &Path) -> Vec<FetchItem> {
    index
        .objects
        .values()
        .map(|object| FetchItem {
            url: format!("{}/{}", ASSET_STORE_URL, object.object_path()),
            sha1: Some(object.hash.clone()),
            size: Some(object.size),
            dest: paths::asset_objects_dir(base_dir).join(object.object_path()),
        })
        .collect()
}
