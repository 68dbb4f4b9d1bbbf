//! Overlaying loader metadata onto base version metadata.
//!
//! The overlay wins on identity match: any base library sharing a
//! `(group, artifact)` identity with an overlay library is replaced by
//! the overlay's entry, with no version comparison. The loader itself
//! is injected as one more library, and the entry point and version id
//! are rewritten to mark the overlaid variant.

use javelin_schema::{
    ArtifactRef, Coordinate, Identity, Library, LibraryDownloads, LoaderLibrary, LoaderMeta,
    VersionMetadata,
};
use std::collections::HashMap;

/// Suffix appended to the version id of merged metadata.
pub const OVERLAY_ID_SUFFIX: &str = "fabric";

/// Maven repository used for overlay entries that carry no repository
/// URL of their own (notably the loader's own coordinate).
const DEFAULT_LOADER_MAVEN: &str = "https://maven.fabricmc.net/";

/// Result of a merge: the combined metadata plus any overlay entries
/// that were skipped because their coordinate would not parse.
#[derive(Debug, Clone)]
pub struct Merged {
    /// Base metadata with libraries, entry point, and id replaced.
    /// Suitable for verbatim persistence and later re-launch.
    pub metadata: VersionMetadata,
    /// Coordinate strings of skipped overlay entries. Callers decide
    /// whether to report these; the merge itself never fails on them.
    pub skipped: Vec<String>,
}

/// Merge a loader overlay into base version metadata.
///
/// The resulting library list keeps every base library whose identity
/// is absent from the overlay, in base order, followed by all overlay
/// libraries sorted by identity key. The sort makes classpath order
/// reproducible across runs regardless of hash-map iteration order.
pub fn merge(base: &VersionMetadata, overlay: &LoaderMeta) -> Merged {
    let mut table: HashMap<Identity, Library> = HashMap::new();
    let mut skipped = Vec::new();

    // Pool every overlay category; later entries overwrite earlier
    // ones sharing an identity.
    for entry in overlay.launcher_meta.libraries.pooled() {
        match Coordinate::parse(&entry.name) {
            Ok(coordinate) => {
                table.insert(coordinate.identity(), overlay_library(entry, &coordinate));
            }
            Err(_) => skipped.push(entry.name.clone()),
        }
    }

    // The loader itself rides along as one more library.
    match Coordinate::parse(&overlay.loader.maven) {
        Ok(coordinate) => {
            let entry = LoaderLibrary {
                name: overlay.loader.maven.clone(),
                url: None,
                sha1: None,
                size: None,
            };
            table.insert(coordinate.identity(), overlay_library(&entry, &coordinate));
        }
        Err(_) => skipped.push(overlay.loader.maven.clone()),
    }

    // Base libraries not overridden by the overlay, in base order. An
    // unparsable base name has no identity to match on; it is kept and
    // left for the classpath builder to skip.
    let mut libraries: Vec<Library> = base
        .libraries
        .iter()
        .filter(|lib| {
            lib.coordinate()
                .map(|c| !table.contains_key(&c.identity()))
                .unwrap_or(true)
        })
        .cloned()
        .collect();

    // All overlay libraries, sorted by identity for deterministic
    // classpath order.
    let mut overlay_libraries: Vec<(Identity, Library)> = table.into_iter().collect();
    overlay_libraries.sort_by(|(a, _), (b, _)| a.cmp(b));
    libraries.extend(overlay_libraries.into_iter().map(|(_, lib)| lib));

    let mut metadata = base.clone();
    metadata.libraries = libraries;
    metadata.main_class = overlay.launcher_meta.main_class.client().to_string();
    metadata.id = format!("{}-{}", base.id, OVERLAY_ID_SUFFIX);

    Merged { metadata, skipped }
}

/// Convert an overlay entry into a regular library with a resolved
/// artifact URL: the entry's repository root (or the default Maven)
/// joined with the coordinate's artifact path.
fn overlay_library(entry: &LoaderLibrary, coordinate: &Coordinate) -> Library {
    let repository = entry.url.as_deref().unwrap_or(DEFAULT_LOADER_MAVEN);
    let url = format!(
        "{}/{}",
        repository.trim_end_matches('/'),
        coordinate.artifact_path()
    );

    Library {
        name: entry.name.clone(),
        downloads: LibraryDownloads {
            artifact: Some(ArtifactRef {
                url,
                sha1: entry.sha1.clone().unwrap_or_default(),
                size: entry.size,
            }),
            classifiers: HashMap::new(),
        },
        natives: HashMap::new(),
        rules: Vec::new(),
    }
}
