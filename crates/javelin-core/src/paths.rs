//! Directory layout under the javelin base directory.
//!
//! ```text
//! <base>/
//! ├── versions/<id>/<id>.jar      # client jar + persisted metadata
//! ├── libraries/                  # artifacts by coordinate path
//! ├── libraries/natives/          # downloaded native companion jars
//! ├── natives/<id>/               # extracted native libraries
//! └── assets/{indexes,objects}/   # asset index + content store
//! ```

use dirs::home_dir;
use javelin_schema::Coordinate;
use std::path::{Path, PathBuf};

/// Returns the base directory, or None if the user's home cannot be resolved.
pub fn try_javelin_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("JAVELIN_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".javelin"))
}

/// Directory holding a version's jar and persisted metadata.
pub fn version_dir(base: &Path, id: &str) -> PathBuf {
    base.join("versions").join(id)
}

/// The client jar for a version: `versions/<id>/<id>.jar`.
pub fn version_jar(base: &Path, id: &str) -> PathBuf {
    version_dir(base, id).join(format!("{id}.jar"))
}

/// The persisted metadata document: `versions/<id>/<id>.json`.
pub fn version_json(base: &Path, id: &str) -> PathBuf {
    version_dir(base, id).join(format!("{id}.json"))
}

/// Root of the library artifact store.
pub fn libraries_dir(base: &Path) -> PathBuf {
    base.join("libraries")
}

/// Absolute path of a library artifact under the store.
pub fn library_path(base: &Path, coordinate: &Coordinate) -> PathBuf {
    libraries_dir(base).join(coordinate.artifact_path())
}

/// Where downloaded native companion jars land before extraction.
pub fn native_jars_dir(base: &Path) -> PathBuf {
    libraries_dir(base).join("natives")
}

/// Where a version's native libraries are extracted to; injected into
/// the variable table as `natives_directory`.
pub fn natives_dir(base: &Path, id: &str) -> PathBuf {
    base.join("natives").join(id)
}

/// Directory holding downloaded asset index documents.
pub fn asset_indexes_dir(base: &Path) -> PathBuf {
    base.join("assets").join("indexes")
}

/// Root of the content-addressed asset object store.
pub fn asset_objects_dir(base: &Path) -> PathBuf {
    base.join("assets").join("objects")
}

/// Extract the filename from a URL.
pub fn filename_from_url(url: &str) -> &str {
    url.split('/').next_back().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_under_base() {
        let base = Path::new("/data/javelin");
        assert_eq!(
            version_jar(base, "1.20.4"),
            PathBuf::from("/data/javelin/versions/1.20.4/1.20.4.jar")
        );
        assert_eq!(
            natives_dir(base, "1.20.4"),
            PathBuf::from("/data/javelin/natives/1.20.4")
        );

        let coord = Coordinate::parse("org.lwjgl:lwjgl:3.3.1").unwrap();
        assert_eq!(
            library_path(base, &coord),
            PathBuf::from("/data/javelin/libraries/org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1.jar")
        );
    }

    #[test]
    fn filename_from_url_takes_last_segment() {
        assert_eq!(
            filename_from_url("https://example.com/a/b/file.jar"),
            "file.jar"
        );
        assert_eq!(filename_from_url(""), "");
    }
}
