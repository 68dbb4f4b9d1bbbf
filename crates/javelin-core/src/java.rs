//! Java runtime selection.
//!
//! Version ids are not semver (`1.20`, `1.8.9`, snapshot ids like
//! `24w14a`), so selection parses the leading `major.minor` pair by
//! hand. Anything unparsable is treated as old and gets Java 8.

/// The Java major version required to run a given version id.
///
/// Ids older than 1.12 (and ids that do not parse as `major.minor`)
/// require Java 8; everything newer runs on 21.
pub fn required_java_major(version_id: &str) -> u32 {
    let mut parts = version_id.split('.');
    let major: u32 = match parts.next().and_then(|p| p.parse().ok()) {
        Some(v) => v,
        None => return 8,
    };
    let minor: u32 = match parts.next().and_then(|p| p.parse().ok()) {
        Some(v) => v,
        None => return 8,
    };

    if major < 1 || (major == 1 && minor < 12) {
        8
    } else {
        21
    }
}
